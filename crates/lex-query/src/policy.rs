//! Match policies deciding whether a term qualifies for a query word.

use std::fmt;

/// How a query word is compared against a term's canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// The term starts with the word.
    #[default]
    Prefix,
    /// The word occurs anywhere in the term.
    Substring,
    /// The term equals the word.
    Exact,
}

impl MatchPolicy {
    /// Returns true if `term` qualifies for `word` under this policy.
    ///
    /// Both sides are expected in search letter form.
    pub fn matches(self, term: &str, word: &str) -> bool {
        match self {
            Self::Prefix => term.starts_with(word),
            Self::Substring => term.contains(word),
            Self::Exact => term == word,
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Prefix => "prefix",
            Self::Substring => "substring",
            Self::Exact => "exact",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_accepts_prefix_and_equal() {
        assert!(MatchPolicy::Prefix.matches("котик", "кот"));
        assert!(MatchPolicy::Prefix.matches("кот", "кот"));
        assert!(!MatchPolicy::Prefix.matches("скот", "кот"));
    }

    #[test]
    fn substring_accepts_inner_occurrence() {
        assert!(MatchPolicy::Substring.matches("скотар", "кот"));
        assert!(MatchPolicy::Substring.matches("кот", "кот"));
        assert!(!MatchPolicy::Substring.matches("кит", "кот"));
    }

    #[test]
    fn exact_requires_equality() {
        assert!(MatchPolicy::Exact.matches("кот", "кот"));
        assert!(!MatchPolicy::Exact.matches("котик", "кот"));
    }

    #[test]
    fn display_names() {
        assert_eq!(MatchPolicy::Substring.to_string(), "substring");
    }
}
