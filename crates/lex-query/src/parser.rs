//! Query normalization into literal phrases and fuzzy words.

use crate::{
    lexer::{Segment, scan},
    normalize::{collapse_whitespace, normalize_text},
    policy::MatchPolicy,
};

/// A normalized search query split into its matching parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// The whole query after trimming, whitespace collapsing, lowercasing and stress
    /// removal. Used for the exact headword check.
    pub normalized: String,
    /// Quoted phrases in query order, quotes removed.
    pub literal_phrases: Vec<String>,
    /// Unquoted words in query order.
    pub fuzzy_words: Vec<String>,
    /// The individual words of every literal phrase, in query order.
    pub literal_words: Vec<String>,
}

impl ParsedQuery {
    /// Selects the match policy for fuzzy words.
    ///
    /// A lone fuzzy word without Latin letters, with no quoted words alongside it, is
    /// matched as a substring of terms. Everything else is matched by prefix.
    pub fn fuzzy_policy(&self) -> MatchPolicy {
        match self.fuzzy_words.as_slice() {
            [word] if self.literal_words.is_empty() && !has_latin(word) => MatchPolicy::Substring,
            _ => MatchPolicy::Prefix,
        }
    }

    /// Returns every word that constrains candidates, paired with its policy.
    pub fn constraints(&self) -> impl Iterator<Item = (&str, MatchPolicy)> {
        let fuzzy_policy = self.fuzzy_policy();
        let fuzzy = self
            .fuzzy_words
            .iter()
            .map(move |w| (w.as_str(), fuzzy_policy));
        let literal = self
            .literal_words
            .iter()
            .map(|w| (w.as_str(), MatchPolicy::Exact));
        fuzzy.chain(literal)
    }
}

/// Returns true if `word` contains an ASCII Latin letter.
fn has_latin(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_alphabetic())
}

/// Normalizes a raw query: stress marks removed, lowercased, trimmed, whitespace collapsed.
pub fn normalize_query(raw: &str) -> String {
    collapse_whitespace(&normalize_text(raw))
}

/// Parses a raw query string.
///
/// Returns `None` only for an empty string, meaning no query was given. Input that is
/// blank after normalization still parses, with no phrases and no words. Any input is
/// accepted, including unbalanced quotes.
pub fn parse(raw: &str) -> Option<ParsedQuery> {
    if raw.is_empty() {
        return None;
    }
    let normalized = normalize_query(raw);

    let mut literal_phrases = Vec::new();
    let mut remainder = String::with_capacity(normalized.len());

    for segment in scan(&normalized) {
        match segment {
            Segment::Phrase(phrase) => literal_phrases.push(phrase),
            Segment::Text(text) => remainder.push_str(&text),
        }
    }

    let fuzzy_words = remainder.split_whitespace().map(str::to_string).collect();
    let literal_words = literal_phrases
        .iter()
        .flat_map(|p| p.split_whitespace())
        .map(str::to_string)
        .collect();

    Some(ParsedQuery {
        normalized,
        literal_phrases,
        fuzzy_words,
        literal_words,
    })
}
