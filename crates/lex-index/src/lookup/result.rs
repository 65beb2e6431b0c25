//! Lookup results.

use lex_entry::Entry;
use serde::Serialize;

/// The outcome of a lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult<'a> {
    /// Matching entries in the requested order, truncated to the limit.
    pub data: Vec<&'a Entry>,
    /// Quoted phrases from the query; `None` when no query was given.
    pub literal_phrases: Option<Vec<String>>,
    /// Unquoted query words; `None` when no query was given.
    pub fuzzy_words: Option<Vec<String>>,
    /// Number of matching entries before truncation.
    pub total_matches: usize,
}

impl LookupResult<'_> {
    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    /// Returns true if the limit cut off some matches.
    pub fn is_truncated(&self) -> bool {
        self.total_matches > self.data.len()
    }

    /// Returns every phrase and word of the query, for highlighting.
    pub fn highlight_terms(&self) -> Vec<&str> {
        let phrases = self.literal_phrases.iter().flatten();
        let words = self.fuzzy_words.iter().flatten();
        phrases.chain(words).map(String::as_str).collect()
    }
}
