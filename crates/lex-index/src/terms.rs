//! The inverted term index.
//!
//! Terms are the distinct tokens of entry text. Each term knows which entries contain it,
//! and every letter knows which terms contain it. Candidate resolution narrows the
//! term set with letter buckets before comparing any text.

use std::collections::{BTreeSet, HashMap, HashSet};

use lex_entry::{Entry, TermRecord};
use lex_query::{search_form, strip_parentheticals};
use roaring::RoaringBitmap;

use crate::LexiconError;

/// One distinct token of entry text.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    /// Term identifier.
    pub id: u32,
    /// Canonical text in search letter form.
    pub text: String,
    /// Indices of the entries containing this term.
    pub entries: RoaringBitmap,
}

/// Inverted index from letters to terms and from terms to entries.
#[derive(Debug, Default)]
pub struct TermIndex {
    /// Terms ordered by id.
    terms: Vec<Term>,
    /// Term id to position in `terms`.
    ids: HashMap<u32, usize>,
    /// Letter to the ids of the terms containing it.
    letters: HashMap<char, RoaringBitmap>,
    /// Returned for unseen letters and unknown ids.
    empty: RoaringBitmap,
}

impl TermIndex {
    /// Builds the index from persisted term records.
    ///
    /// `known_entry` reports whether an entry index exists; a term pointing anywhere else
    /// is rejected, as are repeated term ids.
    pub fn from_records(
        records: Vec<TermRecord>,
        known_entry: impl Fn(u32) -> bool,
    ) -> Result<Self, LexiconError> {
        let mut terms = Vec::with_capacity(records.len());
        for record in records {
            if let Some(&index) = record.entries.iter().find(|&&i| !known_entry(i)) {
                return Err(LexiconError::UnknownEntry {
                    term_id: record.id,
                    index,
                });
            }
            terms.push(Term {
                id: record.id,
                text: search_form(&record.text),
                entries: record.entries.into_iter().collect(),
            });
        }
        Self::from_terms(terms)
    }

    /// Derives terms by tokenizing every entry's headword, forms and definitions.
    ///
    /// Ids are assigned in order of first appearance, walking entries in load order.
    pub fn derive(entries: &[Entry]) -> Self {
        let mut by_text: HashMap<String, usize> = HashMap::new();
        let mut terms: Vec<Term> = Vec::new();

        for entry in entries {
            for token in entry_terms(entry) {
                let pos = *by_text.entry(token).or_insert_with_key(|text| {
                    terms.push(Term {
                        id: terms.len() as u32,
                        text: text.clone(),
                        entries: RoaringBitmap::new(),
                    });
                    terms.len() - 1
                });
                terms[pos].entries.insert(entry.index);
            }
        }

        let ids = terms.iter().enumerate().map(|(pos, t)| (t.id, pos)).collect();
        let letters = letter_buckets(&terms);
        Self {
            terms,
            ids,
            letters,
            empty: RoaringBitmap::new(),
        }
    }

    /// Indexes already-normalized terms.
    fn from_terms(mut terms: Vec<Term>) -> Result<Self, LexiconError> {
        terms.sort_by_key(|t| t.id);
        let mut ids = HashMap::with_capacity(terms.len());
        for (pos, term) in terms.iter().enumerate() {
            if ids.insert(term.id, pos).is_some() {
                return Err(LexiconError::DuplicateTerm { id: term.id });
            }
        }
        let letters = letter_buckets(&terms);
        Ok(Self {
            terms,
            ids,
            letters,
            empty: RoaringBitmap::new(),
        })
    }

    /// Returns the ids of the terms containing `letter`; empty if the letter is unseen.
    pub fn terms_containing(&self, letter: char) -> &RoaringBitmap {
        self.letters.get(&letter).unwrap_or(&self.empty)
    }

    /// Returns a term's canonical text.
    pub fn term_text(&self, id: u32) -> Option<&str> {
        self.term(id).map(|t| t.text.as_str())
    }

    /// Returns the entries containing a term; empty for an unknown id.
    pub fn entries_of(&self, id: u32) -> &RoaringBitmap {
        self.term(id).map_or(&self.empty, |t| &t.entries)
    }

    /// Looks up a term by id.
    pub fn term(&self, id: u32) -> Option<&Term> {
        self.ids.get(&id).map(|&pos| &self.terms[pos])
    }

    /// Returns all terms ordered by id.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of distinct letters seen across all terms.
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }
}

/// Builds the letter index over canonical term texts.
fn letter_buckets(terms: &[Term]) -> HashMap<char, RoaringBitmap> {
    let mut letters: HashMap<char, RoaringBitmap> = HashMap::new();
    for term in terms {
        let unique: BTreeSet<char> = term.text.chars().collect();
        for c in unique {
            letters.entry(c).or_default().insert(term.id);
        }
    }
    letters
}

/// Returns true for characters that may appear inside a term.
fn is_term_char(c: char) -> bool {
    c.is_alphanumeric() || is_joiner(c)
}

/// Apostrophes and hyphens join parts of a single word.
fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '\u{02BC}' | '-')
}

/// Splits text into its search-form terms.
///
/// The text is normalized, then split on anything other than letters, digits, apostrophes
/// and hyphens. Joiners at either end of a token are trimmed.
pub fn tokenize(text: &str) -> Vec<String> {
    search_form(text)
        .split(|c: char| !is_term_char(c))
        .map(|token| token.trim_matches(is_joiner))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns the distinct terms of an entry in order of appearance: headword first, then
/// form leaves, then definitions with their parenthesized spans removed.
pub fn entry_terms(entry: &Entry) -> Vec<String> {
    let headword = tokenize(&entry.headword);
    let forms = entry.forms.leaves().flat_map(tokenize);
    let defs = entry
        .defs
        .iter()
        .flat_map(|def| tokenize(&strip_parentheticals(def)));

    let mut seen = HashSet::new();
    headword
        .into_iter()
        .chain(forms)
        .chain(defs)
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
