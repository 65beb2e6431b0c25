//! In-memory lexicon and lookup engine for lex.
//!
//! This crate owns the immutable model a lookup runs against:
//! - [`LexiconStore`]: entries with random access by index and two precomputed orderings
//! - [`TermIndex`]: the inverted index from letters to terms and from terms to entries
//! - [`Lexicon`]: both of the above, built once and shared read-only
//!
//! Lookups combine per-word candidate sets with AND semantics, verify quoted phrases,
//! then walk the requested ordering applying the part-of-speech and exact-match filters.
//!
//! # Example
//!
//! ```
//! use lex_entry::Entry;
//! use lex_index::{Lexicon, LookupRequest, SortOrder};
//!
//! let lexicon = Lexicon::build(
//!     vec![
//!         Entry::new(1, "кіт").with_pos("noun").with_freq(10).with_def("cat"),
//!         Entry::new(2, "кітель").with_pos("noun").with_freq(900).with_def("tunic"),
//!     ],
//!     None,
//! )
//! .unwrap();
//!
//! let request = LookupRequest::new("кіт").with_exact(false).with_sort(SortOrder::Alpha);
//! let result = lexicon.lookup(&request);
//! assert_eq!(result.total_matches, 2);
//! assert_eq!(result.data[0].headword, "кіт");
//! ```

#![warn(missing_docs)]

mod error;
mod lookup;
mod order;
mod store;
mod terms;

use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

pub use error::LexiconError;
use lex_entry::{Entry, TermRecord, load_entries, load_terms};
pub use lookup::{DEFAULT_LIMIT, LookupRequest, LookupResult, MAX_LIMIT};
pub use order::{SortOrder, UnknownSortOrder};
pub use store::LexiconStore;
pub use terms::{Term, TermIndex, entry_terms, tokenize};
use tracing::info;

/// Summary figures for a loaded lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LexiconStats {
    /// Number of entries.
    pub entries: usize,
    /// Number of terms.
    pub terms: usize,
    /// Number of distinct letters across all terms.
    pub letters: usize,
    /// Entry count per part-of-speech tag; untagged entries are not counted.
    pub tags: BTreeMap<String, usize>,
}

/// The complete read-only model: entries, orderings and term index.
///
/// A lexicon is built once and never modified. Lookups take `&self` and may run from any
/// number of threads at once.
#[derive(Debug)]
pub struct Lexicon {
    /// Entries and orderings.
    store: LexiconStore,
    /// Inverted term index.
    terms: TermIndex,
}

impl Lexicon {
    /// Builds a lexicon from entries and, optionally, persisted term records.
    ///
    /// Without term records, terms are derived from each entry's headword, forms and
    /// definitions.
    pub fn build(entries: Vec<Entry>, terms: Option<Vec<TermRecord>>) -> Result<Self, LexiconError> {
        let store = LexiconStore::new(entries)?;
        let terms = match terms {
            Some(records) => TermIndex::from_records(records, |index| store.contains(index))?,
            None => TermIndex::derive(store.entries()),
        };
        info!(
            entries = store.len(),
            terms = terms.len(),
            letters = terms.letter_count(),
            "lexicon built"
        );
        Ok(Self { store, terms })
    }

    /// Loads a lexicon from an entry file and an optional term file.
    pub fn load(words: &Path, terms: Option<&Path>) -> Result<Self, LexiconError> {
        let entries = load_entries(words)?;
        let records = terms.map(load_terms).transpose()?;
        Self::build(entries, records)
    }

    /// Runs a lookup. Never fails; no match yields an empty result.
    pub fn lookup(&self, request: &LookupRequest) -> LookupResult<'_> {
        lookup::execute(&self.store, &self.terms, request)
    }

    /// Looks up an entry by its index.
    pub fn entry(&self, index: u32) -> Option<&Entry> {
        self.store.get(index)
    }

    /// Returns the non-empty part-of-speech tags present in the data.
    pub fn pos_tags(&self) -> BTreeSet<&str> {
        self.store.entries().iter().filter_map(Entry::tag).collect()
    }

    /// Returns summary figures.
    pub fn stats(&self) -> LexiconStats {
        let mut tags = BTreeMap::new();
        for tag in self.store.entries().iter().filter_map(Entry::tag) {
            *tags.entry(tag.to_string()).or_default() += 1;
        }
        LexiconStats {
            entries: self.store.len(),
            terms: self.terms.len(),
            letters: self.terms.letter_count(),
            tags,
        }
    }

    /// Returns the entry store.
    pub fn store(&self) -> &LexiconStore {
        &self.store
    }

    /// Returns the term index.
    pub fn terms(&self) -> &TermIndex {
        &self.terms
    }
}
