//! The immutable entry collection and its precomputed orderings.

use std::{cmp::Ordering, collections::HashMap, iter::FusedIterator, slice};

use lex_entry::Entry;
use lex_query::{normalize_text, sort_key};
use tracing::warn;

use crate::{LexiconError, SortOrder};

/// All entries in load order, with random access by index and two stored orderings.
#[derive(Debug)]
pub struct LexiconStore {
    /// Entries in load order.
    entries: Vec<Entry>,
    /// Entry index to position in `entries`.
    by_index: HashMap<u32, usize>,
    /// Lowercased, stress-free headwords, parallel to `entries`.
    headwords: Vec<String>,
    /// Positions sorted by frequency rank, missing ranks last.
    by_freq: Vec<usize>,
    /// Positions sorted by headword collation key.
    by_alpha: Vec<usize>,
}

impl LexiconStore {
    /// Builds the store, rejecting duplicate entry indices.
    pub fn new(entries: Vec<Entry>) -> Result<Self, LexiconError> {
        let mut by_index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if by_index.insert(entry.index, pos).is_some() {
                return Err(LexiconError::DuplicateEntry { index: entry.index });
            }
            if entry.headword.trim().is_empty() {
                warn!(index = entry.index, "entry has an empty headword");
            }
        }

        let headwords: Vec<String> = entries.iter().map(|e| normalize_text(&e.headword)).collect();

        let mut by_freq: Vec<usize> = (0..entries.len()).collect();
        by_freq.sort_by(|&a, &b| compare_freq(&entries[a], &entries[b]));

        let keys: Vec<String> = entries.iter().map(|e| sort_key(&e.headword)).collect();
        let mut by_alpha: Vec<usize> = (0..entries.len()).collect();
        by_alpha.sort_by(|&a, &b| {
            keys[a]
                .cmp(&keys[b])
                .then(entries[a].index.cmp(&entries[b].index))
        });

        Ok(Self {
            entries,
            by_index,
            headwords,
            by_freq,
            by_alpha,
        })
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if an entry with this index exists.
    pub fn contains(&self, index: u32) -> bool {
        self.by_index.contains_key(&index)
    }

    /// Looks up an entry by its index.
    pub fn get(&self, index: u32) -> Option<&Entry> {
        self.by_index.get(&index).map(|&pos| &self.entries[pos])
    }

    /// Returns all entries in load order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the entry stored at a position.
    pub(crate) fn at(&self, pos: usize) -> &Entry {
        &self.entries[pos]
    }

    /// Returns the normalized headword of the entry stored at a position.
    pub(crate) fn headword_at(&self, pos: usize) -> &str {
        &self.headwords[pos]
    }

    /// Iterates entry positions in the requested order.
    ///
    /// `AlphaRev` walks the alphabetical ordering backwards rather than storing a third
    /// permutation.
    pub(crate) fn positions(&self, order: SortOrder) -> Ordered<'_> {
        let (positions, reverse) = match order {
            SortOrder::Freq => (&self.by_freq, false),
            SortOrder::Alpha => (&self.by_alpha, false),
            SortOrder::AlphaRev => (&self.by_alpha, true),
        };
        Ordered {
            inner: positions.iter(),
            reverse,
        }
    }

    /// Iterates entries in the requested order.
    pub fn ordered(&self, order: SortOrder) -> impl Iterator<Item = &Entry> + '_ {
        self.positions(order).map(|pos| &self.entries[pos])
    }
}

/// Frequency order: ascending rank, entries without a rank after all ranked ones,
/// ties by entry index.
fn compare_freq(a: &Entry, b: &Entry) -> Ordering {
    match (a.rank(), b.rank()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then(a.index.cmp(&b.index))
}

/// Entry positions in one of the stored orders, optionally reversed.
pub(crate) struct Ordered<'a> {
    /// The stored permutation.
    inner: slice::Iter<'a, usize>,
    /// Whether to walk it from the end.
    reverse: bool,
}

impl Iterator for Ordered<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let next = if self.reverse {
            self.inner.next_back()
        } else {
            self.inner.next()
        };
        next.copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Ordered<'_> {}

impl FusedIterator for Ordered<'_> {}
