//! Candidate resolution for a single query word.

use std::collections::BTreeSet;

use lex_query::{MatchPolicy, fold_letters};
use roaring::RoaringBitmap;

use crate::TermIndex;

/// Returns the indices of the entries `word` matches under `policy`.
///
/// The word is expected lowercase and stress-free; the variant letters are folded here.
/// Letter buckets are intersected smallest first, then the surviving terms are compared
/// against the word and their entry sets unioned.
pub(crate) fn candidates(terms: &TermIndex, word: &str, policy: MatchPolicy) -> RoaringBitmap {
    let word = fold_letters(word);
    let letters: BTreeSet<char> = word.chars().collect();

    let mut buckets = Vec::with_capacity(letters.len());
    for letter in letters {
        let bucket = terms.terms_containing(letter);
        if bucket.is_empty() {
            return RoaringBitmap::new();
        }
        buckets.push(bucket);
    }
    buckets.sort_by_key(|b| b.len());

    let Some((first, rest)) = buckets.split_first() else {
        return RoaringBitmap::new();
    };
    let mut ids = (*first).clone();
    for bucket in rest {
        ids &= *bucket;
        if ids.is_empty() {
            return ids;
        }
    }

    let mut entries = RoaringBitmap::new();
    for id in &ids {
        if let Some(term) = terms.term(id)
            && policy.matches(&term.text, &word)
        {
            entries |= &term.entries;
        }
    }
    entries
}
