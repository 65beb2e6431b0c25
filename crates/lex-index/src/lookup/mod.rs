//! Query execution.
//!
//! A lookup runs in two phases:
//!
//! 1. **Resolution**: every query word is resolved to a candidate entry set through the
//!    term index, the sets are intersected, and quoted phrases are verified against the
//!    surviving entries' definitions, forms and headwords.
//! 2. **Selection**: one pass over the requested ordering keeps entries that pass the
//!    part-of-speech filter, the candidate set and the exact headword check, counting
//!    them all but collecting only up to the limit.

mod params;
mod phrase;
mod resolve;
mod result;


pub use params::{DEFAULT_LIMIT, LookupRequest, MAX_LIMIT};
pub use result::LookupResult;
use lex_query::{ParsedQuery, parse};
use roaring::RoaringBitmap;
use tracing::debug;

use self::{phrase::contains_phrase, resolve::candidates};
use crate::{LexiconStore, TermIndex};

/// Runs `request` against the model.
pub(crate) fn execute<'a>(
    store: &'a LexiconStore,
    terms: &TermIndex,
    request: &LookupRequest,
) -> LookupResult<'a> {
    let query = request.query.as_deref().and_then(parse);
    let matches = query.as_ref().and_then(|q| resolve_query(store, terms, q));
    let exact = query
        .as_ref()
        .filter(|_| request.exact)
        .map(|q| q.normalized.as_str());
    let pos = request.pos_filter();
    let limit = request.effective_limit();

    let mut data = Vec::new();
    let mut total_matches = 0;
    for position in store.positions(request.sort) {
        let entry = store.at(position);
        if pos.is_some_and(|tag| entry.tag() != Some(tag)) {
            continue;
        }
        if matches.as_ref().is_some_and(|m| !m.contains(entry.index)) {
            continue;
        }
        if exact.is_some_and(|q| store.headword_at(position) != q) {
            continue;
        }
        total_matches += 1;
        if limit.is_none_or(|n| data.len() < n) {
            data.push(entry);
        }
    }

    debug!(
        query = request.query.as_deref().unwrap_or_default(),
        sort = %request.sort,
        candidates = matches.as_ref().map(RoaringBitmap::len),
        total_matches,
        returned = data.len(),
        "lookup"
    );

    let (literal_phrases, fuzzy_words) = match query {
        Some(q) => (Some(q.literal_phrases), Some(q.fuzzy_words)),
        None => (None, None),
    };
    LookupResult {
        data,
        literal_phrases,
        fuzzy_words,
        total_matches,
    }
}

/// Resolves a parsed query to the set of entry indices it admits.
///
/// Returns `None` when the query has no words to resolve, in which case no search filter
/// applies and quoted phrases are not verified.
fn resolve_query(
    store: &LexiconStore,
    terms: &TermIndex,
    query: &ParsedQuery,
) -> Option<RoaringBitmap> {
    let mut matched: Option<RoaringBitmap> = None;
    for (word, policy) in query.constraints() {
        let found = candidates(terms, word, policy);
        let narrowed = match matched {
            Some(mut set) => {
                set &= &found;
                set
            }
            None => found,
        };
        let empty = narrowed.is_empty();
        matched = Some(narrowed);
        if empty {
            break;
        }
    }

    let mut matched = matched?;
    for phrase in &query.literal_phrases {
        if matched.is_empty() {
            break;
        }
        matched = matched
            .iter()
            .filter(|&index| store.get(index).is_some_and(|e| contains_phrase(e, phrase)))
            .collect();
    }

    debug!(
        words = query.fuzzy_words.len() + query.literal_words.len(),
        phrases = query.literal_phrases.len(),
        policy = %query.fuzzy_policy(),
        candidates = matched.len(),
        "resolved query"
    );
    Some(matched)
}
