//! Literal phrase verification.

use lex_entry::Entry;
use lex_query::{fold_letters, search_form, strip_parentheticals};

/// Returns true if `entry` contains `phrase` verbatim.
///
/// The phrase must occur inside a definition with its parenthesized spans removed, or be
/// equal to one of the entry's forms or to its headword. All sides are compared in search
/// letter form; `phrase` is expected lowercase and stress-free.
pub(crate) fn contains_phrase(entry: &Entry, phrase: &str) -> bool {
    let phrase = fold_letters(phrase);

    entry
        .defs
        .iter()
        .any(|def| search_form(&strip_parentheticals(def)).contains(&phrase))
        || entry.forms.leaves().any(|form| search_form(form) == phrase)
        || search_form(&entry.headword) == phrase
}
