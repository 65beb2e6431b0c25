//! Error types for the lex-index crate.

use lex_entry::LoadError;
use thiserror::Error;

/// Errors that can occur while building the lexicon.
///
/// All of these are startup failures: a lexicon that fails to build must not serve
/// lookups.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Failed to load a data file.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Two entries share the same index.
    #[error("duplicate entry index: {index}")]
    DuplicateEntry {
        /// The repeated index.
        index: u32,
    },

    /// Two terms share the same id.
    #[error("duplicate term id: {id}")]
    DuplicateTerm {
        /// The repeated id.
        id: u32,
    },

    /// A term refers to an entry index that was not loaded.
    #[error("term {term_id} refers to unknown entry index {index}")]
    UnknownEntry {
        /// The referring term.
        term_id: u32,
        /// The missing entry index.
        index: u32,
    },
}
