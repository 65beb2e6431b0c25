//! Error types for record loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading dictionary records.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read a data file.
    #[error("failed to read data file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A data file is not valid JSON of the expected shape.
    #[error("malformed data file {path}: {source}")]
    ParseJson {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A term index key is not a non-negative integer.
    #[error("invalid term id '{key}' in {path}")]
    InvalidTermId {
        /// Path to the term index file.
        path: PathBuf,
        /// The offending key.
        key: String,
    },
}
