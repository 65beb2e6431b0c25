//! Reading dictionary records from JSON files.
//!
//! Two files are understood:
//!
//! - the entry file, a JSON array of entry objects (see [`Entry`])
//! - the optional term file, a JSON object mapping a decimal term id to a pair
//!   `[term_text, [entry_index, ...]]`

use std::{collections::BTreeMap, fs, path::Path};

use tracing::debug;

use crate::{Entry, LoadError};

/// A term record as stored in the term file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRecord {
    /// Term identifier.
    pub id: u32,
    /// Term text as stored (not yet normalized).
    pub text: String,
    /// Indices of the entries whose headword contains the term.
    pub entries: Vec<u32>,
}

/// Reads a file to a string, attaching the path to any error.
fn read_file(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads entries from an entry file.
pub fn load_entries(path: &Path) -> Result<Vec<Entry>, LoadError> {
    let contents = read_file(path)?;
    let entries = parse_entries(&contents, path)?;
    debug!(count = entries.len(), path = %path.display(), "loaded entries");
    Ok(entries)
}

/// Parses entries from JSON text.
///
/// The `path` parameter is used for error reporting.
pub fn parse_entries(contents: &str, path: &Path) -> Result<Vec<Entry>, LoadError> {
    serde_json::from_str(contents).map_err(|source| LoadError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads term records from a term file, sorted by id.
pub fn load_terms(path: &Path) -> Result<Vec<TermRecord>, LoadError> {
    let contents = read_file(path)?;
    let terms = parse_terms(&contents, path)?;
    debug!(count = terms.len(), path = %path.display(), "loaded terms");
    Ok(terms)
}

/// Parses term records from JSON text, sorted by id.
///
/// The `path` parameter is used for error reporting.
pub fn parse_terms(contents: &str, path: &Path) -> Result<Vec<TermRecord>, LoadError> {
    let raw: BTreeMap<String, (String, Vec<u32>)> =
        serde_json::from_str(contents).map_err(|source| LoadError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?;

    let mut terms = raw
        .into_iter()
        .map(|(key, (text, entries))| -> Result<TermRecord, LoadError> {
            let id: u32 = key.parse().map_err(|_| LoadError::InvalidTermId {
                path: path.to_path_buf(),
                key: key.clone(),
            })?;
            Ok(TermRecord { id, text, entries })
        })
        .collect::<Result<Vec<_>, _>>()?;

    terms.sort_by_key(|t| t.id);
    Ok(terms)
}
