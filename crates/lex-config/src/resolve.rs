//! Path resolution for data settings.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a configured path against the directory of the config file defining it.
///
/// Handles three cases:
/// - Tilde paths (`~/dict`) - expanded to home directory
/// - Relative paths (`./dict`, `../shared`) - resolved relative to `config_dir`
/// - Absolute paths - returned as-is
///
/// Existing paths are canonicalized. A missing path is returned unresolved rather than
/// rejected, so that validation can report it.
pub fn resolve_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(&expanded)
    };

    Ok(absolute.canonicalize().unwrap_or(absolute))
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
