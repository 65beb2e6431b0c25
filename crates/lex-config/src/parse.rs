//! Configuration file parsing.
//!
//! Parses individual `.lex.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Data file section.
    pub data: Option<RawDataSettings>,
    /// Lookup defaults section.
    pub lookup: Option<RawLookupSettings>,
}

/// Raw `[data]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawDataSettings {
    /// Directory holding the data files, relative to the config file.
    pub dir: Option<String>,
    /// Entry file name within `dir`.
    pub words: Option<String>,
    /// Term index file name within `dir`.
    pub terms: Option<String>,
}

/// Raw `[lookup]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawLookupSettings {
    /// Default result limit.
    pub limit: Option<usize>,
    /// Default ordering name.
    pub sort: Option<String>,
    /// Default exact-match flag.
    pub exact: Option<bool>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    parse_config_file(path).is_ok_and(|config| config.root == Some(true))
}
