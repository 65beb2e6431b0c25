//! Configuration system for lex.
//!
//! lex uses TOML configuration files named `.lex.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.lex.toml` files found, then loading `~/.lex.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
use lex_index::{DEFAULT_LIMIT, SortOrder};
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawDataSettings, RawLookupSettings, parse_config_file, parse_config_str,
};
pub use resolve::resolve_path;
use serde::Serialize;
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for lex.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.lex.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Where the dictionary data lives.
    pub data: DataSettings,
    /// Defaults for lookups.
    pub lookup: LookupSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
    /// Config files that contributed, highest precedence first.
    pub files: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.lex.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A missing or unusable data directory
    /// - A missing entry file
    /// - An unknown default sort or out-of-range default limit
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Returns the path of the entry file, if a data directory is configured.
    pub fn words_path(&self) -> Option<PathBuf> {
        self.data.dir.as_ref().map(|dir| dir.join(&self.data.words))
    }

    /// Returns the path of the term index file to load, if any.
    ///
    /// The default file is optional and only returned when it exists. A file named in
    /// configuration is always returned, so a missing one fails loading instead of
    /// silently falling back to derived terms.
    pub fn terms_path(&self) -> Option<PathBuf> {
        self.data
            .dir
            .as_ref()
            .map(|dir| dir.join(&self.data.terms))
            .filter(|path| self.data.terms_explicit || path.is_file())
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same shape as a `.lex.toml` file, with the data directory
    /// shown as a resolved absolute path.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            data: &self.data,
            lookup: &self.lookup,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Location of the dictionary data files.
#[derive(Debug, Clone, Serialize)]
pub struct DataSettings {
    /// Resolved directory holding the data files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Entry file name, relative to `dir`.
    pub words: String,
    /// Term index file name, relative to `dir`.
    pub terms: String,
    /// Whether `terms` was set in a config file rather than defaulted.
    #[serde(skip)]
    pub terms_explicit: bool,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: None,
            words: String::from("words.json"),
            terms: String::from("index.json"),
            terms_explicit: false,
        }
    }
}

/// Default lookup parameters; command-line flags override these.
#[derive(Debug, Clone, Serialize)]
pub struct LookupSettings {
    /// Maximum number of entries returned.
    pub limit: usize,
    /// Ordering name.
    pub sort: String,
    /// Whether only exact headword matches are returned.
    pub exact: bool,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            sort: SortOrder::default().to_string(),
            exact: true,
        }
    }
}

/// Borrowed view of the settings for TOML serialization.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Data settings.
    data: &'a DataSettings,
    /// Lookup defaults.
    lookup: &'a LookupSettings,
}
