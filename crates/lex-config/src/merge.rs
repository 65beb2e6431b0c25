//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying precedence
//! rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, DataSettings, LookupSettings,
    parse::{RawConfig, RawDataSettings, RawLookupSettings},
    resolve::resolve_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Returns the directory containing the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to
/// the working directory), lowest precedence last (global config). For every setting the
/// first defined value wins. The data directory is resolved relative to the file that
/// defines it.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let data = merge_data_settings(configs)?;
    let lookup = merge_lookup_settings(configs);
    let config_root = configs.first().map(|c| c.dir().to_path_buf());
    let files = configs.iter().map(|c| c.path.clone()).collect();

    Ok(Config {
        data,
        lookup,
        config_root,
        files,
    })
}

/// Merges data settings, resolving the directory against its defining file.
fn merge_data_settings(configs: &[ParsedConfig]) -> Result<DataSettings, ConfigError> {
    let mut result = DataSettings::default();

    // Lowest precedence first so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        if let Some(ref data) = parsed.config.data {
            apply_raw_data(&mut result, data, parsed.dir())?;
        }
    }

    Ok(result)
}

/// Applies a raw `[data]` section to result, overwriting any present values.
fn apply_raw_data(
    result: &mut DataSettings,
    raw: &RawDataSettings,
    config_dir: &Path,
) -> Result<(), ConfigError> {
    if let Some(ref dir) = raw.dir {
        result.dir = Some(resolve_path(dir, config_dir)?);
    }
    if let Some(ref words) = raw.words {
        result.words.clone_from(words);
    }
    if let Some(ref terms) = raw.terms {
        result.terms.clone_from(terms);
        result.terms_explicit = true;
    }
    Ok(())
}

/// Merges lookup defaults.
fn merge_lookup_settings(configs: &[ParsedConfig]) -> LookupSettings {
    let mut result = LookupSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref lookup) = parsed.config.lookup {
            apply_raw_lookup(&mut result, lookup);
        }
    }

    result
}

/// Applies a raw `[lookup]` section to result.
fn apply_raw_lookup(result: &mut LookupSettings, raw: &RawLookupSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(ref v) = raw.sort {
        result.sort.clone_from(v);
    }
    if let Some(v) = raw.exact {
        result.exact = v;
    }
}
