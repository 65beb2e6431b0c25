//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use lex_index::{MAX_LIMIT, SortOrder};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No data directory is configured.
    NoDataDir,
    /// The data directory does not exist.
    DataDirMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The data directory exists but is not a directory.
    DataDirNotDirectory {
        /// Path that is not a directory.
        path: String,
    },
    /// The entry file is missing from the data directory.
    WordsFileMissing {
        /// Expected path of the entry file.
        path: String,
    },
    /// A term index file named in configuration does not exist.
    TermsFileMissing {
        /// Expected path of the term index file.
        path: String,
    },
    /// The default ordering is not a known name.
    UnknownSort {
        /// The configured name.
        name: String,
    },
    /// The default limit is outside the accepted range.
    LimitOutOfRange {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDataDir => write!(f, "no data directory is configured"),
            Self::DataDirMissing { path } => write!(f, "data directory does not exist: {path}"),
            Self::DataDirNotDirectory { path } => {
                write!(f, "data path is not a directory: {path}")
            }
            Self::WordsFileMissing { path } => write!(f, "entry file does not exist: {path}"),
            Self::TermsFileMissing { path } => {
                write!(f, "configured term index does not exist: {path}")
            }
            Self::UnknownSort { name } => write!(
                f,
                "unknown default sort '{name}'. Valid values: {}",
                SortOrder::valid_names()
            ),
            Self::LimitOutOfRange { limit } => {
                write!(f, "default limit {limit} is outside 1..={MAX_LIMIT}")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = validate_data(config);

    if config.lookup.sort.parse::<SortOrder>().is_err() {
        warnings.push(ConfigWarning::UnknownSort {
            name: config.lookup.sort.clone(),
        });
    }
    if !(1..=MAX_LIMIT).contains(&config.lookup.limit) {
        warnings.push(ConfigWarning::LimitOutOfRange {
            limit: config.lookup.limit,
        });
    }

    warnings
}

/// Validates the data directory, entry file and configured term index.
fn validate_data(config: &Config) -> Vec<ConfigWarning> {
    let Some(dir) = &config.data.dir else {
        return vec![ConfigWarning::NoDataDir];
    };

    if !dir.exists() {
        return vec![ConfigWarning::DataDirMissing {
            path: dir.display().to_string(),
        }];
    }
    if !dir.is_dir() {
        return vec![ConfigWarning::DataDirNotDirectory {
            path: dir.display().to_string(),
        }];
    }

    let mut warnings = Vec::new();
    if let Some(words) = config.words_path()
        && !words.is_file()
    {
        warnings.push(ConfigWarning::WordsFileMissing {
            path: words.display().to_string(),
        });
    }
    if let Some(terms) = config.terms_path()
        && !terms.is_file()
    {
        warnings.push(ConfigWarning::TermsFileMissing {
            path: terms.display().to_string(),
        });
    }
    warnings
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::test_support::TestDir;

    fn config_with_dir(dir: &Path) -> Config {
        let mut config = Config::default();
        config.data.dir = Some(dir.to_path_buf());
        config
    }

    #[test]
    fn test_no_data_dir() {
        let warnings = validate_config(&Config::default());
        assert_eq!(warnings, vec![ConfigWarning::NoDataDir]);
    }

    #[test]
    fn test_missing_data_dir() {
        let test_dir = TestDir::new();
        let warnings = validate_config(&config_with_dir(&test_dir.path().join("gone")));
        assert!(matches!(warnings[0], ConfigWarning::DataDirMissing { .. }));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_data_dir_is_file() {
        let test_dir = TestDir::new();
        let file = test_dir.create_file("dict", "not a dir");
        let warnings = validate_config(&config_with_dir(&file));
        assert!(matches!(warnings[0], ConfigWarning::DataDirNotDirectory { .. }));
    }

    #[test]
    fn test_missing_words_file() {
        let test_dir = TestDir::new();
        let dict = test_dir.create_dir("dict");
        let warnings = validate_config(&config_with_dir(&dict));
        assert_eq!(
            warnings,
            vec![ConfigWarning::WordsFileMissing {
                path: dict.join("words.json").display().to_string()
            }]
        );
    }

    #[test]
    fn test_missing_configured_terms_file() {
        let test_dir = TestDir::new();
        let dict = test_dir.create_dir("dict");
        test_dir.create_file("dict/words.json", "[]");
        let mut config = config_with_dir(&dict);
        config.data.terms = "terms.json".into();
        config.data.terms_explicit = true;

        let warnings = validate_config(&config);
        assert_eq!(
            warnings,
            vec![ConfigWarning::TermsFileMissing {
                path: dict.join("terms.json").display().to_string()
            }]
        );
        assert!(warnings[0].to_string().contains("terms.json"));
    }

    #[test]
    fn test_missing_default_terms_file_is_fine() {
        let test_dir = TestDir::new();
        test_dir.create_file("dict/words.json", "[]");
        let config = config_with_dir(&test_dir.path().join("dict"));
        assert!(config.terms_path().is_none());
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn test_valid_config_has_no_warnings() {
        let test_dir = TestDir::new();
        test_dir.create_file("dict/words.json", "[]");
        let config = config_with_dir(&test_dir.path().join("dict"));
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn test_bad_lookup_defaults() {
        let test_dir = TestDir::new();
        test_dir.create_file("dict/words.json", "[]");
        let mut config = config_with_dir(&test_dir.path().join("dict"));
        config.lookup.sort = "relevance".into();
        config.lookup.limit = 0;
        let warnings = validate_config(&config);
        assert_eq!(
            warnings,
            vec![
                ConfigWarning::UnknownSort {
                    name: "relevance".into()
                },
                ConfigWarning::LimitOutOfRange { limit: 0 },
            ]
        );
        assert!(warnings[0].to_string().contains("freq, alpha, alpha_rev"));
    }
}
