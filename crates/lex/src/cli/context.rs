//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use lex_config::Config;
use lex_index::Lexicon;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Lexicon loaded on first use.
    lexicon: Option<Lexicon>,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            lexicon: None,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            lexicon: None,
        })
    }

    /// Returns the entry file path, or fails if no data directory is configured.
    pub fn require_words(&self) -> Result<PathBuf, ExitCode> {
        self.config.words_path().ok_or_else(|| {
            eprintln!("error: no data directory configured");
            eprintln!("Run 'lex init' to create a configuration file, then set [data] dir.");
            ExitCode::FAILURE
        })
    }

    /// Returns the lexicon, loading it from the configured data files on first use.
    ///
    /// Any data error is fatal: no lookup runs against a partially loaded lexicon.
    pub fn lexicon(&mut self) -> Result<&Lexicon, ExitCode> {
        if self.lexicon.is_none() {
            let words = self.require_words()?;
            let terms = self.config.terms_path();
            let lexicon = load_lexicon_or_failure(&words, terms.as_deref())?;
            self.lexicon = Some(lexicon);
        }
        self.lexicon.as_ref().ok_or(ExitCode::FAILURE)
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

/// Loads the lexicon or exits with an error.
fn load_lexicon_or_failure(words: &Path, terms: Option<&Path>) -> Result<Lexicon, ExitCode> {
    Lexicon::load(words, terms).map_err(|e| {
        eprintln!("error: failed to load dictionary: {e}");
        ExitCode::FAILURE
    })
}
