//! Implementation of `lex status`.

use std::{path::Path, process::ExitCode};

use lex_config::{ConfigWarning, discover_config_files};
use lex_index::LexiconStats;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, success, warning},
};

/// Shows configuration files, data files, dictionary statistics and validation warnings.
///
/// Exits with failure if the configuration has warnings or the data fails to load.
pub fn run(ctx: &mut CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("lex init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        println!("   {}", path.display());
    }
    println!();

    let config = &ctx.config;
    println!("{}", subheader("Data:"));
    match &config.data.dir {
        Some(dir) => println!("   dir   {}", dir.display()),
        None => println!("   dir   {}", dim("(not configured)")),
    }
    if let Some(words) = config.words_path() {
        println!("   words {}", file_state(&words, "missing"));
    }
    match config.terms_path() {
        Some(terms) => println!("   terms {}", file_state(&terms, "missing")),
        None => println!("   terms {}", dim("(derived from entries)")),
    }
    println!();

    let warnings = config.validate();
    let loadable = config.words_path().is_some_and(|p| p.is_file())
        && config.terms_path().is_none_or(|p| p.is_file());

    if loadable {
        let stats = match ctx.lexicon() {
            Ok(lexicon) => lexicon.stats(),
            Err(code) => return code,
        };
        print_stats(&stats);
    }

    if warnings.is_empty() {
        println!("{}", success("No issues found."));
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Formats a path with a marker if it does not exist.
fn file_state(path: &Path, missing: &str) -> String {
    if path.exists() {
        path.display().to_string()
    } else {
        format!("{} {}", path.display(), warning(&format!("[{missing}]")))
    }
}

/// Prints dictionary statistics.
fn print_stats(stats: &LexiconStats) {
    println!("{}", subheader("Dictionary:"));
    println!("   {} entries", stats.entries);
    println!("   {} terms", stats.terms);
    println!("   {} letters", stats.letters);
    if !stats.tags.is_empty() {
        let tags: Vec<String> = stats
            .tags
            .iter()
            .map(|(tag, count)| format!("{tag} {}", dim(&format!("({count})"))))
            .collect();
        println!("   tags: {}", tags.join(", "));
    }
    println!();
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::NoDataDir => {
                println!("{}", dim("Hint: set [data] dir in .lex.toml"));
            }
            ConfigWarning::WordsFileMissing { .. } => {
                println!("{}", dim("Hint: check [data] words or the data directory"));
            }
            ConfigWarning::TermsFileMissing { .. } => {
                println!(
                    "{}",
                    dim("Hint: fix [data] terms, or remove it to derive terms from entries")
                );
            }
            ConfigWarning::UnknownSort { .. } | ConfigWarning::LimitOutOfRange { .. } => {
                println!("{}", dim("Hint: check the [lookup] section of .lex.toml"));
            }
            _ => {}
        }
    }
}
