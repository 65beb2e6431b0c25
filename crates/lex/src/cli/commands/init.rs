//! Implementation of `lex init`.

use std::{fs, process::ExitCode};

use lex_config::{CONFIG_FILENAME, global_config_path, global_template, local_template};
use lex_highlight::{Highlighter, subheader};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Writes a commented `.lex.toml` template.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let cwd = &ctx.cwd;

    let is_home_dir = global_config_path()
        .and_then(|p| p.parent().map(|h| h == cwd))
        .unwrap_or(false);

    let use_global = cmd.global || is_home_dir;

    let config_path = if use_global {
        match global_config_path() {
            Some(path) => path,
            None => {
                eprintln!("error: could not determine home directory");
                return ExitCode::FAILURE;
            }
        }
    } else {
        cwd.join(CONFIG_FILENAME)
    };

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = if use_global {
        global_template()
    } else {
        local_template()
    };

    if let Err(e) = fs::write(&config_path, &template) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", config_path.display());

    let highlighter = Highlighter::new();
    println!();
    println!("{}", subheader("Configuration written:"));
    for line in highlighter.highlight_toml(&template).lines() {
        println!("   {line}");
    }

    ExitCode::SUCCESS
}
