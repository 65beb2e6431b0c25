//! Implementation of `lex config`.

use std::process::ExitCode;

use lex_highlight::Highlighter;

use crate::cli::context::CommandContext;

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let toml = match ctx.config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let highlighter = Highlighter::new();
    print!("{}", highlighter.highlight_toml(&toml));
    ExitCode::SUCCESS
}
