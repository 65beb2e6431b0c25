//! Command-line entry point for `lex`.

use std::{io, process::ExitCode};

use lex::cli::{
    CommandContext,
    args::{Commands, parse_cli},
    commands,
};
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "LEX_LOG";

fn main() -> ExitCode {
    init_logging();

    let cli = parse_cli();
    let ctx = match cli.command {
        // `init` must work even when an existing config file is invalid.
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let mut ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &mut ctx)
}

/// Sends log events to stderr, filtered by `LEX_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
