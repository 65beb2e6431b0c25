//! Command implementations and dispatch.

pub mod config;
pub mod get;
pub mod init;
pub mod lookup;
pub mod status;
pub mod tags;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &mut CommandContext) -> ExitCode {
    match command {
        Commands::Lookup(cmd) => lookup::run(ctx, &cmd),
        Commands::Get(cmd) => get::run(ctx, &cmd),
        Commands::Tags(cmd) => tags::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Status => status::run(ctx),
        Commands::Config => config::run(ctx),
    }
}
