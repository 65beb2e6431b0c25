//! Implementation of `lex get`.

use std::process::ExitCode;

use crate::cli::{args::GetCommand, context::CommandContext, output::output_entry};

/// Prints one entry by its index.
pub fn run(ctx: &mut CommandContext, cmd: &GetCommand) -> ExitCode {
    let lexicon = match ctx.lexicon() {
        Ok(lexicon) => lexicon,
        Err(code) => return code,
    };

    match lexicon.entry(cmd.index) {
        Some(entry) => output_entry(entry, cmd.json),
        None => {
            eprintln!("error: no entry with index {}", cmd.index);
            ExitCode::FAILURE
        }
    }
}
