//! Implementation of `lex lookup`.

use std::{collections::BTreeSet, process::ExitCode};

use lex_index::{LookupRequest, MAX_LIMIT, SortOrder};
use tracing::debug;

use crate::cli::{args::LookupCommand, context::CommandContext, output::output_lookup};

/// Looks up entries and prints them.
///
/// Flags override configured defaults. Invalid flags are reported before any lookup runs.
pub fn run(ctx: &mut CommandContext, cmd: &LookupCommand) -> ExitCode {
    let defaults = &ctx.config.lookup;

    let sort = match cmd.sort {
        Some(sort) => sort,
        None => match defaults.sort.parse::<SortOrder>() {
            Ok(sort) => sort,
            Err(e) => {
                eprintln!("error: {e} (from configuration)");
                return ExitCode::FAILURE;
            }
        },
    };

    let limit = match check_limit(cmd.limit.unwrap_or(defaults.limit)) {
        Ok(limit) => limit,
        Err(msg) => {
            eprintln!("error: {msg}");
            return ExitCode::FAILURE;
        }
    };

    let exact = cmd.exact_or(defaults.exact);

    let lexicon = match ctx.lexicon() {
        Ok(lexicon) => lexicon,
        Err(code) => return code,
    };

    if let Some(pos) = &cmd.pos
        && let Err(msg) = check_pos(pos, &lexicon.pos_tags())
    {
        eprintln!("error: {msg}");
        return ExitCode::FAILURE;
    }

    let request = LookupRequest {
        query: cmd.joined_query(),
        pos: cmd.pos.clone(),
        sort,
        limit: Some(limit),
        exact,
    };
    debug!(?request, "running lookup");

    let result = lexicon.lookup(&request);
    output_lookup(&result, cmd.json)
}

/// Checks that a limit lies in `1..=MAX_LIMIT`.
fn check_limit(limit: usize) -> Result<usize, String> {
    if (1..=MAX_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(format!(
            "invalid limit value '{limit}'. Valid values: 1 to {MAX_LIMIT}"
        ))
    }
}

/// Checks a part-of-speech tag against the tags present in the data.
///
/// An empty tag means no filter and is always accepted.
fn check_pos(pos: &str, tags: &BTreeSet<&str>) -> Result<(), String> {
    if pos.is_empty() || tags.contains(pos) {
        return Ok(());
    }
    let valid: Vec<&str> = tags.iter().copied().collect();
    Err(format!(
        "invalid pos value '{pos}'. Valid values: {}",
        valid.join(", ")
    ))
}
