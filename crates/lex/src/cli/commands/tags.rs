//! Implementation of `lex tags`.

use std::{collections::BTreeMap, process::ExitCode};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;

use crate::cli::{
    args::TagsCommand,
    context::CommandContext,
    output::{dim, print_json},
};

/// JSON output for one tag.
#[derive(Serialize)]
struct JsonTag<'a> {
    /// The tag.
    tag: &'a str,
    /// Number of entries carrying it.
    entries: usize,
}

/// Lists the part-of-speech tags present in the data.
pub fn run(ctx: &mut CommandContext, cmd: &TagsCommand) -> ExitCode {
    let lexicon = match ctx.lexicon() {
        Ok(lexicon) => lexicon,
        Err(code) => return code,
    };
    let counts = lexicon.stats().tags;

    if cmd.json {
        let tags: Vec<JsonTag<'_>> = counts
            .iter()
            .map(|(tag, &entries)| JsonTag { tag, entries })
            .collect();
        return print_json(&tags);
    }

    if counts.is_empty() {
        println!("{}", dim("No part-of-speech tags."));
        return ExitCode::SUCCESS;
    }

    if cmd.long {
        println!("{}", tag_table(&counts));
    } else {
        for tag in counts.keys() {
            println!("{tag}");
        }
    }

    ExitCode::SUCCESS
}

/// Builds a table of tags and their entry counts.
fn tag_table(counts: &BTreeMap<String, usize>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Tag", "Entries"]);
    for (tag, count) in counts {
        table.add_row(vec![
            Cell::new(tag),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
