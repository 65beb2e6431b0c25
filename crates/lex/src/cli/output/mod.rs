//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use lex_entry::Entry;
pub use lex_highlight::{dim, subheader, success, warning};
use lex_highlight::{highlight_matches, rule};
use lex_index::LookupResult;
use serde::Serialize;

/// Width of the rule printed above the forms listing.
const RULE_WIDTH: usize = 40;

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Outputs a lookup result as text or JSON.
pub fn output_lookup(result: &LookupResult<'_>, json: bool) -> ExitCode {
    if json {
        return print_json(result);
    }
    print!("{}", format_lookup(result));
    ExitCode::SUCCESS
}

/// Outputs a single entry with its forms, as text or JSON.
pub fn output_entry(entry: &Entry, json: bool) -> ExitCode {
    if json {
        return print_json(entry);
    }
    let mut output = format_entry(entry, &[] as &[&str]);
    output.push_str(&format_forms(entry));
    print!("{output}");
    ExitCode::SUCCESS
}

/// Formats every entry of a lookup result followed by the match summary.
fn format_lookup(result: &LookupResult<'_>) -> String {
    if result.is_empty() {
        return format!("{}\n", dim("No matches found."));
    }

    let needles = result.highlight_terms();
    let mut output = String::new();
    for entry in &result.data {
        output.push_str(&format_entry(entry, &needles));
        output.push('\n');
    }
    let summary = format!(
        "─── {} of {} matches ───",
        result.data.len(),
        result.total_matches
    );
    output.push_str(&format!("{}\n", dim(&summary)));
    output
}

/// Formats an entry's headword line, details line and numbered definitions.
///
/// Occurrences of `needles` in the headword and definitions are marked.
fn format_entry<S: AsRef<str>>(entry: &Entry, needles: &[S]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "─── {} ───\n",
        highlight_matches(&entry.headword, needles)
    ));

    let mut details = Vec::new();
    if let Some(tag) = entry.tag() {
        details.push(tag.to_string());
    }
    if let Some(freq) = &entry.freq {
        details.push(format!("freq {freq}"));
    }
    details.push(format!("#{}", entry.index));
    output.push_str(&format!("{}\n", dim(&details.join(" · "))));

    for (n, def) in entry.defs.iter().enumerate() {
        output.push_str(&format!(
            "  {:>2}. {}\n",
            n + 1,
            highlight_matches(def, needles)
        ));
    }
    output
}

/// Formats the flattened forms listing, one labeled form per line.
fn format_forms(entry: &Entry) -> String {
    let leaves = entry.forms.labeled_leaves();
    if leaves.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    output.push_str(&format!("\n{}\n", subheader("Forms:")));
    output.push_str(&format!("{}\n", rule(RULE_WIDTH)));
    for (labels, form) in leaves {
        if labels.is_empty() {
            output.push_str(&format!("   {form}\n"));
        } else {
            output.push_str(&format!("   {} {form}\n", dim(&labels.join(" / "))));
        }
    }
    output
}
