//! Terminal styling for lex.
//!
//! Provides syntax-highlighted TOML for `lex config`, styled headers and status lines, and
//! marking of query matches inside headwords and definitions.

#![warn(missing_docs)]

use std::ops::Range;

use lex_query::match_ranges;
use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Highlights configuration text for terminal output.
pub struct Highlighter {
    /// Language definitions, including TOML.
    syntax_set: SyntaxSet,
    /// Embedded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// The theme to use.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter with the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML content.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights content with the named syntax, falling back to plain text.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self.theme_set.get(self.theme);
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut output = String::new();
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Green text (for success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Magenta text (for query matches).
    pub const MAGENTA: &str = "\x1b[35m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a success message (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Formats a query match (bold magenta).
pub fn mark(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::MAGENTA, text, colors::RESET)
}

/// Returns a dimmed horizontal rule for visual separation.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

/// Marks the given byte ranges of `text`.
///
/// Ranges must be sorted and non-overlapping. A range that is out of bounds, overlaps the
/// previous one or does not fall on character boundaries is left unmarked.
pub fn highlight_ranges(text: &str, ranges: &[Range<usize>]) -> String {
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for range in ranges {
        if range.start < cursor {
            continue;
        }
        let before = text.get(cursor..range.start);
        let (Some(before), Some(matched)) = (before, text.get(range.clone())) else {
            continue;
        };
        output.push_str(before);
        output.push_str(&mark(matched));
        cursor = range.end;
    }

    output.push_str(&text[cursor..]);
    output
}

/// Marks every occurrence of the needles in `text`.
///
/// Matching ignores case and stress marks and folds the variant letters, so a needle
/// taken from a lookup result marks the text it matched.
pub fn highlight_matches<S: AsRef<str>>(text: &str, needles: &[S]) -> String {
    highlight_ranges(text, &match_ranges(text, needles))
}
