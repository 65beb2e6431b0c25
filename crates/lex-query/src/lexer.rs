//! Quote-aware query scanner.
//!
//! Splits a normalized query string into quoted phrases and the unquoted text between
//! them. Quotes pair left to right; a quote without a partner is kept verbatim in the
//! surrounding text.

use std::{iter::Peekable, str::Chars};

/// A piece of a scanned query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Unquoted text, exactly as it appeared.
    Text(String),

    /// A quoted phrase (the quotes are stripped, content preserved).
    Phrase(String),
}

/// Scans a query string into segments.
struct Scanner<'a> {
    /// Character iterator with one-character lookahead.
    chars: Peekable<Chars<'a>>,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given input.
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    /// Scans the entire input.
    fn scan(mut self) -> Vec<Segment> {
        let mut segments = Vec::new();

        while let Some(segment) = self.next_segment() {
            segments.push(segment);
        }

        segments
    }

    /// Returns the next segment, or None if at end of input.
    fn next_segment(&mut self) -> Option<Segment> {
        match self.chars.peek()? {
            '"' => Some(self.read_quoted()),
            _ => Some(self.read_text()),
        }
    }

    /// Reads a quoted phrase, or the unterminated tail if no closing quote follows.
    fn read_quoted(&mut self) -> Segment {
        self.chars.next(); // consume opening quote

        let mut content = String::new();
        for ch in self.chars.by_ref() {
            if ch == '"' {
                return Segment::Phrase(content);
            }
            content.push(ch);
        }

        // Unclosed quote: the rest of the input is ordinary text.
        content.insert(0, '"');
        Segment::Text(content)
    }

    /// Reads unquoted text up to the next quote.
    fn read_text(&mut self) -> Segment {
        let mut text = String::new();

        while let Some(&ch) = self.chars.peek() {
            if ch == '"' {
                break;
            }
            text.push(ch);
            self.chars.next();
        }

        Segment::Text(text)
    }
}

/// Scans a query string into quoted phrases and surrounding text.
pub fn scan(input: &str) -> Vec<Segment> {
    Scanner::new(input).scan()
}
