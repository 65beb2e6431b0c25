//! Text normalization shared by indexing, matching and highlighting.
//!
//! Three layers are applied, each building on the previous one:
//!
//! 1. [`normalize_text`]: lowercase and remove stress marks. This is the form used for
//!    exact headword comparison.
//! 2. [`fold_letters`]: collapse the variant letters `ї` and `ґ` onto `і` and `г` so that
//!    searches are insensitive to that spelling variation.
//! 3. [`search_form`]: both of the above; the form in which terms are stored and query
//!    words are compared.

/// Combining acute accent used as a stress mark.
pub const STRESS_MARK: char = '\u{0301}';

/// Variant letters and the base letter each collapses to for matching.
const LETTER_FOLDS: &[(char, char)] = &[('ї', 'і'), ('ґ', 'г')];

/// Maps a single character onto its folded representative.
pub fn fold_char(c: char) -> char {
    LETTER_FOLDS
        .iter()
        .find_map(|&(variant, base)| (variant == c).then_some(base))
        .unwrap_or(c)
}

/// Removes every stress mark from `text`.
pub fn strip_stress(text: &str) -> String {
    text.chars().filter(|&c| c != STRESS_MARK).collect()
}

/// Lowercases `text` and removes stress marks.
pub fn normalize_text(text: &str) -> String {
    strip_stress(text).to_lowercase()
}

/// Collapses the variant letter pairs onto their base letters.
pub fn fold_letters(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Returns the search letter form of `text`: lowercase, stress-free, folded.
pub fn search_form(text: &str) -> String {
    fold_letters(&normalize_text(text))
}

/// Trims `text` and collapses every internal whitespace run to a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Removes parenthesized spans from `text`, including the parentheses.
///
/// Nesting is tracked with a depth counter. Text is only suppressed while the depth is
/// positive; an unmatched `)` is dropped and leaves the depth at zero.
pub fn strip_parentheticals(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut depth: usize = 0;

    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => result.push(c),
            _ => {}
        }
    }

    result
}
