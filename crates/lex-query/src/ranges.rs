//! Locating query words inside display text for highlighting.

use std::ops::Range;

use crate::normalize::{STRESS_MARK, fold_char, search_form};

/// A character of normalized text together with the source bytes it came from.
#[derive(Debug, Clone, Copy)]
struct MappedChar {
    /// The normalized character.
    ch: char,
    /// Byte offset of the source character.
    start: usize,
    /// Byte offset just past the source character.
    end: usize,
}

/// Normalizes `text` to search form while remembering source byte offsets.
fn map_text(text: &str) -> Vec<MappedChar> {
    let mut mapped = Vec::with_capacity(text.len());
    for (start, c) in text.char_indices() {
        if c == STRESS_MARK {
            continue;
        }
        let end = start + c.len_utf8();
        for lower in c.to_lowercase() {
            mapped.push(MappedChar {
                ch: fold_char(lower),
                start,
                end,
            });
        }
    }
    mapped
}

/// Extends `end` over any stress marks that directly follow it.
fn extend_over_stress(text: &str, mut end: usize) -> usize {
    while text[end..].starts_with(STRESS_MARK) {
        end += STRESS_MARK.len_utf8();
    }
    end
}

/// Returns byte ranges of `text` where any of `needles` occurs.
///
/// Matching uses the same normalization as lookups: case, stress marks and the folded
/// letter pairs are ignored. Returned ranges index the original `text`, are sorted, and
/// overlapping or adjacent ranges are merged. Empty needles are ignored.
pub fn match_ranges<S: AsRef<str>>(text: &str, needles: &[S]) -> Vec<Range<usize>> {
    let haystack = map_text(text);
    let mut ranges = Vec::new();

    for needle in needles {
        let needle: Vec<char> = search_form(needle.as_ref()).chars().collect();
        if needle.is_empty() || needle.len() > haystack.len() {
            continue;
        }

        for (i, window) in haystack.windows(needle.len()).enumerate() {
            if window.iter().zip(&needle).all(|(m, &c)| m.ch == c) {
                let start = haystack[i].start;
                let end = extend_over_stress(text, window[needle.len() - 1].end);
                ranges.push(start..end);
            }
        }
    }

    merge_ranges(ranges)
}

/// Merges overlapping or adjacent ranges, returning them sorted by start.
pub fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    if ranges.is_empty() {
        return ranges;
    }

    ranges.sort_by_key(|r| r.start);

    let mut merged = Vec::with_capacity(ranges.len());
    let mut current = ranges[0].clone();

    for range in ranges.into_iter().skip(1) {
        if range.start <= current.end {
            current.end = current.end.max(range.end);
        } else {
            merged.push(current);
            current = range;
        }
    }
    merged.push(current);

    merged
}
