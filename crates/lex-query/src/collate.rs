//! Ukrainian alphabetical collation.
//!
//! Code-point order puts `ґ`, `є`, `і` and `ї` far away from their neighbours in the
//! Ukrainian alphabet. [`sort_key`] maps each of the 33 letters onto an ASCII character so
//! that plain byte comparison of keys reproduces native dictionary order:
//!
//! ```text
//! а б в г ґ д е є ж з и і ї й к л м н о п р с т у ф х ц ч ш щ ь ю я
//! ```
//!
//! Characters outside the table pass through unchanged and therefore keep their
//! code-point order relative to each other.

use crate::normalize::normalize_text;

/// Maps a lowercase Ukrainian letter to its collation character.
const fn collation_char(c: char) -> Option<char> {
    let mapped = match c {
        'а' => '0',
        'б' => '1',
        'в' => '2',
        'г' => '3',
        'ґ' => '4',
        'д' => '5',
        'е' => '6',
        'є' => '7',
        'ж' => '8',
        'з' => '9',
        'и' => ':',
        'і' => ';',
        'ї' => '<',
        'й' => '?',
        'к' => '@',
        'л' => 'A',
        'м' => 'B',
        'н' => 'C',
        'о' => 'D',
        'п' => 'E',
        'р' => 'F',
        'с' => 'G',
        'т' => 'H',
        'у' => 'I',
        'ф' => 'K',
        'х' => 'L',
        'ц' => 'M',
        'ч' => 'N',
        'ш' => 'O',
        'щ' => 'P',
        'ь' => 'Q',
        'ю' => 'R',
        'я' => 'S',
        _ => return None,
    };
    Some(mapped)
}

/// Computes the collation key for `text`.
///
/// The input is lowercased and stripped of stress marks before mapping.
pub fn sort_key(text: &str) -> String {
    normalize_text(text)
        .chars()
        .map(|c| collation_char(c).unwrap_or(c))
        .collect()
}
