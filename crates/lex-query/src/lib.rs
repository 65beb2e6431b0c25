//! Query normalization and text folding for lex lookups.
//!
//! This crate holds the pure, stateless text functions the lookup engine is built on:
//!
//! - **Normalization**: lowercasing, stress-mark removal and folding of the variant
//!   letters `ї`/`ґ` onto `і`/`г`
//! - **Collation**: sort keys reproducing Ukrainian alphabetical order
//! - **Query parsing**: `"quoted phrases"` versus fuzzy words
//! - **Match policies**: prefix, substring and exact term matching
//! - **Match ranges**: byte spans of query words in display text, for highlighting
//!
//! # Example
//!
//! ```
//! use lex_query::{MatchPolicy, parse};
//!
//! let query = parse("\"domestic cat\" Кіт").unwrap();
//! assert_eq!(query.literal_phrases, vec!["domestic cat"]);
//! assert_eq!(query.fuzzy_words, vec!["кіт"]);
//! assert_eq!(query.fuzzy_policy(), MatchPolicy::Prefix);
//! ```

#![warn(missing_docs)]

mod collate;
mod lexer;
mod normalize;
mod parser;
mod policy;
mod ranges;

pub use collate::sort_key;
pub use lexer::{Segment, scan};
pub use normalize::{
    STRESS_MARK, collapse_whitespace, fold_char, fold_letters, normalize_text, search_form,
    strip_parentheticals, strip_stress,
};
pub use parser::{ParsedQuery, normalize_query, parse};
pub use policy::MatchPolicy;
pub use ranges::{match_ranges, merge_ranges};
