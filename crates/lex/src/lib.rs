//! lex: dictionary lookup
//!
//! Looks up words in a Ukrainian dictionary loaded from JSON files. Queries match
//! headwords, inflected forms and definitions, with quoted phrases checked literally and
//! results ordered by frequency or alphabetically.

#![warn(missing_docs)]

pub mod cli;
