//! Dictionary entries and record loading for lex.
//!
//! This crate defines the immutable data the lookup engine searches:
//! - [`Entry`]: one headword with its part of speech, frequency rank, definitions and
//!   inflection forms
//! - [`FormNode`]: the nested forms tree
//! - JSON loading of entry and term files, with errors that carry the offending path

#![warn(missing_docs)]

mod error;
mod forms;
mod load;

pub use error::LoadError;
pub use forms::{FormGroup, FormNode, GroupIter, Leaves};
pub use load::{TermRecord, load_entries, load_terms, parse_entries, parse_terms};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One dictionary entry.
///
/// Entries are created at load time and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable, unique identity assigned by the data set.
    pub index: u32,
    /// The headword as written, possibly with stress marks and capitals.
    #[serde(rename = "word", default)]
    pub headword: String,
    /// Part-of-speech tag.
    #[serde(default)]
    pub pos: Option<String>,
    /// Frequency rank; lower is more common. Any JSON number is accepted and written
    /// back as read.
    #[serde(default)]
    pub freq: Option<Number>,
    /// Definitions in display order.
    #[serde(default)]
    pub defs: Vec<String>,
    /// Inflection forms.
    #[serde(default)]
    pub forms: FormNode,
    /// Any further record fields, kept for output.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    /// Creates an entry with only an index and headword set.
    pub fn new(index: u32, headword: impl Into<String>) -> Self {
        Self {
            index,
            headword: headword.into(),
            pos: None,
            freq: None,
            defs: Vec::new(),
            forms: FormNode::Empty,
            extra: Map::new(),
        }
    }

    /// Sets the part-of-speech tag.
    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    /// Sets the frequency rank.
    pub fn with_freq(mut self, freq: impl Into<Number>) -> Self {
        self.freq = Some(freq.into());
        self
    }

    /// Appends a definition.
    pub fn with_def(mut self, def: impl Into<String>) -> Self {
        self.defs.push(def.into());
        self
    }

    /// Sets the forms tree.
    pub fn with_forms(mut self, forms: FormNode) -> Self {
        self.forms = forms;
        self
    }

    /// Returns the frequency rank as a float for ordering.
    pub fn rank(&self) -> Option<f64> {
        self.freq.as_ref().and_then(Number::as_f64)
    }

    /// Returns the part-of-speech tag if it is present and non-empty.
    pub fn tag(&self) -> Option<&str> {
        self.pos.as_deref().filter(|p| !p.is_empty())
    }
}
