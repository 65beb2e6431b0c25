//! Result orderings.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// The order in which lookup results are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Most frequent first; entries without a frequency rank last.
    #[default]
    Freq,
    /// Ukrainian alphabetical order of headwords.
    Alpha,
    /// Reverse Ukrainian alphabetical order.
    AlphaRev,
}

impl SortOrder {
    /// Every ordering, in display order.
    pub const ALL: [Self; 3] = [Self::Freq, Self::Alpha, Self::AlphaRev];

    /// Returns the ordering's name as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Freq => "freq",
            Self::Alpha => "alpha",
            Self::AlphaRev => "alpha_rev",
        }
    }

    /// Returns a comma-separated list of the accepted names.
    pub fn valid_names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordering name that is not one of `freq`, `alpha` or `alpha_rev`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid sort value '{name}'. Valid values: {}", SortOrder::valid_names())]
pub struct UnknownSortOrder {
    /// The rejected name.
    pub name: String,
}

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.name() == s)
            .ok_or_else(|| UnknownSortOrder { name: s.to_string() })
    }
}
