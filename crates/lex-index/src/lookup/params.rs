//! Lookup parameters.

use crate::SortOrder;

/// Default maximum number of entries returned.
pub const DEFAULT_LIMIT: usize = 100;

/// Largest limit callers may request.
pub const MAX_LIMIT: usize = 10_000;

/// Parameters for a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Raw search query. `None` or empty means no query; a blank query still gets the
    /// exact filter.
    pub query: Option<String>,
    /// Part-of-speech tag every result must carry. An empty tag means no filter.
    pub pos: Option<String>,
    /// Result ordering.
    pub sort: SortOrder,
    /// Maximum number of entries in `data`. `None` or zero means unlimited.
    pub limit: Option<usize>,
    /// Keep only entries whose headword equals the whole query.
    pub exact: bool,
}

impl Default for LookupRequest {
    fn default() -> Self {
        Self {
            query: None,
            pos: None,
            sort: SortOrder::default(),
            limit: Some(DEFAULT_LIMIT),
            exact: true,
        }
    }
}

impl LookupRequest {
    /// Creates a request for `query` with default settings.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Sets the part-of-speech filter.
    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    /// Sets the result ordering.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the result limit.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the exact-match flag.
    pub fn with_exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// Returns the part-of-speech filter, if one applies.
    pub(crate) fn pos_filter(&self) -> Option<&str> {
        self.pos.as_deref().filter(|p| !p.is_empty())
    }

    /// Returns the effective limit, if one applies.
    pub(crate) fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|&n| n > 0)
    }
}
