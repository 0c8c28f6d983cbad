//! Search parameters.

use std::collections::HashSet;

/// Result limit used when the caller does not pass one.
pub const DEFAULT_LIMIT: usize = 10;

/// Substrings that mark a query as already written in CQL.
const CQL_MARKERS: [&str; 7] = ["=", "~", ">", "<", " AND ", " OR ", "currentUser()"];

/// Whether a raw query looks like plain text or CQL.
///
/// Only used for logging: matching always runs on the raw term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Simple,
    Structured,
}

impl QueryKind {
    /// Classify `query`. Empty queries count as structured and pass through
    /// untouched.
    pub fn classify(query: &str) -> Self {
        if query.is_empty() || CQL_MARKERS.iter().any(|marker| query.contains(marker)) {
            Self::Structured
        } else {
            Self::Simple
        }
    }

    /// The CQL an upstream Confluence would receive for `query`.
    pub fn to_cql(self, query: &str) -> String {
        match self {
            Self::Simple => site_search_cql(query),
            Self::Structured => query.to_string(),
        }
    }
}

/// `siteSearch ~ "<term>"`
pub fn site_search_cql(term: &str) -> String {
    format!("siteSearch ~ \"{}\"", term)
}

/// Set of space keys a search is restricted to.
///
/// An empty set means no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpacesFilter {
    keys: HashSet<String>,
}

impl SpacesFilter {
    /// Parse a comma-separated key list. Keys are trimmed and compared
    /// case-sensitively; `None` and `""` both mean "any space".
    pub fn parse(raw: Option<&str>) -> Self {
        let keys = match raw {
            Some(raw) if !raw.is_empty() => raw.split(',').map(|k| k.trim().to_string()).collect(),
            _ => HashSet::new(),
        };
        Self { keys }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn allows(&self, space_key: &str) -> bool {
        self.is_unrestricted() || self.keys.contains(space_key)
    }
}

/// A fully parsed search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    pub limit: usize,
    pub spaces: SpacesFilter,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            limit: DEFAULT_LIMIT,
            spaces: SpacesFilter::default(),
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_spaces(mut self, spaces_filter: Option<&str>) -> Self {
        self.spaces = SpacesFilter::parse(spaces_filter);
        self
    }

    pub fn kind(&self) -> QueryKind {
        QueryKind::classify(&self.term)
    }
}
