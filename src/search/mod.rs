//! Text search over pages.
//!
//! - `query`: search parameters, space filter parsing and CQL classification
//! - `engine`: the linear match-and-project scan

mod engine;
mod query;

#[cfg(test)]
mod engine_test;

pub use engine::{matches, search_pages};
pub use query::{DEFAULT_LIMIT, QueryKind, SearchQuery, SpacesFilter};
