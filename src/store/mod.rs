//! Page store abstraction.
//!
//! Pages are read-only: the store is seeded once and never mutated, so the
//! repository trait only exposes lookups.
//!
//! # Architecture
//!
//! - `error`: Store error types
//! - `models`: Page entities and their JSON projections
//! - `repository`: Trait definition for page access
//! - `fixture`: The seeded in-memory store

mod error;
mod fixture;
mod models;
mod repository;

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod models_test;

pub use error::{StoreError, StoreResult};
pub use fixture::{FixtureStore, seed_pages};
pub use models::*;
pub use repository::PageRepository;
