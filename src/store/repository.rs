//! Repository trait for page access.
//!
//! Lets the MCP layer stay generic over where pages come from.

use crate::search::{SearchQuery, search_pages};
use crate::store::{Page, PageSummary, StoreError, StoreResult};

/// Read-only access to pages.
pub trait PageRepository: Send + Sync {
    /// All pages, in insertion order.
    fn pages(&self) -> &[Page];

    /// Get a page by exact ID.
    fn get(&self, id: &str) -> StoreResult<&Page> {
        self.pages()
            .iter()
            .find(|page| page.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Run a search over [`pages`](Self::pages).
    fn search(&self, query: &SearchQuery) -> Vec<PageSummary> {
        search_pages(self.pages(), query)
    }
}
