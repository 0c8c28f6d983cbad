//! Linear page scan.

use crate::store::{Page, PageSummary};

use super::query::SearchQuery;

/// True if `needle` (already lower-cased) occurs in the page title, body or
/// any label, ignoring case.
pub fn matches(page: &Page, needle: &str) -> bool {
    page.title.to_lowercase().contains(needle)
        || page.content.to_lowercase().contains(needle)
        || page
            .labels
            .iter()
            .any(|label| label.to_lowercase().contains(needle))
}

/// Scan `pages` in order and project the first `query.limit` matches.
///
/// No ranking: results keep insertion order and the scan stops once the
/// limit is reached.
pub fn search_pages<'a>(
    pages: impl IntoIterator<Item = &'a Page>,
    query: &SearchQuery,
) -> Vec<PageSummary> {
    let needle = query.term.to_lowercase();

    pages
        .into_iter()
        .filter(|page| matches(page, &needle) && query.spaces.allows(&page.space.key))
        .take(query.limit)
        .map(Page::summary)
        .collect()
}
