//! Page tool implementations
//!
//! `search` and `get_page`, registered on [`McpServer`] under the
//! `page_tools_router` router.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::CallToolResult,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::mcp::server::McpServer;
use crate::mcp::tools::json_result;
use crate::search::{DEFAULT_LIMIT, QueryKind, SearchQuery};
use crate::store::{PageContent, PageRepository};

// Parameter types for tools
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    #[schemars(description = "Search query - can be simple text or a CQL query string.")]
    pub query: String,
    #[schemars(description = "Maximum number of results (1-50). Default: 10")]
    pub limit: Option<i64>,
    #[schemars(description = "Comma-separated list of space keys to filter by.")]
    pub spaces_filter: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetPageParams {
    #[schemars(description = "Confluence page ID.")]
    pub page_id: String,
}

#[tool_router(router = page_tools_router, vis = "pub(crate)")]
impl<S: PageRepository + 'static> McpServer<S> {
    /// Search pages by substring over title, body and labels
    #[tool(
        description = "Search Confluence content using simple terms or CQL. Returns a JSON list of simplified page objects with a 150-character excerpt."
    )]
    pub async fn search(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let SearchParams {
            query,
            limit,
            spaces_filter,
        } = params.0;

        info!(
            %query,
            ?limit,
            ?spaces_filter,
            "Searching Confluence"
        );

        let kind = QueryKind::classify(&query);
        if kind == QueryKind::Simple {
            info!(
                cql = %kind.to_cql(&query),
                "Converting simple search term to CQL using siteSearch"
            );
        }

        // Matching always runs on the raw term, whatever the classification.
        let search = SearchQuery::new(query)
            .with_limit(limit.map_or(DEFAULT_LIMIT, clamp_limit))
            .with_spaces(spaces_filter.as_deref());
        let pages = self.store.search(&search);

        debug!(results = pages.len(), ?kind, "Search complete");

        json_result(&pages)
    }

    /// Get a page with its full content
    #[tool(
        description = "Get content of a specific Confluence page by ID. Returns page metadata and the full content, or an error field if the page does not exist."
    )]
    pub async fn get_page(
        &self,
        params: Parameters<GetPageParams>,
    ) -> Result<CallToolResult, McpError> {
        let page_id = params.0.page_id;
        info!(%page_id, "Getting page content");

        match self.store.get(&page_id) {
            Ok(page) => json_result(&PageContent::from(page)),
            Err(e) => {
                debug!(%page_id, "Page not found");
                json_result(&json!({ "error": e.to_string() }))
            }
        }
    }
}

/// Non-positive limits yield no results rather than a parameter error.
fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}
