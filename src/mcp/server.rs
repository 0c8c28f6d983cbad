//! MCP server implementation

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::store::PageRepository;

/// Main MCP server.
///
/// One instance is created per MCP session; all instances share the same
/// read-only store.
pub struct McpServer<S: PageRepository> {
    pub(crate) store: Arc<S>,
    tool_router: ToolRouter<Self>,
}

// Manual Clone: only the Arc is cloned, S itself need not be Clone.
impl<S: PageRepository> Clone for McpServer<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            tool_router: self.tool_router.clone(),
        }
    }
}

impl<S: PageRepository + 'static> McpServer<S> {
    /// Create a new MCP server over the given page store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            tool_router: Self::page_tools_router(),
        }
    }

}

#[tool_handler]
impl<S: PageRepository + 'static> ServerHandler for McpServer<S> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build()).with_instructions(
            "Confluence MCP Server - search pages by text or CQL and fetch page content by ID",
        )
    }
}
