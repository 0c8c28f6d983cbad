//! MCP Streamable HTTP service creation
//!
//! This module provides the service mounted at `/mcp` for clients that speak
//! the Streamable HTTP transport.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::store::PageRepository;

use super::server::McpServer;

/// Create MCP Streamable HTTP service
///
/// # Arguments
/// * `store` - Page store shared by every session
/// * `cancellation_token` - Token for graceful shutdown
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use confluence_mcp::mcp::create_mcp_service;
/// use confluence_mcp::store::FixtureStore;
/// use std::sync::Arc;
/// use tokio_util::sync::CancellationToken;
///
/// let store = Arc::new(FixtureStore::seeded());
/// let mcp_service = create_mcp_service(store, CancellationToken::new());
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// ```
pub fn create_mcp_service<S: PageRepository + 'static>(
    store: Arc<S>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer<S>, LocalSessionManager> {
    // Service factory: creates a new McpServer per session
    // Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<McpServer<S>, std::io::Error> {
        Ok(McpServer::new(Arc::clone(&store)))
    };

    let config = StreamableHttpServerConfig::default()
        .with_sse_keep_alive(None) // Use default (15s)
        .with_sse_retry(None)
        .with_stateful_mode(true)
        .with_cancellation_token(cancellation_token);

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
