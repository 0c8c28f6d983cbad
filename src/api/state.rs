//! Application state for the HTTP server.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::auth::AuthToken;
use crate::mcp::{McpServer, SseSessions};
use crate::store::PageRepository;

/// Shared application state.
///
/// Generic over `S: PageRepository`; every MCP session created from this
/// state reads the same store.
pub struct AppState<S: PageRepository> {
    store: Arc<S>,
    sessions: SseSessions,
    auth: Option<AuthToken>,
    shutdown: CancellationToken,
}

// Manual Clone impl - we only need Arc to be cloneable, not S
impl<S: PageRepository> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            sessions: self.sessions.clone(),
            auth: self.auth.clone(),
            shutdown: self.shutdown.clone(),
        }
    }
}

impl<S: PageRepository + 'static> AppState<S> {
    pub fn new(store: S, auth: Option<AuthToken>, shutdown: CancellationToken) -> Self {
        Self {
            store: Arc::new(store),
            sessions: SseSessions::new(),
            auth,
            shutdown,
        }
    }

    /// Get a cloned Arc to the store.
    pub fn store_arc(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    pub fn sessions(&self) -> &SseSessions {
        &self.sessions
    }

    pub fn auth(&self) -> Option<&AuthToken> {
        self.auth.as_ref()
    }

    /// Root token; sessions run on child tokens of it.
    pub fn shutdown(&self) -> &CancellationToken {
        &self.shutdown
    }

    /// A fresh MCP server for one session.
    pub fn mcp_server(&self) -> McpServer<S> {
        McpServer::new(self.store_arc())
    }
}
