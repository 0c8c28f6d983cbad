//! HTTP front door: configuration, routing, auth and the server loop.

mod auth;
mod error;
mod handlers;
pub mod routes;
mod state;

#[cfg(test)]
mod auth_test;

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::store::PageRepository;

pub use auth::{AuthToken, require_bearer};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use state::AppState;

/// Port used when neither `--port` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 8002;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const AUTH_TOKEN_ENV: &str = "MCP_AUTH_TOKEN";
pub const VERBOSE_ENV: &str = "MCP_VERBOSE";

/// Server configuration
///
/// Precedence: builder (CLI flag) > environment > default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Shared secret gating stream establishment; `None` disables auth
    pub auth_token: Option<AuthToken>,
    /// Debug-level diagnostics
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            auth_token: None,
            verbose: false,
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT`, `MCP_AUTH_TOKEN` and `MCP_VERBOSE`.
    pub fn from_env() -> ApiResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(HOST_ENV) {
            config.host = raw.trim().parse().map_err(|_| ApiError::Config {
                message: format!("{HOST_ENV} must be an IP address, got '{raw}'"),
            })?;
        }

        if let Ok(raw) = env::var(PORT_ENV) {
            config.port = raw.trim().parse().map_err(|_| ApiError::Config {
                message: format!("{PORT_ENV} must be a port number, got '{raw}'"),
            })?;
        }

        if let Ok(raw) = env::var(AUTH_TOKEN_ENV) {
            config.auth_token = AuthToken::parse(&raw);
        }

        if let Ok(raw) = env::var(VERBOSE_ENV) {
            config.verbose = matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        Ok(config)
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Blank tokens disable auth.
    pub fn with_auth_token(mut self, token: &str) -> Self {
        self.auth_token = AuthToken::parse(token);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Initialize tracing subscriber with env filter
///
/// `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "confluence_mcp=debug,tower_http=debug,rmcp=debug"
    } else {
        "confluence_mcp=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the server until Ctrl-C.
pub async fn run<S: PageRepository + 'static>(config: Config, store: S) -> ApiResult<()> {
    init_tracing(config.verbose);

    let shutdown = CancellationToken::new();
    let state = AppState::new(store, config.auth_token.clone(), shutdown.clone());
    if state.auth().is_some() {
        info!("Bearer token required for /sse and /mcp");
    }

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    info!("Confluence MCP server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c(), shutdown))
        .await?;

    Ok(())
}

/// Resolve once `signal` fires, cancelling `shutdown` on the way out.
///
/// A signal that fails to install never resolves, so the server keeps running.
async fn shutdown_on<F>(signal: F, shutdown: CancellationToken)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
    shutdown.cancel();
}
