//! Confluence MCP server binary.
//!
//! Serves the seeded page fixture over MCP. The API layer only sees a
//! `PageRepository`, so a different page source can be swapped in here.

use std::net::IpAddr;

use clap::Parser;
use confluence_mcp::api::{self, ApiError, Config};
use confluence_mcp::store::FixtureStore;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(confluence_mcp::binary::config))]
    Config(#[source] ApiError),

    #[error("Server error: {0}")]
    #[diagnostic(code(confluence_mcp::binary::server))]
    Server(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "confluence-mcp")]
#[command(author, version, about = "Mock Confluence MCP server", long_about = None)]
struct Cli {
    /// Host address to bind to [env: HOST, default: 0.0.0.0]
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on [env: PORT, default: 8002]
    #[arg(short, long)]
    port: Option<u16>,

    /// Bearer token required to open a stream [env: MCP_AUTH_TOKEN]
    #[arg(long)]
    auth_token: Option<String>,

    /// Enable debug logging [env: MCP_VERBOSE]
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    let mut config = Config::from_env().map_err(BinaryError::Config)?;
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if let Some(token) = cli.auth_token.as_deref() {
        config = config.with_auth_token(token);
    }
    if cli.verbose {
        config = config.with_verbose(true);
    }

    println!(
        "Starting Confluence MCP server with SSE transport on port {}",
        config.port
    );

    api::run(config, FixtureStore::seeded()).await?;

    Ok(())
}
