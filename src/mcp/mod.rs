//! Model Context Protocol (MCP) server implementation
//!
//! Exposes the `search` and `get_page` tools over two transports:
//!
//! - **sse**: the HTTP+SSE transport (`GET /sse` stream + `POST /messages`),
//!   one MCP service per connected stream
//! - **service**: the Streamable HTTP transport, mounted at `/mcp`
//!
//! # Architecture
//!
//! - **server**: `McpServer`, the rmcp `ServerHandler`
//! - **tools**: tool parameter types and handlers
//!
//! `McpServer` is generic over `S: PageRepository`, so tests can run the
//! tools against any page list.

pub mod server;
mod service;
pub mod sse;
pub mod tools;


pub use server::McpServer;
pub use service::create_mcp_service;
pub use sse::{SessionError, SseSession, SseSessions};
