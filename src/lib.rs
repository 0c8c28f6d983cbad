pub mod api;
pub mod mcp;
pub mod search;
pub mod store;
