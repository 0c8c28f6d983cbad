//! HTTP request handlers.

pub mod sse;
pub mod system;
