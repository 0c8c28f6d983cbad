//! MCP tool implementations

mod pages;


pub use pages::{GetPageParams, SearchParams};

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

/// Render `value` as pretty JSON text content.
///
/// serde_json indents by two spaces and writes non-ASCII characters as-is.
pub(crate) fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let content = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(
            "serialization_error",
            Some(serde_json::json!({"error": e.to_string()})),
        )
    })?;

    Ok(CallToolResult::success(vec![Content::text(content)]))
}
