//! Store error types.
//!
//! Uses miette for diagnostic output and thiserror for derive macros.

use miette::Diagnostic;
use thiserror::Error;

/// Page store errors.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The message doubles as the `error` field of the `get_page` payload.
    #[error("Page with ID {id} not found")]
    #[diagnostic(code(confluence_mcp::store::not_found))]
    NotFound { id: String },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
