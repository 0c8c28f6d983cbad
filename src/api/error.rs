//! API error types.

use std::any::Any;

use axum::{
    Json,
    http::{StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::mcp::SessionError;

/// JSON error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(confluence_mcp::api::config))]
    Config { message: String },

    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(confluence_mcp::api::bind),
        help("Is another process already listening on this port? Try --port or PORT.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(confluence_mcp::api::io))]
    Io(#[from] std::io::Error),

    #[error("Unauthorized")]
    #[diagnostic(code(confluence_mcp::api::unauthorized))]
    Unauthorized,

    #[error("session_id is required")]
    #[diagnostic(code(confluence_mcp::api::missing_session_id))]
    MissingSessionId,

    #[error("Invalid session ID")]
    #[diagnostic(code(confluence_mcp::api::invalid_session_id))]
    InvalidSessionId,

    #[error("Could not find session")]
    #[diagnostic(code(confluence_mcp::api::session_not_found))]
    SessionNotFound,

    #[error("Could not parse message")]
    #[diagnostic(code(confluence_mcp::api::invalid_message))]
    InvalidMessage,

    #[error("{message}")]
    #[diagnostic(code(confluence_mcp::api::internal))]
    Internal { message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MissingSessionId | Self::InvalidSessionId | Self::InvalidMessage => {
                StatusCode::BAD_REQUEST
            }
            Self::SessionNotFound => StatusCode::NOT_FOUND,
            Self::Config { .. } | Self::Bind { .. } | Self::Io(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound => Self::SessionNotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        if status == StatusCode::UNAUTHORIZED {
            return (status, [(WWW_AUTHENTICATE, "Bearer")], body).into_response();
        }
        (status, body).into_response()
    }
}

/// `CatchPanicLayer` handler: a panicking handler becomes a 500 carrying the
/// panic message.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    ApiError::Internal { message }.into_response()
}
