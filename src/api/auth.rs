//! Bearer-token gate.

use std::fmt;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use super::error::ApiError;

/// Shared secret a client must present as `Authorization: Bearer <token>`.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    token: String,
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

impl AuthToken {
    /// Trimmed token, or `None` when blank.
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }
        Some(Self {
            token: token.to_string(),
        })
    }

    pub fn matches_authorization_header(&self, header_value: &str) -> bool {
        let Some(rest) = header_value.trim().strip_prefix("Bearer ") else {
            return false;
        };
        constant_time_eq(rest.trim(), &self.token)
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff: u8 = 0;
    for (x, y) in a.as_bytes().iter().zip(b.as_bytes()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Middleware rejecting requests without the configured bearer token.
///
/// A no-op when no token is configured.
pub async fn require_bearer(
    State(auth): State<Option<AuthToken>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(token) = auth.as_ref() {
        let authorized = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| token.matches_authorization_header(value));

        if !authorized {
            warn!(path = %request.uri().path(), "Rejected connection without valid bearer token");
            return Err(ApiError::Unauthorized);
        }
    }

    Ok(next.run(request).await)
}
