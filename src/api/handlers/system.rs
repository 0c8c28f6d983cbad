//! System health handler.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness probe. Never gated by auth.
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
