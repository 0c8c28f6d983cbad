//! HTTP+SSE transport handlers.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::{Stream, StreamExt, stream};
use rmcp::model::ClientJsonRpcMessage;
use serde::Deserialize;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::routes::MESSAGES_PATH;
use crate::api::state::AppState;
use crate::store::PageRepository;

#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub session_id: Option<String>,
}

/// Open an event stream.
///
/// The first event is `endpoint`, whose data is the URL the client must POST
/// its messages to. Every server message follows as a `message` event.
pub async fn connect<S: PageRepository + 'static>(
    State(state): State<AppState<S>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let session = state
        .sessions()
        .open(state.mcp_server(), state.shutdown().child_token());
    info!(session_id = %session.id(), "SSE client connected");

    let endpoint = Event::default()
        .event("endpoint")
        .data(format!("{MESSAGES_PATH}/?session_id={}", session.id()));

    let messages = session
        .into_stream()
        .map(|message| Event::default().event("message").json_data(message));

    Sse::new(stream::once(async move { Ok(endpoint) }).chain(messages))
        .keep_alive(KeepAlive::default())
}

/// Accept one JSON-RPC message for an open session.
///
/// Replies arrive on the session's event stream, not in this response.
#[instrument(skip_all)]
pub async fn post_message<S: PageRepository + 'static>(
    State(state): State<AppState<S>>,
    Query(query): Query<MessageQuery>,
    body: Bytes,
) -> ApiResult<(StatusCode, &'static str)> {
    let raw = query.session_id.ok_or(ApiError::MissingSessionId)?;
    let session_id = Uuid::parse_str(&raw)
        .map_err(|_| ApiError::InvalidSessionId)?
        .simple()
        .to_string();

    if !state.sessions().contains(&session_id) {
        return Err(ApiError::SessionNotFound);
    }

    let message: ClientJsonRpcMessage = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Rejected malformed client message");
        ApiError::InvalidMessage
    })?;

    state.sessions().deliver(&session_id, message).await?;
    Ok((StatusCode::ACCEPTED, "Accepted"))
}
