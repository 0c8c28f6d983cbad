//! API route configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;

use super::auth::require_bearer;
use super::error::panic_response;
use super::handlers;
use super::state::AppState;
use crate::mcp::create_mcp_service;
use crate::store::PageRepository;

pub const SSE_PATH: &str = "/sse";
pub const MESSAGES_PATH: &str = "/messages";
pub const MCP_PATH: &str = "/mcp";

/// Create the router.
///
/// Stream establishment (`/sse`, `/mcp`) sits behind the bearer gate;
/// message submission and health do not.
pub fn create_router<S: PageRepository + 'static>(state: AppState<S>) -> Router {
    let mcp_service = create_mcp_service(state.store_arc(), state.shutdown().child_token());

    let gated = Router::new()
        .route(SSE_PATH, get(handlers::sse::connect::<S>))
        .nest_service(MCP_PATH, mcp_service)
        .route_layer(middleware::from_fn_with_state(
            state.auth().cloned(),
            require_bearer,
        ));

    let open = Router::new()
        .route("/health", get(handlers::system::health))
        .route(MESSAGES_PATH, post(handlers::sse::post_message::<S>))
        .route("/messages/", post(handlers::sse::post_message::<S>));

    open.merge(gated)
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
