//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Create the application router with all routes
///
/// Every path other than `/health` reaches the guide lookup handler, whatever
/// the method, so OPTIONS preflights get the same 405 as any other non-POST.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .fallback(handlers::lookup)
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        // Add state
        .with_state(state)
}
