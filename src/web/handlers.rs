//! HTTP request handlers

use super::state::AppState;
use crate::proxy::{self, ProxyRequest};
use axum::{
    body::Body,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

/// Guide lookup handler
pub async fn lookup(State(state): State<AppState>, method: Method, body: Body) -> Response {
    proxy::handle(ProxyRequest::new(method, body), &state.config, &state.search)
        .await
        .into_response()
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "provider": state.search.provider_name(),
        "configured": state.has_credentials(),
    }))
}

/// Last-resort response when a panic escapes everything else
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Critical error in request dispatch: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Internal Server Error",
    )
        .into_response()
}
