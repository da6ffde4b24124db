//! The request pipeline: method check, configuration check, body parse,
//! validation, provider search and result shaping.

use super::error::ProxyError;
use super::response::{ProxyResponse, ResultsBody};
use crate::config::{ProviderCredentials, QueryStrategy, Settings};
use crate::search::{Search, SearchQuery};
use axum::body::Body;
use axum::http::{Method, StatusCode};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tracing::{error, info};

/// Largest request body read before giving up
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// One inbound request as seen by the proxy
pub struct ProxyRequest {
    pub method: Method,
    pub body: Body,
}

impl ProxyRequest {
    pub fn new(method: Method, body: impl Into<Body>) -> Self {
        Self {
            method,
            body: body.into(),
        }
    }
}

/// Read-only configuration the handler needs, resolved once at start-up
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub credentials: Option<ProviderCredentials>,
    pub site: String,
    pub strategy: QueryStrategy,
    pub no_results_message: String,
}

impl ProxyConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            credentials: settings.credentials(),
            site: settings.provider.site.clone(),
            strategy: settings.provider.query_strategy,
            no_results_message: settings.provider.no_results_message.clone(),
        }
    }
}

/// Handle one request. Always yields a response: errors and panics inside the
/// pipeline become a 500.
pub async fn handle(request: ProxyRequest, config: &ProxyConfig, search: &Search) -> ProxyResponse {
    if request.method != Method::POST {
        return ProxyError::MethodNotAllowed(request.method).into_proxy_response();
    }

    match AssertUnwindSafe(run(request.body, config, search))
        .catch_unwind()
        .await
    {
        Ok(Ok(response)) => response,
        Ok(Err(err)) => err.into_proxy_response(),
        Err(panic) => ProxyError::Panic(panic_message(panic.as_ref())).into_proxy_response(),
    }
}

async fn run(
    body: Body,
    config: &ProxyConfig,
    search: &Search,
) -> Result<ProxyResponse, ProxyError> {
    // Misconfiguration wins over any problem with the body.
    let credentials = config
        .credentials
        .as_ref()
        .ok_or(ProxyError::MissingCredentials)?;

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::BodyRead(e.to_string()))?;
    let payload: serde_json::Value = serde_json::from_slice(&bytes)?;
    if payload.is_null() {
        return Err(ProxyError::NullBody);
    }

    let game = extract_game(&payload).ok_or(ProxyError::MissingGame)?;

    let query = SearchQuery::new(game, config.site.as_str(), config.strategy);
    let results = search.execute(&query, credentials).await?;

    if results.is_empty() {
        info!(game, "No guides found");
        return Ok(ProxyResponse::json(
            StatusCode::OK,
            &ResultsBody {
                results,
                message: Some(config.no_results_message.clone()),
            },
        ));
    }

    Ok(ProxyResponse::json(
        StatusCode::OK,
        &ResultsBody {
            results,
            message: None,
        },
    ))
}

/// Non-empty string `game` field of a JSON object
fn extract_game(payload: &serde_json::Value) -> Option<&str> {
    payload
        .get("game")
        .and_then(serde_json::Value::as_str)
        .filter(|game| !game.is_empty())
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        error!("Handler panicked with a non-string payload");
        "unknown panic".to_string()
    }
}
