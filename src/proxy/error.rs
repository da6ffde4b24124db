//! Error taxonomy of the proxy and its mapping to responses

use super::response::{ErrorBody, ProxyResponse};
use crate::search::SearchError;
use axum::http::{Method, StatusCode};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("method {0} not allowed")]
    MethodNotAllowed(Method),

    #[error("failed to read request body: {0}")]
    BodyRead(String),

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("request body is JSON null")]
    NullBody,

    #[error("missing 'game' parameter")]
    MissingGame,

    #[error("missing API key or search engine ID")]
    MissingCredentials,

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("handler panicked: {0}")]
    Panic(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingGame => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log the error at the level its class deserves and turn it into a response.
    pub fn into_proxy_response(self) -> ProxyResponse {
        let status = self.status();
        match self {
            Self::MethodNotAllowed(method) => {
                debug!(%method, "Rejected non-POST request");
                ProxyResponse::text(status, "Method not allowed")
            }
            Self::MissingGame => {
                debug!("Rejected request without 'game'");
                ProxyResponse::json(status, &ErrorBody::new("Missing 'game' parameter"))
            }
            Self::MissingCredentials => {
                error!("Missing API key or Search Engine ID");
                ProxyResponse::json(status, &ErrorBody::new("Server config missing"))
            }
            Self::Search(SearchError::Upstream {
                status: upstream,
                body,
            }) => {
                error!(upstream_status = upstream, body = %body, "Google API error");
                ProxyResponse::json(
                    status,
                    &ErrorBody::new("Search failed")
                        .with_details(format!("Upstream returned HTTP {}", upstream)),
                )
            }
            other => {
                error!(error = %other, "Unhandled error in handler");
                ProxyResponse::internal_error()
            }
        }
    }
}
