//! Outbound response shapes

use crate::search::SearchResultItem;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Body of a successful lookup
#[derive(Debug, Serialize)]
pub struct ResultsBody {
    pub results: Vec<SearchResultItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of every JSON error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(serde_json::Value),
    Text(String),
}

/// The one response every request ends in
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ProxyResponse {
    /// JSON response. Serialization failure degrades to the internal-error body.
    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => Self {
                status,
                body: ResponseBody::Json(value),
            },
            Err(e) => {
                error!("Failed to serialize response body: {}", e);
                Self::internal_error()
            }
        }
    }

    /// Plain-text response
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Text(body.into()),
        }
    }

    /// `500 {"error": "Internal server error"}`, built without any fallible step
    pub fn internal_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ResponseBody::Json(serde_json::json!({ "error": "Internal server error" })),
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self.body {
            ResponseBody::Json(_) => "application/json",
            ResponseBody::Text(_) => "text/plain; charset=utf-8",
        }
    }

    /// JSON body, if this is a JSON response
    pub fn json_body(&self) -> Option<&serde_json::Value> {
        match &self.body {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }
}

impl IntoResponse for ProxyResponse {
    fn into_response(self) -> Response {
        let content_type = self.content_type();
        let body = match self.body {
            ResponseBody::Json(value) => value.to_string(),
            ResponseBody::Text(text) => text,
        };
        (self.status, [(header::CONTENT_TYPE, content_type)], body).into_response()
    }
}
