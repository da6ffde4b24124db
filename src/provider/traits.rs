//! Provider traits and types

use crate::config::ProviderCredentials;
use crate::search::{SearchQuery, SearchResultItem};
use async_trait::async_trait;

/// HTTP request to be made on behalf of a provider
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// URL to request
    pub url: String,
    /// Query parameters, sent in insertion order
    pub params: Vec<(String, String)>,
}

impl ProviderRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: Vec::new(),
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Look up a query parameter by name
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP response received from a provider
#[derive(Debug)]
pub struct ProviderResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl ProviderResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> anyhow::Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A search provider knows how to phrase a request and read the answer;
/// sending it is the [`Transport`]'s job.
pub trait SearchProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Build the HTTP request for a search
    fn request(
        &self,
        query: &SearchQuery,
        credentials: &ProviderCredentials,
    ) -> anyhow::Result<ProviderRequest>;

    /// Parse a successful HTTP response into result items
    fn response(&self, response: ProviderResponse) -> anyhow::Result<Vec<SearchResultItem>>;
}

/// Sends provider requests over the wire
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ProviderRequest) -> anyhow::Result<ProviderResponse>;
}
