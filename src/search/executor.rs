//! Search execution against the configured provider

use super::models::{SearchQuery, SearchResultItem};
use crate::config::ProviderCredentials;
use crate::provider::{SearchProvider, Transport};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Ways a provider search can fail
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to build provider request: {0:#}")]
    Request(anyhow::Error),

    #[error("provider request failed: {0:#}")]
    Transport(anyhow::Error),

    #[error("provider returned HTTP {status}")]
    Upstream { status: u16, body: String },

    #[error("invalid provider response: {0:#}")]
    Payload(anyhow::Error),
}

/// Search executor pairing a provider with the transport that carries its requests
#[derive(Clone)]
pub struct Search {
    provider: Arc<dyn SearchProvider>,
    transport: Arc<dyn Transport>,
}

impl Search {
    /// Create a new search executor
    pub fn new(provider: Arc<dyn SearchProvider>, transport: Arc<dyn Transport>) -> Self {
        Self {
            provider,
            transport,
        }
    }

    /// Name of the underlying provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Run one query. Non-2xx answers come back as [`SearchError::Upstream`]
    /// carrying the provider's body text.
    pub async fn execute(
        &self,
        query: &SearchQuery,
        credentials: &ProviderCredentials,
    ) -> Result<Vec<SearchResultItem>, SearchError> {
        let request = self
            .provider
            .request(query, credentials)
            .map_err(SearchError::Request)?;

        debug!(
            provider = self.provider.name(),
            q = %query.to_query_string(),
            "Sending provider request"
        );

        let start = Instant::now();
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(SearchError::Transport)?;

        if !response.is_success() {
            return Err(SearchError::Upstream {
                status: response.status,
                body: response.text,
            });
        }

        let results = self
            .provider
            .response(response)
            .map_err(SearchError::Payload)?;

        info!(
            provider = self.provider.name(),
            results = results.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Provider search completed"
        );

        Ok(results)
    }
}
