//! HTTP client for making requests to the search provider

use crate::config::OutgoingSettings;
use crate::provider::{ProviderRequest, ProviderResponse, Transport};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client wrapper configured from the outgoing settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    default_timeout: Duration,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let timeout = Duration::from_secs_f64(settings.request_timeout);
        let mut builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            default_timeout: timeout,
            user_agent: format!("guide-proxy/{}", crate::VERSION),
        })
    }

    /// Execute a provider request with custom timeout
    pub async fn execute_with_timeout(
        &self,
        request: ProviderRequest,
        timeout: Duration,
    ) -> Result<ProviderResponse> {
        let mut req_builder = self
            .client
            .get(&request.url)
            .timeout(timeout)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");

        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    /// Parse response into ProviderResponse
    async fn parse_response(response: Response) -> Result<ProviderResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(ProviderResponse { status, text })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(&self, request: ProviderRequest) -> Result<ProviderResponse> {
        self.execute_with_timeout(request, self.default_timeout).await
    }
}
