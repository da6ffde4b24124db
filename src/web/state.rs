//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::provider::GoogleCustomSearch;
use crate::proxy::ProxyConfig;
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Handler configuration resolved from the settings
    pub config: Arc<ProxyConfig>,
    /// Search executor
    pub search: Search,
}

impl AppState {
    /// Create new application state backed by Google Custom Search
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let provider = Arc::new(GoogleCustomSearch::with_endpoint(
            settings.provider.endpoint.clone(),
        ));
        let search = Search::new(provider, Arc::new(client));
        Self::with_search(settings, search)
    }

    /// Create state around an existing search executor
    pub fn with_search(settings: Settings, search: Search) -> Self {
        Self {
            config: Arc::new(ProxyConfig::from_settings(&settings)),
            search,
        }
    }

    /// Whether provider credentials are configured
    pub fn has_credentials(&self) -> bool {
        self.config.credentials.is_some()
    }
}
