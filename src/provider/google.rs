//! Google Custom Search provider implementation

use super::traits::*;
use crate::config::{ProviderCredentials, DEFAULT_ENDPOINT};
use crate::search::{SearchQuery, SearchResultItem};
use anyhow::Result as AnyhowResult;
use serde::Deserialize;
use tracing::debug;

/// Google Custom Search JSON API
pub struct GoogleCustomSearch {
    base_url: String,
}

impl GoogleCustomSearch {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            base_url: endpoint.into(),
        }
    }
}

impl Default for GoogleCustomSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Subset of the Custom Search response this proxy reads
#[derive(Debug, Deserialize)]
struct CustomSearchResponse {
    // Items are decoded one by one so a single odd entry cannot sink the page.
    #[serde(default)]
    items: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct CustomSearchItem {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
}

impl SearchProvider for GoogleCustomSearch {
    fn name(&self) -> &str {
        "google_custom_search"
    }

    fn request(
        &self,
        query: &SearchQuery,
        credentials: &ProviderCredentials,
    ) -> AnyhowResult<ProviderRequest> {
        Ok(ProviderRequest::get(&self.base_url)
            .param("key", &credentials.api_key)
            .param("cx", &credentials.search_engine_id)
            .param("q", query.to_query_string()))
    }

    fn response(&self, response: ProviderResponse) -> AnyhowResult<Vec<SearchResultItem>> {
        let data: CustomSearchResponse = response.json()?;

        let results = data
            .items
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| {
                let item: CustomSearchItem = match serde_json::from_value(value) {
                    Ok(item) => item,
                    Err(e) => {
                        debug!("Skipping malformed search item: {}", e);
                        return None;
                    }
                };
                let title = item.title.filter(|t| !t.is_empty())?;
                let url = item.link.filter(|l| !l.is_empty())?;
                Some(SearchResultItem {
                    title,
                    url,
                    snippet: item.snippet,
                })
            })
            .collect();

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueryStrategy;

    fn credentials() -> ProviderCredentials {
        ProviderCredentials::new(Some("key-123"), Some("cx-456")).unwrap()
    }

    fn ok(text: &str) -> ProviderResponse {
        ProviderResponse {
            status: 200,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_custom_search_request() {
        let google = GoogleCustomSearch::new();
        let query = SearchQuery::new("Elden Ring", "pcgamer.com", QueryStrategy::SiteRestrictionOnly);
        let request = google.request(&query, &credentials()).unwrap();

        assert_eq!(request.url, DEFAULT_ENDPOINT);
        assert_eq!(request.param_value("key"), Some("key-123"));
        assert_eq!(request.param_value("cx"), Some("cx-456"));
        assert_eq!(request.param_value("q"), Some("Elden Ring site:pcgamer.com"));
    }

    #[test]
    fn test_response_maps_items() {
        let google = GoogleCustomSearch::new();
        let results = google
            .response(ok(r#"{
                "kind": "customsearch#search",
                "items": [
                    {"title": "Elden Ring Guide", "link": "https://pcgamer.com/elden-ring", "snippet": "Bosses"},
                    {"title": "Elden Ring Maps", "link": "https://pcgamer.com/elden-ring-maps"}
                ]
            }"#))
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "https://pcgamer.com/elden-ring");
        assert_eq!(results[0].snippet.as_deref(), Some("Bosses"));
        assert_eq!(results[1].title, "Elden Ring Maps");
        assert!(results[1].snippet.is_none());
    }

    #[test]
    fn test_response_without_items() {
        let google = GoogleCustomSearch::new();
        let results = google
            .response(ok(r#"{"searchInformation": {"totalResults": "0"}}"#))
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_response_skips_incomplete_items() {
        let google = GoogleCustomSearch::new();
        let results = google
            .response(ok(r#"{"items": [{"title": "No link"}, {"link": "https://pcgamer.com/x", "title": ""}]}"#))
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_response_skips_items_with_wrong_types() {
        let google = GoogleCustomSearch::new();
        let results = google
            .response(ok(r#"{"items": [
                {"title": 42, "link": "https://pcgamer.com/numeric-title"},
                {"title": "Bad link", "link": ["https://pcgamer.com/a"]},
                {"title": "Bad snippet", "link": "https://pcgamer.com/b", "snippet": {"html": "x"}},
                null,
                {"title": "Celeste Guide", "link": "https://pcgamer.com/celeste", "snippet": "Chapter 1"}
            ]}"#))
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Celeste Guide");
        assert_eq!(results[0].snippet.as_deref(), Some("Chapter 1"));
    }

    #[test]
    fn test_response_rejects_malformed_json() {
        let google = GoogleCustomSearch::new();
        assert!(google.response(ok("<html>")).is_err());
    }
}
