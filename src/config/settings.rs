//! Settings structures for guide-proxy configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;
use url::Url;

/// Default Google Custom Search JSON API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Default site the search is restricted to
pub const DEFAULT_SITE: &str = "pcgamer.com";

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub provider: ProviderSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        self.merge_from(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary lookup, so tests need not touch the
    /// process environment.
    pub fn merge_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("GOOGLE_API_KEY") {
            self.provider.api_key = Some(val);
        }
        if let Some(val) = lookup("SEARCH_ENGINE_ID") {
            self.provider.search_engine_id = Some(val);
        }
        if let Some(val) = lookup("GUIDE_PROXY_SITE") {
            self.provider.site = val;
        }
        if let Some(val) = lookup("GUIDE_PROXY_QUERY_STRATEGY") {
            match val.parse() {
                Ok(strategy) => self.provider.query_strategy = strategy,
                Err(e) => warn!("Ignoring GUIDE_PROXY_QUERY_STRATEGY: {}", e),
            }
        }
        if let Some(val) = lookup("GUIDE_PROXY_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("GUIDE_PROXY_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
    }

    /// Reject settings the service cannot start with.
    ///
    /// Missing credentials are not an error here: each request reports them.
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = Url::parse(&self.provider.endpoint) {
            bail!("invalid provider endpoint {:?}: {}", self.provider.endpoint, e);
        }
        if self.provider.site.trim().is_empty() {
            bail!("provider site must not be empty");
        }
        let timeout = self.outgoing.request_timeout;
        if !timeout.is_finite() || timeout <= 0.0 {
            bail!("outgoing request_timeout must be a positive number of seconds");
        }
        Ok(())
    }

    /// Credentials for the search provider, if both values are present.
    pub fn credentials(&self) -> Option<ProviderCredentials> {
        ProviderCredentials::new(
            self.provider.api_key.as_deref(),
            self.provider.search_engine_id.as_deref(),
        )
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 5.0,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Search provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Custom Search endpoint
    pub endpoint: String,
    /// API key (`GOOGLE_API_KEY`)
    pub api_key: Option<String>,
    /// Search engine identifier, the `cx` parameter (`SEARCH_ENGINE_ID`)
    pub search_engine_id: Option<String>,
    /// Domain results are restricted to
    pub site: String,
    /// How the upstream query string is built
    pub query_strategy: QueryStrategy,
    /// Message returned alongside an empty result list
    pub no_results_message: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            search_engine_id: None,
            site: DEFAULT_SITE.to_string(),
            query_strategy: QueryStrategy::default(),
            no_results_message: "No guides found".to_string(),
        }
    }
}

/// Query construction strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStrategy {
    /// `<game> site:<site>`
    #[default]
    SiteRestrictionOnly,
    /// `site:<site> "<game> guide"`
    SiteRestrictionWithGuideKeyword,
}

impl std::str::FromStr for QueryStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "site_restriction_only" => Ok(Self::SiteRestrictionOnly),
            "site_restriction_with_guide_keyword" => Ok(Self::SiteRestrictionWithGuideKeyword),
            other => Err(format!("unknown query strategy: {}", other)),
        }
    }
}

/// API key and search engine identifier for the provider
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub api_key: String,
    pub search_engine_id: String,
}

impl ProviderCredentials {
    /// Build credentials, treating missing and empty values alike.
    pub fn new(api_key: Option<&str>, search_engine_id: Option<&str>) -> Option<Self> {
        match (api_key, search_engine_id) {
            (Some(key), Some(cx)) if !key.is_empty() && !cx.is_empty() => Some(Self {
                api_key: key.to_string(),
                search_engine_id: cx.to_string(),
            }),
            _ => None,
        }
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("api_key", &"<redacted>")
            .field("search_engine_id", &self.search_engine_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.provider.site, "pcgamer.com");
        assert_eq!(
            settings.provider.query_strategy,
            QueryStrategy::SiteRestrictionOnly
        );
        assert!(settings.credentials().is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_merge_credentials() {
        let mut settings = Settings::default();
        settings.merge_from(lookup(&[
            ("GOOGLE_API_KEY", "key-123"),
            ("SEARCH_ENGINE_ID", "cx-456"),
            ("GUIDE_PROXY_PORT", "9090"),
            ("GUIDE_PROXY_QUERY_STRATEGY", "site_restriction_with_guide_keyword"),
        ]));

        let creds = settings.credentials().unwrap();
        assert_eq!(creds.api_key, "key-123");
        assert_eq!(creds.search_engine_id, "cx-456");
        assert_eq!(settings.server.port, 9090);
        assert_eq!(
            settings.provider.query_strategy,
            QueryStrategy::SiteRestrictionWithGuideKeyword
        );
    }

    #[test]
    fn test_partial_credentials_are_absent() {
        let mut settings = Settings::default();
        settings.merge_from(lookup(&[("GOOGLE_API_KEY", "key-123")]));
        assert!(settings.credentials().is_none());

        settings.merge_from(lookup(&[("SEARCH_ENGINE_ID", "")]));
        assert!(settings.credentials().is_none());
    }

    #[test]
    fn test_unknown_strategy_keeps_default() {
        let mut settings = Settings::default();
        settings.merge_from(lookup(&[("GUIDE_PROXY_QUERY_STRATEGY", "fuzzy")]));
        assert_eq!(
            settings.provider.query_strategy,
            QueryStrategy::SiteRestrictionOnly
        );
    }

    #[test]
    fn test_yaml_sections() {
        let yaml = r#"
server:
  port: 8123
provider:
  site: eurogamer.net
  query_strategy: site_restriction_with_guide_keyword
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.server.port, 8123);
        assert_eq!(settings.server.bind_address, "0.0.0.0");
        assert_eq!(settings.provider.site, "eurogamer.net");
        assert_eq!(settings.provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.outgoing.request_timeout, 5.0);
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut settings = Settings::default();
        settings.provider.endpoint = "not a url".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.provider.site = "  ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unusable_timeouts() {
        for timeout in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut settings = Settings::default();
            settings.outgoing.request_timeout = timeout;
            assert!(settings.validate().is_err(), "timeout {timeout} accepted");
        }

        let settings: Settings = serde_yaml::from_str("outgoing:\n  request_timeout: .inf\n").unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let creds = ProviderCredentials::new(Some("secret"), Some("cx")).unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("cx"));
    }
}
