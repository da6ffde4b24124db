//! guide-proxy: look up game guides on a single site through Google Custom Search
//!
//! A POST carrying `{"game": "..."}` is turned into a site-restricted Custom
//! Search query and answered with a simplified list of `{title, url, snippet}`
//! records.

pub mod config;
pub mod network;
pub mod provider;
pub mod proxy;
pub mod search;
pub mod web;

pub use config::Settings;
pub use provider::SearchProvider;
pub use proxy::{ProxyResponse, ProxyError};
pub use search::{Search, SearchQuery, SearchResultItem};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
