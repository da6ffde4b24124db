//! HTTP networking module
//!
//! Provides the outbound HTTP client used to reach the search provider.

mod client;

pub use client::HttpClient;
