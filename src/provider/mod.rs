//! Search provider module
//!
//! Defines the provider and transport traits and the Google Custom Search provider.

mod traits;

pub mod google;

pub use google::GoogleCustomSearch;
pub use traits::*;
