//! Search execution module
//!
//! Builds the upstream query, sends it through a transport and reads
//! the provider's answer.

mod executor;
mod models;

pub use executor::{Search, SearchError};
pub use models::*;
