//! Guide lookup proxy
//!
//! Turns one inbound request into exactly one response, whatever happens
//! along the way.

mod error;
mod handler;
mod response;

pub use error::ProxyError;
pub use handler::{handle, ProxyConfig, ProxyRequest, MAX_BODY_BYTES};
pub use response::{ErrorBody, ProxyResponse, ResponseBody, ResultsBody};
