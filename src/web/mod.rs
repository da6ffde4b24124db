//! Web server module
//!
//! Provides the HTTP surface of guide-proxy.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
