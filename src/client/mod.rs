//! HTTP clients for the finance backend.
//!
//! - [`http`] - reqwest wrapper with shared headers and timeout
//! - [`api`] - typed client for the `/transactions` endpoint

pub mod api;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::ApiClient;
