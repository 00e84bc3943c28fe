//! HTTP client abstraction for backend API requests.

use reqwest::Client;
use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::domain::DashboardError;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::ClientInit` if the TLS backend fails to load.
    pub fn with_config(config: HttpConfig) -> Result<Self, DashboardError> {
        let inner = Client::builder()
            .user_agent(concat!("finboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(DashboardError::ClientInit)?;

        Ok(Self { inner, config })
    }

    /// Build a GET request with standard headers and the configured timeout.
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner
            .get(url)
            .header("accept", "application/json")
            .timeout(self.config.timeout)
    }
}
