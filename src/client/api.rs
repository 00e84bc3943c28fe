//! Client for the finance backend API.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::ApiClient;
//!
//! let client = ApiClient::new("http://localhost:3333")?;
//! let dashboard = client.load_dashboard(&chrono::Local).await?;
//! ```

use std::fmt;

use chrono::TimeZone;

use super::http::{HttpClient, HttpConfig};
use crate::constants::TRANSACTIONS_ENDPOINT;
use crate::domain::{Dashboard, DashboardError, TransactionsResponse};

// ============================================================================
// API Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL without a trailing slash.
    base_url: String,
    http: HttpClient,
}

impl ApiClient {
    /// Creates a client for the given base URL with default HTTP settings.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidInput` if the URL is empty or not
    /// `http(s)://`, or `DashboardError::ClientInit` if the HTTP client fails
    /// to initialize.
    pub fn new(base_url: &str) -> Result<Self, DashboardError> {
        Self::with_config(base_url, HttpConfig::default())
    }

    /// Creates a client with a custom HTTP configuration.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::new`].
    pub fn with_config(base_url: &str, config: HttpConfig) -> Result<Self, DashboardError> {
        let base_url = normalize_base_url(base_url)?;
        let http = HttpClient::with_config(config)?;
        Ok(Self { base_url, http })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the full URL of the transactions endpoint.
    #[must_use]
    pub fn transactions_url(&self) -> String {
        format!("{}{}", self.base_url, TRANSACTIONS_ENDPOINT)
    }

    /// Fetch the combined balance and transaction list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 2xx, or the
    /// body does not decode into [`TransactionsResponse`].
    pub async fn get_transactions(&self) -> Result<TransactionsResponse, DashboardError> {
        let url = self.transactions_url();
        tracing::debug!("GET {url}");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::status(status.as_u16(), url));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| DashboardError::parse(e.to_string()))
    }

    /// Fetch the payload and map it into display values.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ApiClient::get_transactions`].
    pub async fn load_dashboard<Tz>(&self, tz: &Tz) -> Result<Dashboard, DashboardError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let response = self.get_transactions().await?;
        tracing::debug!(
            "Fetched {} transactions from {}",
            response.transactions.len(),
            self.base_url
        );
        Ok(Dashboard::from_response(&response, tz))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Validate and normalize a base URL.
fn normalize_base_url(raw: &str) -> Result<String, DashboardError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DashboardError::invalid_input("API URL cannot be empty"));
    }

    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(DashboardError::invalid_input(format!(
            "API URL must start with http:// or https://, got '{trimmed}'"
        )));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{JsonMother, spawn_api, spawn_json_api, spawn_status_api};
    use axum::{Router, routing::get};
    use chrono::Utc;
    use rstest::rstest;

    #[rstest]
    #[case::plain("http://localhost:3333", "http://localhost:3333")]
    #[case::trailing_slash("http://localhost:3333/", "http://localhost:3333")]
    #[case::many_slashes("https://api.example.com//", "https://api.example.com")]
    #[case::whitespace("  https://api.example.com  ", "https://api.example.com")]
    #[case::with_path("http://host/api/", "http://host/api")]
    fn test_normalize_base_url(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_base_url(raw).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    #[case::no_scheme("localhost:3333")]
    #[case::ftp("ftp://host")]
    fn test_normalize_base_url_rejects(#[case] raw: &str) {
        assert!(matches!(
            normalize_base_url(raw),
            Err(DashboardError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_transactions_url() {
        let client = ApiClient::new("http://localhost:3333/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3333");
        assert_eq!(
            client.transactions_url(),
            "http://localhost:3333/transactions"
        );
    }

    #[tokio::test]
    async fn test_get_transactions_decodes_payload() {
        let url = spawn_json_api(JsonMother::transactions_response()).await;
        let client = ApiClient::new(&url).unwrap();

        let response = client.get_transactions().await.unwrap();
        assert_eq!(response.transactions.len(), 3);
        assert_eq!(response.balance.income, "500000");
    }

    #[tokio::test]
    async fn test_load_dashboard_maps_values() {
        let url = spawn_json_api(JsonMother::transactions_response()).await;
        let client = ApiClient::new(&url).unwrap();

        let dashboard = client.load_dashboard(&Utc).await.unwrap();
        let titles: Vec<&str> = dashboard
            .transactions
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, ["Salary", "Rent", "Groceries"]);
        assert_eq!(dashboard.balance.income, "R$ 5.000,00");
        assert_eq!(dashboard.transactions[1].formatted_value, "- R$ 1.200,00");
    }

    #[tokio::test]
    async fn test_get_transactions_status_error() {
        let url = spawn_status_api(500).await;
        let client = ApiClient::new(&url).unwrap();

        match client.get_transactions().await {
            Err(DashboardError::Status { status, url: failed }) => {
                assert_eq!(status, 500);
                assert!(failed.ends_with("/transactions"));
            }
            other => panic!("Expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_transactions_parse_error() {
        let router = Router::new().route("/transactions", get(|| async { "not json" }));
        let url = spawn_api(router).await;
        let client = ApiClient::new(&url).unwrap();

        assert!(matches!(
            client.get_transactions().await,
            Err(DashboardError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_transactions_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(&format!("http://{addr}")).unwrap();
        assert!(matches!(
            client.get_transactions().await,
            Err(DashboardError::Network(_))
        ));
    }
}
