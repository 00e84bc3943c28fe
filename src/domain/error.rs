//! Error types for dashboard data operations.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for fetching and decoding dashboard data.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The HTTP client could not be built (e.g. TLS backend unavailable).
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(#[source] reqwest::Error),

    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Request to {url} failed with status {status}")]
    Status {
        /// HTTP status code returned by the backend.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// The response body did not match the expected payload.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Invalid user input, such as a malformed base URL.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DashboardError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new status error.
    #[must_use]
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
