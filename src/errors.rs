//! Error handling

use thiserror::Error;

/// Errors surfaced by admin client operations.
///
/// Every error is propagated to the immediate caller unchanged; the client
/// never retries or swallows a failure.
#[derive(Error, Debug)]
pub enum AdminError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure (connection refused, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the backend; the body is carried verbatim
    #[error("API error: HTTP {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response body did not match the operation's schema
    #[error("Schema error: {0}")]
    Schema(String),

    /// Request body serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error from the underlying HTTP machinery (request construction,
    /// multipart encoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client result type
pub type Result<T> = std::result::Result<T, AdminError>;

impl AdminError {
    /// HTTP status code for API-level failures, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AdminError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401/403 responses.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Whether a caller could reasonably retry the operation.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AdminError::Network(_))
    }

    /// Whether the failure happened before any request was sent.
    pub fn is_config_error(&self) -> bool {
        matches!(self, AdminError::Config(_))
    }
}
