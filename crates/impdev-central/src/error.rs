//! Error types for impCentral operations.
//!
//! Device errors are mapped to core port errors at the boundary; see `port.rs`.

use thiserror::Error;

/// Result type alias for impCentral operations.
pub type CentralResult<T> = Result<T, CentralError>;

/// Errors related to impCentral API operations.
#[derive(Debug, Error)]
pub enum CentralError {
    /// The API answered with an error status.
    ///
    /// `message` is taken from the JSON:API error document when present.
    #[error("{message} (HTTP {status})")]
    Api {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Error text reported by the service
        message: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from impCentral: {message}")]
    InvalidResponse { message: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl CentralError {
    /// HTTP status of an API error, if this is one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
