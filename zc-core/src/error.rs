/// Error types for the Zc dashboard client
use std::time::Duration;
use thiserror::Error;

/// Main error type for fetching dashboard data
#[derive(Error, Debug)]
pub enum ZcError {
    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Browser fetch failed (network error or rejected promise)
    #[error("Request failed: {0}")]
    Request(String),

    /// Failed to decode a response body
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Endpoint answered with a status the caller cannot treat as "no update"
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// Request did not complete in time
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

/// Type alias for Results using ZcError
pub type Result<T> = std::result::Result<T, ZcError>;
