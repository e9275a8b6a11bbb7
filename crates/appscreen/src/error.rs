//! Error types for the appscreen library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for screening operations.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to process.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error (missing credential, missing directory, ...).
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The inference service signalled rate limiting or quota exhaustion.
    ///
    /// This is the only retryable error class.
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success response from the inference service.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl ScreenError {
    /// Whether this error is a transient rate-limit signal worth retrying.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, ScreenError::RateLimited(_))
    }
}

/// Result type alias for screening operations.
pub type Result<T> = std::result::Result<T, ScreenError>;
