//! Search client error types.

use thiserror::Error;

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;

/// Search client errors.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Credential resolution failed.
    #[error("credential error: {0}")]
    Credential(#[from] vocalis_core::Error),

    /// Transport-level request failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The index answered with a non-success status.
    #[error("index returned status {status}")]
    Upstream {
        /// HTTP status code returned by the index.
        status: u16,
    },
}

impl SearchError {
    /// Creates an invalid config error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Creates an upstream error from a status code.
    pub fn upstream(status: u16) -> Self {
        Self::Upstream { status }
    }
}
