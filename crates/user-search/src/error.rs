//! Error types for the user search component
//!
//! Fetch failures are the only errors the component itself can observe.
//! They never reach the rendered view; callers swallow them after tracing.

use thiserror::Error;

/// Errors that can occur while loading users from the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    /// Body was not a JSON array of user records
    #[error("failed to parse users: {0}")]
    Parse(String),
}

impl FetchError {
    /// Create a network error.
    pub fn network(reason: impl Into<String>) -> Self {
        Self::Network(reason.into())
    }

    /// Create a parse error.
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse(reason.into())
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;
