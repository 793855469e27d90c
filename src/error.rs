//! Error types for search API calls

use thiserror::Error;

/// Errors raised by the search client
///
/// Disabled mode never produces these: every disabled call succeeds with an
/// absent response.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Timeout, refused connection, DNS failure or a broken response body
    #[error("search API transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Local JSON encoding of the request body failed
    #[error("failed to serialize search request: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The configured base address is not a usable absolute URL
    #[error("invalid search API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The configured request timeout is not a finite, positive number of seconds
    #[error("invalid request timeout {seconds}s: {reason}")]
    InvalidTimeout { seconds: f64, reason: String },

    /// The caller's parameter map already holds a key the call sets itself
    #[error("parameter '{0}' is reserved for this search call")]
    DuplicateParameter(String),

    /// The active search service does not offer this operation
    #[error("operation '{0}' is not supported by this search service")]
    Unsupported(&'static str),
}

impl SearchError {
    /// Whether the underlying transport gave up waiting for the response
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
