//! Error types for fetch operations

use thiserror::Error;

/// Error types for fetch operations
///
/// Each variant maps to a distinct user-visible string at the tool
/// boundary; no variant ever escapes the handler as a fault.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Whole-request deadline exceeded
    #[error("request timed out")]
    Timeout,

    /// Server answered with a non-2xx status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Response body exceeded the streaming size cap
    #[error("response body exceeded {limit} bytes")]
    BodyTooLarge {
        /// The cap that was exceeded
        limit: usize,
    },

    /// DNS, connection, TLS or any other transport failure
    #[error("{0}")]
    Network(#[from] reqwest::Error),
}

impl FetchError {
    /// Classify a reqwest error, separating timeouts from other
    /// transport failures
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(err)
        }
    }
}
