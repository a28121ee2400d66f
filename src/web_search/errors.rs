//! Error types for search operations

use thiserror::Error;

/// Error types for search provider calls
///
/// Every variant is caught at the tool boundary and rendered into a
/// `"Search error: ..."` string; nothing propagates past the handler.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport-level failure talking to the provider
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a non-success HTTP status
    #[error("DuckDuckGo returned HTTP {0}")]
    Status(u16),

    /// Provider query URL could not be constructed
    #[error("invalid search URL: {0}")]
    Url(#[from] url::ParseError),
}
