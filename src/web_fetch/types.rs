//! Data structures and constants for web fetch functionality

use std::time::Duration;

// =============================================================================
// Constants
// =============================================================================

/// Fixed desktop-browser User-Agent, used to avoid trivial bot blocking
pub const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Response bodies larger than this are rejected while streaming (5 MiB)
pub const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

// =============================================================================
// Data Structures
// =============================================================================

/// A single fetch request
///
/// Constructed per call; the timeout governs the entire request
/// round-trip, not just connection establishment.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Absolute URL to fetch
    pub url: String,

    /// Whole-request timeout
    pub timeout: Duration,
}

impl FetchRequest {
    /// Build a request with a timeout given in whole seconds
    #[must_use]
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
