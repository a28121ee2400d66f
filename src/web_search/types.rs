//! Data structures and constants for web search functionality

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// `DuckDuckGo` HTML search endpoint (no API key required)
pub const SEARCH_URL: &str = "https://html.duckduckgo.com/html/";

/// CSS selector for individual search result containers
pub const SEARCH_RESULT_SELECTOR: &str = ".result";

/// CSS selector for result titles (the link also carries the URL)
pub const TITLE_SELECTOR: &str = "a.result__a";

/// CSS selector for result snippets/descriptions
pub const SNIPPET_SELECTOR: &str = "a.result__snippet, .result__snippet";

/// Default number of results returned when the caller does not specify one
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Default `DuckDuckGo` region ("wt-wt" is the no-region worldwide value)
pub const DEFAULT_REGION: &str = "wt-wt";

/// Timeout applied to the whole provider request
pub const PROVIDER_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Data Structures
// =============================================================================

/// A search request as passed to a [`super::SearchProvider`]
///
/// Constructed per call and discarded after response formatting.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Query text (emptiness is provider-enforced, not pre-validated here)
    pub text: String,

    /// Upper bound on the number of returned items
    pub max_results: usize,

    /// Region/locale tag, e.g. "us-en" or "wt-wt" for worldwide
    pub region: String,
}

/// A single search result with title, URL and snippet
///
/// Every field is independently optional; missing fields are replaced by
/// literal placeholders at formatting time. Provider order is preserved,
/// with no dedup and no sorting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResultItem {
    /// Page title
    pub title: Option<String>,

    /// Page URL
    pub url: Option<String>,

    /// Description snippet from the results page
    pub snippet: Option<String>,
}
