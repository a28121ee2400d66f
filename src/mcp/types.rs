//! Tool argument types and input-schema generation
//!
//! Defaults declared here are the documented tool defaults; serde fills
//! them in whenever the caller omits an optional argument, so the
//! handlers never see a missing value.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::web_fetch::DEFAULT_TIMEOUT_SECS;
use crate::web_search::{DEFAULT_MAX_RESULTS, DEFAULT_REGION};

/// Arguments for the `web_search` tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WebSearchArgs {
    /// The search query
    pub query: String,

    /// Maximum number of results (default: 10)
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Region for search results (e.g., 'us-en', 'uk-en')
    #[serde(default = "default_region")]
    pub region: String,
}

/// Arguments for the `web_fetch` tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WebFetchArgs {
    /// The URL to fetch
    pub url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// JSON-schema object for a tool's argument struct
pub(crate) fn schema_object<T: JsonSchema>() -> serde_json::Map<String, Value> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    }
}
