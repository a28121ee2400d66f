//! Web search and page fetch tools served over MCP
//!
//! A thin adapter between an agent and the open web: the `web_search`
//! tool delegates to `DuckDuckGo` and formats a numbered result list, and
//! the `web_fetch` tool performs an HTTP GET with content-type-aware
//! rendering (JSON pretty-printing, HTML-to-text extraction). Every call
//! is stateless and every outcome, success or failure, is a single
//! plain-text message.

pub mod mcp;
pub mod page_extractor;
pub mod web_fetch;
pub mod web_search;

pub use mcp::WebToolsServer;
pub use page_extractor::extract_text;
pub use web_fetch::{FetchRequest, fetch_url};
pub use web_search::{DuckDuckGoProvider, SearchProvider, SearchQuery, SearchResultItem, run_search};
