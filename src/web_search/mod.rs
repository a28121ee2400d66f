//! Web search via the `DuckDuckGo` HTML endpoint
//!
//! Delegates the query to a [`SearchProvider`] and formats the returned
//! items as a numbered plain-text list. Every provider failure is
//! normalized into a `"Search error: ..."` string at this boundary; the
//! calling agent only understands text, so nothing propagates as a fault.

mod duckduckgo;
mod errors;
mod types;

pub use duckduckgo::DuckDuckGoProvider;
pub use errors::SearchError;
pub use types::{DEFAULT_MAX_RESULTS, DEFAULT_REGION, SearchQuery, SearchResultItem};

use tracing::info;

/// A search backend that answers a [`SearchQuery`] with ordered items
///
/// Injected into [`run_search`] and the MCP server rather than held as a
/// module-level singleton, so tests can substitute a canned provider.
pub trait SearchProvider: Send + Sync {
    /// Run a query against the backing search service
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<SearchResultItem>, SearchError>> + Send;
}

/// Execute a web search and format the outcome as readable text.
///
/// Collects up to `max_results` items from the provider. Zero items
/// produce a literal no-results message; a provider failure produces a
/// `"Search error: ..."` string. No retry, no partial-result recovery.
pub async fn run_search<P: SearchProvider>(
    provider: &P,
    query: &str,
    max_results: usize,
    region: &str,
) -> String {
    let request = SearchQuery {
        text: query.to_string(),
        max_results,
        region: region.to_string(),
    };

    info!("web search: '{query}' (max_results: {max_results}, region: {region})");

    match provider.search(&request).await {
        Ok(mut items) => {
            items.truncate(max_results);
            format_results(query, &items)
        }
        Err(err) => format!("Search error: {err}"),
    }
}

/// Render items as a 1-indexed list with literal placeholders for
/// missing fields
fn format_results(query: &str, items: &[SearchResultItem]) -> String {
    if items.is_empty() {
        return format!("No results found for: {query}");
    }

    let entries: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "{}. {}\n   URL: {}\n   {}",
                i + 1,
                item.title.as_deref().unwrap_or("No title"),
                item.url.as_deref().unwrap_or("No URL"),
                item.snippet.as_deref().unwrap_or("No description"),
            )
        })
        .collect();

    format!("Search results for: {query}\n\n{}", entries.join("\n\n"))
}
