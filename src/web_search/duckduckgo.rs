//! `DuckDuckGo` search provider
//!
//! Queries the `DuckDuckGo` HTML endpoint with a per-call HTTP client and
//! parses the result markup into structured items. The HTML endpoint is
//! server-rendered, so no browser automation is involved.

use std::sync::LazyLock;
use std::time::Duration;

use scraper::{Html, Selector};
use tracing::{debug, info};
use url::Url;

use super::SearchProvider;
use super::errors::SearchError;
use super::types::{
    PROVIDER_TIMEOUT_SECS, SEARCH_RESULT_SELECTOR, SEARCH_URL, SNIPPET_SELECTOR, SearchQuery,
    SearchResultItem, TITLE_SELECTOR,
};
use crate::web_fetch::types::DESKTOP_USER_AGENT;

static RESULT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(SEARCH_RESULT_SELECTOR).expect("result selector must parse")
});

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(TITLE_SELECTOR).expect("title selector must parse"));

static SNIPPET: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(SNIPPET_SELECTOR).expect("snippet selector must parse"));

/// Search provider backed by the `DuckDuckGo` HTML endpoint
#[derive(Debug, Default, Clone, Copy)]
pub struct DuckDuckGoProvider;

impl DuckDuckGoProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SearchProvider for DuckDuckGoProvider {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResultItem>, SearchError> {
        let search_url = Url::parse_with_params(
            SEARCH_URL,
            &[("q", query.text.as_str()), ("kl", query.region.as_str())],
        )?;

        info!("querying DuckDuckGo: {search_url}");

        // One client per call; no connection state survives the request.
        let client = reqwest::Client::builder()
            .user_agent(DESKTOP_USER_AGENT)
            .timeout(Duration::from_secs(PROVIDER_TIMEOUT_SECS))
            .build()?;

        let response = client.get(search_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let items = parse_results(&body, query.max_results);
        debug!("DuckDuckGo returned {} result(s)", items.len());

        Ok(items)
    }
}

/// Parse `DuckDuckGo` result markup into structured items.
///
/// `scraper::Html` is `!Send`, so the document must be parsed and dropped
/// inside this synchronous function, never held across an await.
fn parse_results(body: &str, max_results: usize) -> Vec<SearchResultItem> {
    let document = Html::parse_document(body);

    let mut items = Vec::new();
    for result in document.select(&RESULT) {
        if items.len() >= max_results {
            break;
        }

        // Ad and spacer rows carry no title link; they are not results.
        let Some(link) = result.select(&TITLE).next() else {
            continue;
        };

        let title = link.text().collect::<String>().trim().to_string();
        let url = link.value().attr("href").map(resolve_redirect);
        let snippet = result
            .select(&SNIPPET)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string());

        items.push(SearchResultItem {
            title: (!title.is_empty()).then_some(title),
            url: url.filter(|u| !u.is_empty()),
            snippet: snippet.filter(|s| !s.is_empty()),
        });
    }

    items
}

/// `DuckDuckGo` result hrefs are redirect links of the form
/// `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`.
/// Extract and percent-decode the destination URL.
fn resolve_redirect(href: &str) -> String {
    if let Some(pos) = href.find("uddg=") {
        let start = pos + "uddg=".len();
        let end = href[start..].find('&').map_or(href.len(), |i| start + i);
        if let Ok(decoded) = urlencoding::decode(&href[start..end]) {
            if !decoded.is_empty() {
                return decoded.into_owned();
            }
        }
    }

    href.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r##"
        <html><body>
          <div class="results">
            <div class="result">
              <h2><a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fasync&rut=abc">Async in Rust</a></h2>
              <a class="result__snippet">Learn async programming.</a>
            </div>
            <div class="result result--ad">
              <span>sponsored</span>
            </div>
            <div class="result">
              <h2><a class="result__a" href="https://example.org/direct">Direct link</a></h2>
            </div>
          </div>
        </body></html>"##;

    #[test]
    fn parses_titles_urls_and_snippets() {
        let items = parse_results(RESULTS_PAGE, 10);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title.as_deref(), Some("Async in Rust"));
        assert_eq!(items[0].url.as_deref(), Some("https://example.com/async"));
        assert_eq!(items[0].snippet.as_deref(), Some("Learn async programming."));
    }

    #[test]
    fn missing_snippet_stays_none() {
        let items = parse_results(RESULTS_PAGE, 10);

        assert_eq!(items[1].url.as_deref(), Some("https://example.org/direct"));
        assert!(items[1].snippet.is_none());
    }

    #[test]
    fn truncates_to_max_results() {
        let items = parse_results(RESULTS_PAGE, 1);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn empty_page_yields_no_items() {
        assert!(parse_results("", 10).is_empty());
        assert!(parse_results("<html><body></body></html>", 10).is_empty());
    }

    #[test]
    fn redirect_decoding_falls_back_to_raw_href() {
        assert_eq!(
            resolve_redirect("//duckduckgo.com/l/?uddg=https%3A%2F%2Fa.example%2Fp&rut=1"),
            "https://a.example/p"
        );
        assert_eq!(resolve_redirect("https://plain.example/"), "https://plain.example/");
    }
}
