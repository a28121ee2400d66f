use mcp_web_tools::WebToolsServer;
use mcp_web_tools::mcp::{WebFetchArgs, WebSearchArgs};
use mcp_web_tools::web_search::{SearchError, SearchProvider, SearchQuery, SearchResultItem};
use serde_json::{Map, Value, json};

/// Provider recording nothing and answering with one canned result
struct CannedProvider;

impl SearchProvider for CannedProvider {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResultItem>, SearchError> {
        assert!(!query.text.is_empty());
        Ok(vec![SearchResultItem {
            title: Some("Canned".to_string()),
            url: Some("https://example.com/".to_string()),
            snippet: Some("A canned result".to_string()),
        }])
    }
}

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

/// Pull the single text block out of a tool result
fn result_text(result: &rmcp::model::CallToolResult) -> String {
    let value = serde_json::to_value(result).unwrap();
    let content = value["content"].as_array().unwrap();
    assert_eq!(content.len(), 1, "every call returns exactly one message");
    content[0]["text"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn unknown_tool_is_a_text_result_not_a_fault() {
    let server = WebToolsServer::new(CannedProvider);

    let result = server.dispatch("frobnicate", Map::new()).await.unwrap();

    assert_eq!(result_text(&result), "Unknown tool: frobnicate");
}

#[tokio::test]
async fn web_search_routes_to_the_injected_provider() {
    let server = WebToolsServer::new(CannedProvider);

    let result = server
        .dispatch("web_search", args(json!({"query": "rust"})))
        .await
        .unwrap();
    let text = result_text(&result);

    assert!(text.starts_with("Search results for: rust"));
    assert!(text.contains("1. Canned"));
}

#[tokio::test]
async fn web_search_missing_query_is_invalid_params() {
    let server = WebToolsServer::new(CannedProvider);

    let result = server.dispatch("web_search", Map::new()).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn web_fetch_missing_url_is_invalid_params() {
    let server = WebToolsServer::new(CannedProvider);

    let result = server.dispatch("web_fetch", Map::new()).await;

    assert!(result.is_err());
}

#[test]
fn search_arguments_resolve_documented_defaults() {
    let parsed: WebSearchArgs = serde_json::from_value(json!({"query": "q"})).unwrap();

    assert_eq!(parsed.max_results, 10);
    assert_eq!(parsed.region, "wt-wt");
}

#[test]
fn fetch_arguments_resolve_documented_defaults() {
    let parsed: WebFetchArgs = serde_json::from_value(json!({"url": "https://e.example/"})).unwrap();

    assert_eq!(parsed.timeout, 30);
}

#[test]
fn explicit_arguments_override_defaults() {
    let parsed: WebSearchArgs =
        serde_json::from_value(json!({"query": "q", "max_results": 3, "region": "us-en"})).unwrap();

    assert_eq!(parsed.max_results, 3);
    assert_eq!(parsed.region, "us-en");
}
