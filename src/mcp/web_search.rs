//! `web_search` MCP tool
//!
//! Declares the search tool schema and routes a validated call into the
//! search pipeline. The handler itself never fails; its outcome is always
//! a single text block.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content, Tool};
use serde_json::Value;

use super::types::{WebSearchArgs, schema_object};
use crate::web_search::{self, SearchProvider};

/// Tool name as declared to the client
pub const TOOL_NAME: &str = "web_search";

const DESCRIPTION: &str = "Search the web using DuckDuckGo. Returns a list of search \
     results with titles, URLs, and snippets.";

/// Declare the tool with its schemars-derived input schema
pub fn tool() -> Tool {
    Tool::new(
        TOOL_NAME,
        DESCRIPTION,
        Arc::new(schema_object::<WebSearchArgs>()),
    )
}

/// Execute a `web_search` call against the injected provider
pub async fn execute<P: SearchProvider>(
    provider: &P,
    arguments: serde_json::Map<String, Value>,
) -> Result<CallToolResult, McpError> {
    let args: WebSearchArgs = serde_json::from_value(Value::Object(arguments)).map_err(|e| {
        McpError::invalid_params(format!("Invalid {TOOL_NAME} arguments: {e}"), None)
    })?;

    let text = web_search::run_search(provider, &args.query, args.max_results, &args.region).await;

    Ok(CallToolResult::success(vec![Content::text(text)]))
}
