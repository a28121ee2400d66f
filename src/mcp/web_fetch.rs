//! `web_fetch` MCP tool
//!
//! Declares the fetch tool schema and routes a validated call into the
//! fetch pipeline. Timeouts, HTTP errors and transport failures all come
//! back as text; the handler itself never fails.

use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content, Tool};
use serde_json::Value;

use super::types::{WebFetchArgs, schema_object};
use crate::web_fetch::{FetchRequest, fetch_url};

/// Tool name as declared to the client
pub const TOOL_NAME: &str = "web_fetch";

const DESCRIPTION: &str = "Fetch the content of a web page. Returns the raw text content \
     of the page, suitable for reading articles and documentation.";

/// Declare the tool with its schemars-derived input schema
pub fn tool() -> Tool {
    Tool::new(
        TOOL_NAME,
        DESCRIPTION,
        Arc::new(schema_object::<WebFetchArgs>()),
    )
}

/// Execute a `web_fetch` call
pub async fn execute(
    arguments: serde_json::Map<String, Value>,
) -> Result<CallToolResult, McpError> {
    let args: WebFetchArgs = serde_json::from_value(Value::Object(arguments)).map_err(|e| {
        McpError::invalid_params(format!("Invalid {TOOL_NAME} arguments: {e}"), None)
    })?;

    let request = FetchRequest::new(args.url, args.timeout);
    let text = fetch_url(&request).await;

    Ok(CallToolResult::success(vec![Content::text(text)]))
}
