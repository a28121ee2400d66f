//! MCP (Model Context Protocol) surface for the web tools
//!
//! This module exposes exactly two tools to a connected agent:
//!
//! - `web_search`: search the web via `DuckDuckGo` and format a numbered
//!   result list.
//! - `web_fetch`: GET a URL and return its content as readable text.
//!
//! Both tools answer every call with exactly one text content block.
//! Failure information is carried in the text itself, never as a
//! protocol-level fault; the one exception is malformed argument
//! envelopes (e.g. a missing required `query`), which are rejected as
//! invalid-params before a handler runs.
//!
//! The server holds no state besides the injected [`SearchProvider`];
//! calls are independent and need no locking.

pub mod types;
pub mod web_fetch;
pub mod web_search;

pub use types::{WebFetchArgs, WebSearchArgs};

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use serde_json::Value;
use tracing::debug;

use crate::web_search::{DuckDuckGoProvider, SearchProvider};

/// MCP server exposing the `web_search` and `web_fetch` tools
#[derive(Debug, Clone)]
pub struct WebToolsServer<P> {
    provider: P,
}

impl<P: SearchProvider> WebToolsServer<P> {
    /// Build a server around an injected search provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Route one tool call to its handler.
    ///
    /// Optional arguments resolve to their documented defaults during
    /// deserialization. An unknown tool name is a formattable result,
    /// not a fault: the answer is a single text block reading
    /// `Unknown tool: {name}`.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: serde_json::Map<String, Value>,
    ) -> Result<CallToolResult, McpError> {
        match name {
            web_search::TOOL_NAME => web_search::execute(&self.provider, arguments).await,
            web_fetch::TOOL_NAME => web_fetch::execute(arguments).await,
            other => Ok(CallToolResult::success(vec![Content::text(format!(
                "Unknown tool: {other}"
            ))])),
        }
    }
}

impl WebToolsServer<DuckDuckGoProvider> {
    /// Server wired to the default `DuckDuckGo` provider
    #[must_use]
    pub fn duckduckgo() -> Self {
        Self::new(DuckDuckGoProvider::new())
    }
}

impl<P: SearchProvider + 'static> ServerHandler for WebToolsServer<P> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Web search and page fetch tools. Results are returned as plain text; \
                 failures are reported in the text itself."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: vec![web_search::tool(), web_fetch::tool()],
            next_cursor: None,
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        debug!("call_tool: {} arguments: {:?}", request.name, request.arguments);

        let arguments = request.arguments.unwrap_or_default();
        self.dispatch(&request.name, arguments).await
    }
}
