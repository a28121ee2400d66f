// MCP stdio server: web search and page fetch tools.
//
// Serves the `web_search` and `web_fetch` tools over stdin/stdout for an
// MCP client (e.g. an agent runner). All diagnostics go to stderr; stdout
// carries only the protocol stream.

use anyhow::Result;
use mcp_web_tools::WebToolsServer;
use rmcp::ServiceExt;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("starting web tools MCP server on stdio");

    let server = WebToolsServer::duckduckgo();
    let running = server.serve(stdio()).await?;

    // Block until the client disconnects.
    let quit_reason = running.waiting().await?;
    tracing::info!("server stopped: {quit_reason:?}");

    Ok(())
}
