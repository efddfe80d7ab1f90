//! Stdio transport for the divergent MCP server
//!
//! Serves local AI assistants (Claude Desktop, VS Code, etc.). Stdout carries
//! the protocol, so logging must go to stderr.

use crate::DivergentMcpServer;
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tracing::info;

/// Serve `server` over stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: DivergentMcpServer) -> Result<(), Box<dyn std::error::Error>> {
    let service = server.serve(stdio()).await?;
    info!("Serving over stdio");
    let reason = service.waiting().await?;
    info!(?reason, "Client disconnected");
    Ok(())
}
