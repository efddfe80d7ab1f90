use divergent_mcp::transport::serve_stdio;
use divergent_mcp::{DivergentMcpServer, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
    info!("Starting Divergent MCP Server...");

    let server = DivergentMcpServer::new().with_config(config).build()?;
    info!(
        domains = server.catalog().domains().len(),
        default_domain = %server.config().default_domain,
        "Server ready"
    );

    serve_stdio(server).await
}
