//! Divergent MCP Server - creativity prompts for AI assistants
//!
//! This crate exposes the divergent_core prompt generator over the Model
//! Context Protocol: one unified `divergent_thinking` tool, direct access to
//! individual creativity techniques, and catalog lookups, plus read-only
//! `divergent://` resources describing the domain catalog.

use divergent_core::{Catalog, PromptGenerator};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{tool_handler, ErrorData as McpError, RoleServer, ServerHandler};
use std::sync::Arc;
use tracing::{debug, info};

pub mod config;
pub mod resources;
pub mod tools;
#[cfg(feature = "stdio")]
pub mod transport;

pub use config::{ConfigError, ServerConfig};
pub use resources::DivergentResourceProvider;
pub use tools::{CatalogParams, CreativityTechniqueParams, DivergentThinkingParams, ResolveDomainParams};

const INSTRUCTIONS: &str = "Divergent thinking prompts. Call divergent_thinking with a thought and a \
thinking_method (structured_process, generate_branches, perspective_shift, creative_constraint, \
combine_thoughts, reverse_brainstorming). Pass a domain to get domain-specific vocabulary and a \
seed for reproducible output. Use creativity_technique to run a single technique, and \
list_domains / resolve_domain to explore the domain catalog.";

/// Main divergent thinking MCP server
#[derive(Clone)]
pub struct DivergentMcpServer {
    config: Arc<ServerConfig>,
    catalog: Arc<Catalog>,
    resource_provider: DivergentResourceProvider,
    tool_router: ToolRouter<Self>,
}

impl DivergentMcpServer {
    /// Server over the built-in catalog with default configuration.
    pub fn new() -> Self {
        let catalog = Arc::new(Catalog::builtin().clone());
        Self {
            config: Arc::new(ServerConfig::default()),
            resource_provider: DivergentResourceProvider::new(catalog.clone()),
            catalog,
            tool_router: Self::thinking_router() + Self::technique_router() + Self::catalog_router(),
        }
    }

    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Arc::new(catalog);
        self.resource_provider = DivergentResourceProvider::new(self.catalog.clone());
        self
    }

    /// Validate and normalize the configuration, then load the configured
    /// catalog file, if any.
    pub fn build(mut self) -> Result<Self, ConfigError> {
        let mut config = (*self.config).clone();
        config.normalize()?;

        if let Some(path) = &config.catalog_path {
            let catalog = Catalog::load(path)?;
            info!(path = %path.display(), domains = catalog.domains().len(), "Loaded catalog");
            self = self.with_catalog(catalog);
        }

        debug!(
            default_domain = %config.default_domain,
            association_words = config.association_words,
            "Server configured"
        );
        self.config = Arc::new(config);
        Ok(self)
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn resource_provider(&self) -> &DivergentResourceProvider {
        &self.resource_provider
    }

    /// Prompt generator configured for this server.
    pub fn generator(&self) -> PromptGenerator<'_> {
        PromptGenerator::new(&self.catalog)
            .with_default_domain(&self.config.default_domain)
            .with_association_words(self.config.association_words)
    }
}

impl Default for DivergentMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for DivergentMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: self.resource_provider.resources(),
            next_cursor: None,
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult {
            resource_templates: self.resource_provider.templates(),
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let contents = self.resource_provider.read_resource(&uri)?;
        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}
