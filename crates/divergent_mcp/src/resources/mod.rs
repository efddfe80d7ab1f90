//! Resource providers for the divergent MCP server
//!
//! Read-only JSON views of the domain catalog and the technique list under the
//! `divergent://` scheme.

pub mod domains;
pub mod techniques;

pub use domains::DomainsResource;
pub use techniques::TechniquesResource;

use divergent_core::Catalog;
use rmcp::model::{ErrorData, Resource, ResourceContents, ResourceTemplate};
use std::sync::Arc;

pub const MIME_JSON: &str = "application/json";

/// Combined resource provider routing on the URI prefix
#[derive(Clone)]
pub struct DivergentResourceProvider {
    domains: Arc<DomainsResource>,
    techniques: Arc<TechniquesResource>,
}

impl DivergentResourceProvider {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            domains: Arc::new(DomainsResource::new(catalog)),
            techniques: Arc::new(TechniquesResource::new()),
        }
    }

    pub fn resources(&self) -> Vec<Resource> {
        let mut all = self.domains.resources();
        all.extend(self.techniques.resources());
        all
    }

    pub fn templates(&self) -> Vec<ResourceTemplate> {
        self.domains.templates()
    }

    pub fn read_resource(&self, uri: &str) -> Result<ResourceContents, ErrorData> {
        if uri == domains::INDEX_URI || uri.starts_with(domains::DOMAIN_PREFIX) {
            self.domains.read_resource(uri)
        } else if uri == techniques::TECHNIQUES_URI {
            self.techniques.read_resource(uri)
        } else {
            Err(ErrorData::resource_not_found(format!("Unknown resource URI: {}", uri), None))
        }
    }
}

pub(crate) fn json_contents(uri: &str, value: &serde_json::Value) -> ResourceContents {
    ResourceContents::TextResourceContents {
        uri: uri.to_string(),
        mime_type: Some(MIME_JSON.to_string()),
        text: value.to_string(),
        meta: None,
    }
}
