//! Domain catalog resources
//!
//! `divergent://domains` lists every category and domain;
//! `divergent://domains/{name}` returns one domain's full vocabulary.

use super::{json_contents, MIME_JSON};
use divergent_core::{normalize_domain, Catalog, DomainProfile};
use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, Resource, ResourceContents, ResourceTemplate};
use rmcp::ErrorData;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub const INDEX_URI: &str = "divergent://domains";
pub const DOMAIN_PREFIX: &str = "divergent://domains/";

#[derive(Clone)]
pub struct DomainsResource {
    catalog: Arc<Catalog>,
}

impl DomainsResource {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn resources(&self) -> Vec<Resource> {
        let mut raw = RawResource::new(INDEX_URI, "Domain Catalog");
        raw.description = Some("Categories and domains known to the vocabulary catalog".into());
        raw.mime_type = Some(MIME_JSON.into());
        vec![raw.no_annotation()]
    }

    pub fn templates(&self) -> Vec<ResourceTemplate> {
        vec![ResourceTemplate {
            raw: RawResourceTemplate {
                uri_template: format!("{DOMAIN_PREFIX}{{name}}"),
                name: "Domain Vocabulary".into(),
                title: None,
                description: Some(
                    "Word banks, keywords, analogies and biomimicry examples of one domain; \
                     spaces in the name may be written as '-' or '%20'"
                        .into(),
                ),
                mime_type: Some(MIME_JSON.into()),
            },
            annotations: None,
        }]
    }

    pub fn read_resource(&self, uri: &str) -> Result<ResourceContents, ErrorData> {
        if uri == INDEX_URI {
            return Ok(json_contents(uri, &self.index()));
        }

        let name = uri.strip_prefix(DOMAIN_PREFIX).unwrap_or_default();
        match self.lookup(name) {
            Some(profile) => {
                debug!(uri, domain = %profile.name, "Reading domain resource");
                let value = serde_json::to_value(profile)
                    .map_err(|e| ErrorData::internal_error(format!("Failed to serialize domain: {}", e), None))?;
                Ok(json_contents(uri, &value))
            }
            None => Err(ErrorData::resource_not_found(format!("Unknown domain: {}", name), None)),
        }
    }

    /// Names may use `%20` or `-` for spaces. An exact name wins over a
    /// hyphen-insensitive comparison.
    fn lookup(&self, name: &str) -> Option<&DomainProfile> {
        let decoded = name.replace("%20", " ");
        if decoded.trim().is_empty() {
            return None;
        }
        let folded = normalize_domain(&decoded.replace('-', " "));
        self.catalog.domain(&decoded).or_else(|| {
            self.catalog
                .domains()
                .iter()
                .find(|d| d.name.replace('-', " ") == folded)
        })
    }

    fn index(&self) -> serde_json::Value {
        let categories: Vec<_> = self
            .catalog
            .categories
            .iter()
            .map(|c| {
                let domains: Vec<&str> = self.catalog.domains_in(&c.id).map(|d| d.name.as_str()).collect();
                json!({ "id": c.id, "label": c.label, "domains": domains })
            })
            .collect();
        json!({
            "total": self.catalog.domains().len(),
            "categories": categories,
            "template": format!("{DOMAIN_PREFIX}{{name}}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource() -> DomainsResource {
        DomainsResource::new(Arc::new(Catalog::builtin().clone()))
    }

    fn text(contents: ResourceContents) -> serde_json::Value {
        match contents {
            ResourceContents::TextResourceContents { text, .. } => serde_json::from_str(&text).unwrap(),
            other => panic!("expected text contents, got {other:?}"),
        }
    }

    #[test]
    fn test_index_lists_every_domain() {
        let res = resource();
        let index = text(res.read_resource(INDEX_URI).unwrap());
        let listed: usize = index["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["domains"].as_array().unwrap().len())
            .sum();
        assert_eq!(listed, index["total"].as_u64().unwrap() as usize);
    }

    #[test]
    fn test_domain_name_encodings() {
        let res = resource();
        for uri in [
            "divergent://domains/container%20orchestration",
            "divergent://domains/container-orchestration",
            "divergent://domains/Container Orchestration",
        ] {
            let domain = text(res.read_resource(uri).unwrap());
            assert_eq!(domain["name"], "container orchestration");
        }

        let domain = text(res.read_resource("divergent://domains/cross-platform-product-design").unwrap());
        assert_eq!(domain["name"], "cross-platform product design");
    }

    #[test]
    fn test_unknown_domain() {
        let res = resource();
        assert!(res.read_resource("divergent://domains/basket-weaving").is_err());
        assert!(res.read_resource("divergent://domains/").is_err());
    }
}
