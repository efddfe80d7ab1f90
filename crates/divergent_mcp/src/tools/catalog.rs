//! Catalog exploration tools

use crate::tools::to_mcp_error;
use crate::DivergentMcpServer;
use divergent_core::{normalize_domain, validate, CreativityError, DomainMatch, WordCategory};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{model::*, tool, tool_router, ErrorData as McpError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const DEFAULT_PREVIEW: usize = 3;
const MAX_PREVIEW: usize = 20;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CatalogParams {
    /// Only list domains of this category (ai_ml, web, systems, product, infrastructure)
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ResolveDomainParams {
    /// Free-text domain to resolve
    pub domain: String,
    /// Words shown per vocabulary category (1-20, default 3)
    pub preview: Option<usize>,
}

impl DivergentMcpServer {
    pub fn domain_listing(&self, params: CatalogParams) -> divergent_core::Result<Value> {
        let catalog = self.catalog();
        let wanted = params.category.as_deref().map(str::trim);
        if let Some(id) = wanted {
            if catalog.category(id).is_none() {
                return Err(CreativityError::UnknownCategory(id.to_string()));
            }
        }

        let categories: Vec<Value> = catalog
            .categories
            .iter()
            .filter(|c| wanted.map_or(true, |id| c.id == id))
            .map(|c| {
                let domains: Vec<Value> = catalog
                    .domains_in(&c.id)
                    .map(|d| json!({ "name": d.name, "keywords": d.keywords }))
                    .collect();
                json!({ "id": c.id, "label": c.label, "domains": domains })
            })
            .collect();
        let total: usize = categories
            .iter()
            .map(|c| c["domains"].as_array().map_or(0, Vec::len))
            .sum();

        Ok(json!({ "total": total, "categories": categories }))
    }

    pub fn domain_resolution(&self, params: ResolveDomainParams) -> divergent_core::Result<Value> {
        let input = validate::domain(&params.domain)?;
        let preview = params.preview.unwrap_or(DEFAULT_PREVIEW);
        if !(1..=MAX_PREVIEW).contains(&preview) {
            return Err(CreativityError::Validation {
                field: "preview",
                message: format!("must be between 1 and {MAX_PREVIEW}"),
            });
        }

        let catalog = self.catalog();
        let normalized = normalize_domain(&input);
        let resolved = catalog.resolve(&normalized);

        let mut result = json!({
            "input": input,
            "normalized": normalized,
            "match": resolved.kind(),
            "domain": resolved.label(),
        });
        if let DomainMatch::Keyword { keyword, .. } = resolved {
            result["keyword"] = json!(keyword);
        }
        if let Some(profile) = resolved.profile() {
            let vocabulary: serde_json::Map<String, Value> = WordCategory::ALL
                .into_iter()
                .map(|category| {
                    let words = profile.words.get(category);
                    (category.to_string(), json!(&words[..preview.min(words.len())]))
                })
                .collect();
            let sources: Vec<&str> = catalog
                .analogies_for(&profile.name)
                .iter()
                .map(|a| a.source.as_str())
                .collect();
            result["category"] = json!(profile.category);
            result["vocabulary"] = Value::Object(vocabulary);
            result["analogy_sources"] = json!(sources);
            result["curated_perspectives"] = json!(profile.perspectives.is_some());
        }
        Ok(result)
    }
}

#[tool_router(router = catalog_router, vis = "pub(crate)")]
impl DivergentMcpServer {
    #[tool(description = "List the catalog domains, optionally filtered by category, as JSON")]
    pub async fn list_domains(&self, params: Parameters<CatalogParams>) -> Result<CallToolResult, McpError> {
        let listing = self.domain_listing(params.0).map_err(to_mcp_error)?;
        Ok(CallToolResult::success(vec![Content::text(listing.to_string())]))
    }

    #[tool(description = "Show how a free-text domain maps onto the catalog, with a vocabulary preview")]
    pub async fn resolve_domain(
        &self,
        params: Parameters<ResolveDomainParams>,
    ) -> Result<CallToolResult, McpError> {
        let resolution = self.domain_resolution(params.0).map_err(to_mcp_error)?;
        Ok(CallToolResult::success(vec![Content::text(resolution.to_string())]))
    }
}
