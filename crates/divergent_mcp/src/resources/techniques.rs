//! Technique and thinking method reference

use super::{json_contents, MIME_JSON};
use divergent_core::{CreativityTechnique, PerspectiveType, ThinkingMethod};
use rmcp::model::{AnnotateAble, RawResource, Resource, ResourceContents};
use rmcp::ErrorData;
use serde_json::json;

pub const TECHNIQUES_URI: &str = "divergent://techniques";

#[derive(Clone, Default)]
pub struct TechniquesResource;

impl TechniquesResource {
    pub fn new() -> Self {
        Self
    }

    pub fn resources(&self) -> Vec<Resource> {
        let mut raw = RawResource::new(TECHNIQUES_URI, "Creativity Techniques");
        raw.description = Some("Creativity techniques, thinking methods and perspective types".into());
        raw.mime_type = Some(MIME_JSON.into());
        vec![raw.no_annotation()]
    }

    pub fn read_resource(&self, uri: &str) -> Result<ResourceContents, ErrorData> {
        if uri != TECHNIQUES_URI {
            return Err(ErrorData::resource_not_found(format!("Unknown technique resource: {}", uri), None));
        }

        let techniques: Vec<_> = CreativityTechnique::ALL
            .iter()
            .map(|t| json!({ "id": t.as_str(), "name": t.title(), "description": t.description() }))
            .collect();
        let methods: Vec<_> = ThinkingMethod::ALL
            .iter()
            .map(|m| json!({ "id": m.as_str(), "description": m.description() }))
            .collect();
        let perspectives: Vec<_> = PerspectiveType::ALL.iter().map(|p| p.as_str()).collect();

        Ok(json_contents(
            uri,
            &json!({
                "techniques": techniques,
                "thinking_methods": methods,
                "perspective_types": perspectives,
            }),
        ))
    }
}
