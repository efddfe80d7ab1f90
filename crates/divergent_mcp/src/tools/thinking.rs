//! The unified `divergent_thinking` tool

use crate::tools::to_mcp_error;
use crate::DivergentMcpServer;
use divergent_core::{PromptOutput, ThinkingInput, ThinkingRequest};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{model::*, tool, tool_router, ErrorData as McpError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DivergentThinkingParams {
    /// The idea or problem to think about
    pub thought: String,
    /// structured_process (default), generate_branches, perspective_shift,
    /// creative_constraint, combine_thoughts or reverse_brainstorming
    pub thinking_method: Option<String>,
    /// Second thought, required by combine_thoughts
    pub thought2: Option<String>,
    /// Constraint for creative_constraint (default "introduce an impossible element")
    pub constraint: Option<String>,
    /// inanimate_object (default), abstract_concept or impossible_being
    pub perspective_type: Option<String>,
    /// Use the advanced technique for the chosen method
    pub use_advanced_techniques: Option<bool>,
    /// Creativity technique applied by generate_branches and structured_process
    pub technique: Option<String>,
    /// Free-text domain, e.g. "cybersecurity" or "product design"
    pub domain: Option<String>,
    /// Seed (1-999999) for reproducible output
    pub seed: Option<u64>,
    /// Current step of a structured_process sequence
    #[serde(rename = "thoughtNumber")]
    pub thought_number: Option<u32>,
    /// Planned number of steps
    #[serde(rename = "totalThoughts")]
    pub total_thoughts: Option<u32>,
    /// Whether another step follows this one
    #[serde(rename = "nextThoughtNeeded")]
    pub next_thought_needed: Option<bool>,
    /// Ask for branch directions inside a structured_process step
    pub generate_branches: Option<bool>,
}

impl From<DivergentThinkingParams> for ThinkingInput {
    fn from(params: DivergentThinkingParams) -> Self {
        ThinkingInput {
            thought: params.thought,
            thinking_method: params.thinking_method,
            thought2: params.thought2,
            constraint: params.constraint,
            perspective_type: params.perspective_type,
            use_advanced_techniques: params.use_advanced_techniques,
            technique: params.technique,
            domain: params.domain,
            seed: params.seed,
            thought_number: params.thought_number,
            total_thoughts: params.total_thoughts,
            next_thought_needed: params.next_thought_needed,
            generate_branches: params.generate_branches,
        }
    }
}

impl DivergentMcpServer {
    /// Validate and render one request without the MCP wrapping.
    pub fn render_thinking(&self, params: DivergentThinkingParams) -> divergent_core::Result<PromptOutput> {
        let request = ThinkingRequest::try_from(ThinkingInput::from(params))?;
        Ok(self.generator().generate(&request))
    }
}

#[tool_router(router = thinking_router, vis = "pub(crate)")]
impl DivergentMcpServer {
    #[tool(
        description = "Generate a divergent thinking prompt for a thought using one of six thinking methods, optionally domain-aware and seeded"
    )]
    pub async fn divergent_thinking(
        &self,
        params: Parameters<DivergentThinkingParams>,
    ) -> Result<CallToolResult, McpError> {
        let output = self.render_thinking(params.0).map_err(to_mcp_error)?;
        info!(
            method = %output.method,
            domain = %output.domain,
            technique = ?output.technique,
            "divergent_thinking"
        );
        Ok(CallToolResult::success(vec![Content::text(output.text)]))
    }
}
