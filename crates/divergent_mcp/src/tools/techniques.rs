//! Direct access to individual creativity techniques

use crate::tools::to_mcp_error;
use crate::DivergentMcpServer;
use divergent_core::prompts::numbered;
use divergent_core::{validate, CreativityError, CreativityTechnique, Sampler};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{model::*, tool, tool_router, ErrorData as McpError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

const MAX_WORD_COUNT: usize = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreativityTechniqueParams {
    /// scamper, random_word, morphological_analysis, analogical_thinking,
    /// reverse_brainstorming, six_thinking_hats, biomimicry or constraint_relaxation
    pub technique: String,
    /// The idea to apply the technique to
    pub idea: String,
    /// Second idea, required by morphological_analysis
    pub second_idea: Option<String>,
    /// Free-text domain for vocabulary selection
    pub domain: Option<String>,
    /// Constraints to relax (constraint_relaxation)
    pub constraints: Option<Vec<String>>,
    /// Number of words for random_word (1-10)
    pub word_count: Option<usize>,
    /// Seed (1-999999) for reproducible output
    pub seed: Option<u64>,
}

impl DivergentMcpServer {
    pub fn render_technique(&self, params: CreativityTechniqueParams) -> divergent_core::Result<String> {
        let technique: CreativityTechnique = params.technique.parse()?;
        let idea = validate::thought(&params.idea, "idea")?;
        let domain = params
            .domain
            .as_deref()
            .map(validate::domain)
            .transpose()?
            .map(|d| divergent_core::normalize_domain(&d));
        let seed = params.seed.map(validate::seed).transpose()?;
        let constraints = params
            .constraints
            .unwrap_or_default()
            .iter()
            .map(|c| validate::constraint(c))
            .collect::<divergent_core::Result<Vec<_>>>()?;
        let word_count = params.word_count.unwrap_or(self.config().association_words);
        if !(1..=MAX_WORD_COUNT).contains(&word_count) {
            return Err(CreativityError::Validation {
                field: "word_count",
                message: format!("must be between 1 and {MAX_WORD_COUNT}"),
            });
        }

        let generator = self.generator();
        let context = generator
            .context_in(domain.as_deref(), &idea)
            .with_constraints(constraints);
        let label = context.resolve(self.catalog()).label().to_string();
        let techniques = generator.techniques();
        let mut sampler = Sampler::new(seed);

        let mut out = format!("{} for '{idea}' (domain: {label})\n", technique.title());
        out.push_str(&format!("{}\n\n", technique.description()));

        let lines = match technique {
            CreativityTechnique::Scamper => techniques.scamper(&idea, Some(&context), &mut sampler),
            CreativityTechnique::RandomWord => {
                techniques.word_associations(&idea, word_count, Some(&context), &mut sampler)
            }
            CreativityTechnique::AnalogicalThinking => {
                techniques.analogies(&idea, None, Some(&context), &mut sampler)
            }
            CreativityTechnique::Biomimicry => techniques.biomimicry(&idea, Some(&context), &mut sampler),
            CreativityTechnique::ReverseBrainstorming => techniques.reverse_brainstorming(&idea),
            CreativityTechnique::ConstraintRelaxation => {
                techniques.constraint_relaxation(&idea, &context.constraints)
            }
            CreativityTechnique::MorphologicalAnalysis => {
                let second = params.second_idea.as_deref().ok_or_else(|| CreativityError::Validation {
                    field: "second_idea",
                    message: "is required for morphological_analysis".into(),
                })?;
                let second = validate::thought(second, "second_idea")?;
                techniques.morphological_analysis(&idea, &second)
            }
            CreativityTechnique::SixThinkingHats => {
                for section in techniques.six_thinking_hats(&idea, Some(&context)) {
                    out.push_str(&format!("{}:\n", section.hat.title()));
                    for line in &section.prompts {
                        out.push_str(&format!("- {line}\n"));
                    }
                    out.push('\n');
                }
                return Ok(out.trim_end().to_string());
            }
        };

        out.push_str(&numbered(&lines));
        Ok(out.trim_end().to_string())
    }
}

#[tool_router(router = technique_router, vis = "pub(crate)")]
impl DivergentMcpServer {
    #[tool(description = "Apply a single creativity technique to an idea and return numbered prompts")]
    pub async fn creativity_technique(
        &self,
        params: Parameters<CreativityTechniqueParams>,
    ) -> Result<CallToolResult, McpError> {
        let technique = params.0.technique.clone();
        let text = self.render_technique(params.0).map_err(to_mcp_error)?;
        info!(technique = %technique, "creativity_technique");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
