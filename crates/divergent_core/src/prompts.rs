//! Prompt rendering for each thinking method
//!
//! [`ThinkingInput`] is the loosely typed request as it arrives from a client;
//! [`ThinkingRequest`] is the validated form. [`PromptGenerator::generate`]
//! dispatches on the method and returns the rendered text.

use crate::catalog::{normalize_domain, Catalog};
use crate::context::{CreativityContext, DEFAULT_DOMAIN};
use crate::error::{CreativityError, Result};
use crate::method::{PerspectiveType, ThinkingMethod};
use crate::sampler::Sampler;
use crate::techniques::{CreativityTechnique, Techniques};
use crate::templates;
use crate::validate;
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_CONSTRAINT: &str = "introduce an impossible element";
pub const DEFAULT_TOTAL_THOUGHTS: u32 = 3;
pub const DEFAULT_ASSOCIATION_WORDS: usize = 3;

/// Number of technique lines shown in a branch or structured step.
const BRANCH_ITEMS: usize = 3;

/// `lines` as a numbered list, one item per line.
pub fn numbered(lines: &[String]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {line}\n", i + 1))
        .collect()
}

/// Raw request fields; every field except `thought` is optional.
#[derive(Debug, Clone, Default)]
pub struct ThinkingInput {
    pub thought: String,
    pub thinking_method: Option<String>,
    pub thought2: Option<String>,
    pub constraint: Option<String>,
    pub perspective_type: Option<String>,
    pub use_advanced_techniques: Option<bool>,
    pub technique: Option<String>,
    pub domain: Option<String>,
    pub seed: Option<u64>,
    pub thought_number: Option<u32>,
    pub total_thoughts: Option<u32>,
    pub next_thought_needed: Option<bool>,
    pub generate_branches: Option<bool>,
}

/// Position of a structured-process call within its sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StructuredStep {
    pub thought_number: u32,
    pub total_thoughts: u32,
    pub next_thought_needed: bool,
    pub generate_branches: bool,
}

impl Default for StructuredStep {
    fn default() -> Self {
        Self {
            thought_number: 1,
            total_thoughts: DEFAULT_TOTAL_THOUGHTS,
            next_thought_needed: true,
            generate_branches: false,
        }
    }
}

impl StructuredStep {
    pub fn phase(&self) -> Phase {
        if self.thought_number >= self.total_thoughts || !self.next_thought_needed {
            Phase::Synthesis
        } else if self.thought_number == 1 {
            Phase::Opening
        } else {
            Phase::Exploration
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Opening,
    Exploration,
    Synthesis,
}

/// A validated request
#[derive(Debug, Clone, PartialEq)]
pub struct ThinkingRequest {
    pub thought: String,
    pub method: ThinkingMethod,
    pub thought2: Option<String>,
    pub constraint: String,
    pub perspective: PerspectiveType,
    pub advanced: bool,
    pub technique: Option<CreativityTechnique>,
    /// Normalized domain text as supplied by the caller
    pub domain: Option<String>,
    pub seed: Option<u64>,
    pub step: StructuredStep,
}

impl ThinkingRequest {
    pub fn new(thought: impl Into<String>, method: ThinkingMethod) -> Self {
        Self {
            thought: thought.into(),
            method,
            thought2: None,
            constraint: DEFAULT_CONSTRAINT.to_string(),
            perspective: PerspectiveType::default(),
            advanced: false,
            technique: None,
            domain: None,
            seed: None,
            step: StructuredStep::default(),
        }
    }
}

impl TryFrom<ThinkingInput> for ThinkingRequest {
    type Error = CreativityError;

    fn try_from(input: ThinkingInput) -> Result<Self> {
        let thought = validate::thought(&input.thought, "thought")?;
        let method = match input.thinking_method.as_deref() {
            Some(m) => m.parse()?,
            None => ThinkingMethod::default(),
        };
        let thought2 = input
            .thought2
            .as_deref()
            .map(|t| validate::thought(t, "thought2"))
            .transpose()?;
        if method == ThinkingMethod::CombineThoughts && thought2.is_none() {
            return Err(CreativityError::validation(
                "thought2",
                "is required for combine_thoughts",
            ));
        }
        let constraint = match input.constraint.as_deref() {
            Some(c) => validate::constraint(c)?,
            None => DEFAULT_CONSTRAINT.to_string(),
        };
        let perspective = match input.perspective_type.as_deref() {
            Some(p) => p.parse()?,
            None => PerspectiveType::default(),
        };
        let technique = input
            .technique
            .as_deref()
            .map(str::parse::<CreativityTechnique>)
            .transpose()?;
        let domain = input
            .domain
            .as_deref()
            .map(validate::domain)
            .transpose()?
            .map(|d| normalize_domain(&d));
        let seed = input.seed.map(validate::seed).transpose()?;

        let thought_number = validate::thought_number(input.thought_number.unwrap_or(1), "thoughtNumber")?;
        let total_thoughts = validate::thought_number(
            input.total_thoughts.unwrap_or(DEFAULT_TOTAL_THOUGHTS),
            "totalThoughts",
        )?;

        Ok(Self {
            thought,
            method,
            thought2,
            constraint,
            perspective,
            advanced: input.use_advanced_techniques.unwrap_or(false),
            technique,
            domain,
            seed,
            step: StructuredStep {
                thought_number,
                // a sequence that runs longer than planned grows its total
                total_thoughts: total_thoughts.max(thought_number),
                next_thought_needed: input.next_thought_needed.unwrap_or(true),
                generate_branches: input.generate_branches.unwrap_or(false),
            },
        })
    }
}

/// Rendered prompt plus what was used to build it
#[derive(Debug, Clone, Serialize)]
pub struct PromptOutput {
    pub text: String,
    pub method: ThinkingMethod,
    pub domain: String,
    pub technique: Option<CreativityTechnique>,
    pub seed: Option<u64>,
}

pub struct PromptGenerator<'a> {
    catalog: &'a Catalog,
    techniques: Techniques<'a>,
    default_domain: String,
    association_words: usize,
}

impl<'a> PromptGenerator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            techniques: Techniques::new(catalog),
            default_domain: DEFAULT_DOMAIN.to_string(),
            association_words: DEFAULT_ASSOCIATION_WORDS,
        }
    }

    pub fn with_default_domain(mut self, domain: impl AsRef<str>) -> Self {
        self.default_domain = normalize_domain(domain.as_ref());
        self
    }

    pub fn with_association_words(mut self, count: usize) -> Self {
        self.association_words = count.max(1);
        self
    }

    pub fn techniques(&self) -> &Techniques<'a> {
        &self.techniques
    }

    /// Context for a request: explicit domain, else a domain detected in the
    /// thought, else the configured default.
    pub fn context_for(&self, request: &ThinkingRequest) -> CreativityContext {
        let mut context = self.context_in(request.domain.as_deref(), &request.thought);
        if request.method == ThinkingMethod::CreativeConstraint {
            context.constraints.push(request.constraint.clone());
        }
        context
    }

    pub fn context_in(&self, domain: Option<&str>, thought: &str) -> CreativityContext {
        let domain = match domain {
            Some(domain) => domain.to_string(),
            None => self
                .catalog
                .detect(thought)
                .map(|profile| profile.name.clone())
                .unwrap_or_else(|| self.default_domain.clone()),
        };
        CreativityContext::new(domain)
    }

    pub fn generate(&self, request: &ThinkingRequest) -> PromptOutput {
        let mut sampler = Sampler::new(request.seed);
        let context = self.context_for(request);
        let domain = context.resolve(self.catalog).label().to_string();

        let (text, technique) = match request.method {
            ThinkingMethod::StructuredProcess => self.structured_step(request, &context, &mut sampler),
            ThinkingMethod::GenerateBranches => {
                let requested = self.pick_technique(request, &mut sampler);
                self.branch_prompt(&request.thought, &context, requested, &mut sampler)
            }
            ThinkingMethod::PerspectiveShift => {
                let text = self.perspective_prompt(
                    &request.thought,
                    request.perspective,
                    request.advanced,
                    &context,
                    &mut sampler,
                );
                let technique = request.advanced.then_some(CreativityTechnique::SixThinkingHats);
                (text, technique)
            }
            ThinkingMethod::CreativeConstraint => {
                let text = self.constraint_prompt(
                    &request.thought,
                    &request.constraint,
                    request.advanced,
                    &mut sampler,
                );
                let technique = request.advanced.then_some(CreativityTechnique::ConstraintRelaxation);
                (text, technique)
            }
            ThinkingMethod::CombineThoughts => {
                let second = request.thought2.as_deref().unwrap_or_default();
                let text = self.combination_prompt(&request.thought, second, request.advanced, &mut sampler);
                let technique = request.advanced.then_some(CreativityTechnique::MorphologicalAnalysis);
                (text, technique)
            }
            ThinkingMethod::ReverseBrainstorming => (
                self.reverse_prompt(&request.thought),
                Some(CreativityTechnique::ReverseBrainstorming),
            ),
        };

        debug!(
            method = %request.method,
            domain = %domain,
            technique = ?technique,
            seed = ?request.seed,
            "Rendered prompt"
        );

        PromptOutput {
            text,
            method: request.method,
            domain,
            technique,
            seed: request.seed,
        }
    }

    /// Explicit technique, a sampled one in advanced mode, or none for classic branching.
    fn pick_technique(&self, request: &ThinkingRequest, sampler: &mut Sampler) -> Option<CreativityTechnique> {
        match request.technique {
            Some(technique) => Some(technique),
            None if request.advanced => sampler.choose(&CreativityTechnique::ALL).copied(),
            None => None,
        }
    }

    /// Lines a technique contributes to a branch prompt; `None` when the
    /// technique needs more than a single idea.
    pub fn technique_lines(
        &self,
        technique: CreativityTechnique,
        thought: &str,
        context: &CreativityContext,
        sampler: &mut Sampler,
    ) -> Option<Vec<String>> {
        let t = &self.techniques;
        let lines = match technique {
            CreativityTechnique::Scamper => t.scamper(thought, Some(context), sampler),
            CreativityTechnique::RandomWord => {
                t.word_associations(thought, self.association_words, Some(context), sampler)
            }
            CreativityTechnique::AnalogicalThinking => t.analogies(thought, None, Some(context), sampler),
            CreativityTechnique::Biomimicry => t.biomimicry(thought, Some(context), sampler),
            CreativityTechnique::SixThinkingHats => t
                .six_thinking_hats(thought, Some(context))
                .into_iter()
                .filter_map(|section| {
                    let prompt = sampler.choose(&section.prompts)?.clone();
                    Some(format!("[{}] {prompt}", section.hat.title()))
                })
                .collect(),
            CreativityTechnique::ReverseBrainstorming => {
                let mut lines = t.reverse_brainstorming(thought);
                lines.pop();
                lines
            }
            CreativityTechnique::ConstraintRelaxation => t.constraint_relaxation(thought, &context.constraints),
            CreativityTechnique::MorphologicalAnalysis => return None,
        };
        Some(lines)
    }

    /// Branch prompt plus the technique actually rendered; `None` when the
    /// classic triad was used instead.
    pub fn branch_prompt(
        &self,
        thought: &str,
        context: &CreativityContext,
        technique: Option<CreativityTechnique>,
        sampler: &mut Sampler,
    ) -> (String, Option<CreativityTechnique>) {
        let mut prompt = format!("Starting with the thought: '{thought}'\n\n");

        let lines = technique.and_then(|t| {
            self.technique_lines(t, thought, context, sampler)
                .map(|lines| (t, sampler.sample(&lines, BRANCH_ITEMS)))
        });

        let applied = match lines {
            Some((technique, lines)) if !lines.is_empty() => {
                prompt.push_str(&format!("Using {}, explore these directions:\n", technique.title()));
                prompt.push_str(&numbered(&lines));
                Some(technique)
            }
            _ => {
                prompt.push_str("Generate 3 distinct creative branches, each exploring a completely different direction:\n");
                prompt.push_str("1. A practical/functional approach\n");
                prompt.push_str("2. An artistic/aesthetic approach\n");
                prompt.push_str("3. A radical/disruptive approach\n");
                None
            }
        };

        prompt.push_str("\nFor each direction, provide a detailed exploration that builds meaningfully on the original thought.");
        (prompt, applied)
    }

    pub fn perspective_prompt(
        &self,
        thought: &str,
        perspective: PerspectiveType,
        six_hats: bool,
        context: &CreativityContext,
        sampler: &mut Sampler,
    ) -> String {
        if six_hats {
            let mut prompt = format!("Analyzing the thought: '{thought}'\n\nUsing the Six Thinking Hats framework:\n\n");
            for section in self.techniques.six_thinking_hats(thought, Some(context)) {
                prompt.push_str(&format!("**{}:**\n", section.hat.title()));
                for line in &section.prompts {
                    prompt.push_str(&format!("- {line}\n"));
                }
                prompt.push('\n');
            }
            prompt.push_str(&format!(
                "Now, synthesize insights from all perspectives while viewing through the lens of an {}.",
                perspective.label()
            ));
            return prompt;
        }

        let template = sampler
            .choose(templates::perspective_templates(perspective))
            .copied()
            .unwrap_or(templates::PERSPECTIVE_INANIMATE[0]);
        let entity = sampler
            .choose(templates::perspective_entities(perspective))
            .copied()
            .unwrap_or(perspective.label());
        templates::fill(template, &[("thought", thought), ("entity", entity)])
    }

    pub fn constraint_prompt(&self, thought: &str, constraint: &str, relaxation: bool, sampler: &mut Sampler) -> String {
        if relaxation {
            let lines = self
                .techniques
                .constraint_relaxation(thought, std::slice::from_ref(&constraint.to_string()));
            let mut prompt = format!("Working with the thought: '{thought}'\n\n");
            prompt.push_str(&format!("First, apply the constraint: '{constraint}'\n"));
            prompt.push_str("Then explore what becomes possible by relaxing this constraint:\n\n");
            prompt.push_str(&numbered(&lines));
            prompt.push_str("\nFinally, find creative ways to achieve the relaxed possibilities while still honoring the original constraint.");
            return prompt;
        }

        let template = sampler
            .choose(&templates::CONSTRAINT)
            .copied()
            .unwrap_or(templates::CONSTRAINT[0]);
        templates::fill(template, &[("thought", thought), ("constraint", constraint)])
    }

    pub fn combination_prompt(&self, first: &str, second: &str, morphological: bool, sampler: &mut Sampler) -> String {
        if morphological {
            let lines = self.techniques.morphological_analysis(first, second);
            let (dimensions, instruction) = lines.split_at(lines.len() - 1);
            let (first_dims, second_dims) = dimensions.split_at(dimensions.len() / 2);

            let mut prompt = format!("Combining thoughts:\n1. '{first}'\n2. '{second}'\n\n");
            prompt.push_str("Using morphological analysis, break down each thought into key dimensions:\n\n");
            for (label, dims) in [("For Thought 1, identify:", first_dims), ("For Thought 2, identify:", second_dims)] {
                prompt.push_str(label);
                prompt.push('\n');
                for dim in dims {
                    prompt.push_str(&format!("- {dim}\n"));
                }
                prompt.push('\n');
            }
            prompt.push_str(&instruction[0]);
            return prompt;
        }

        let template = sampler
            .choose(&templates::COMBINATION)
            .copied()
            .unwrap_or(templates::COMBINATION[0]);
        templates::fill(template, &[("thought1", first), ("thought2", second)])
    }

    pub fn reverse_prompt(&self, thought: &str) -> String {
        let mut lines = self.techniques.reverse_brainstorming(thought);
        let closing = lines.pop().unwrap_or_default();

        let mut prompt = format!("Reverse brainstorming for: '{thought}'\n\n");
        prompt.push_str("First, explore how to make this idea fail:\n\n");
        prompt.push_str(&numbered(&lines));
        prompt.push('\n');
        prompt.push_str(&closing);
        prompt
    }

    /// One stateless step of the structured process.
    pub fn structured_step(
        &self,
        request: &ThinkingRequest,
        context: &CreativityContext,
        sampler: &mut Sampler,
    ) -> (String, Option<CreativityTechnique>) {
        let step = request.step;
        let thought = request.thought.as_str();
        let domain = context.resolve(self.catalog).label();

        let mut prompt = format!(
            "Structured divergent thinking: thought {} of {}\nDomain: {domain}\n\nCurrent thought: '{thought}'\n\n",
            step.thought_number, step.total_thoughts
        );

        match step.phase() {
            Phase::Opening => {
                prompt.push_str("Opening: frame the challenge before solving it.\n");
                prompt.push_str(&format!("- What assumptions does '{thought}' take for granted?\n"));
                prompt.push_str(&format!("- Who in {domain} is affected, and what do they actually need?\n"));
                prompt.push_str("- Restate the challenge in at least two different ways.\n");
            }
            Phase::Exploration => {
                prompt.push_str("Exploration: push the idea somewhere it has not been yet.\n");
                prompt.push_str(&format!("- Which part of '{thought}' would surprise a {domain} expert?\n"));
                prompt.push_str("- Build on the previous thought, or deliberately contradict it.\n");
                prompt.push_str("- Capture at least one idea that feels impractical today.\n");
            }
            Phase::Synthesis => {
                prompt.push_str("Synthesis: converge on the strongest ideas.\n");
                prompt.push_str("- Which earlier directions reinforce each other?\n");
                prompt.push_str(&format!(
                    "- What is the boldest version of '{thought}' that could still work in {domain}?\n"
                ));
                prompt.push_str("- Name the first concrete experiment to run.\n");
            }
        }

        let requested = if request.advanced {
            self.pick_technique(request, sampler)
        } else {
            request.technique
        };
        let applied = requested.and_then(|technique| {
            let lines = self.technique_lines(technique, thought, context, sampler)?;
            Some((technique, sampler.sample(&lines, BRANCH_ITEMS)))
        });
        if let Some((technique, lines)) = &applied {
            prompt.push_str(&format!("\nApply {} ({}):\n", technique.title(), technique.description()));
            prompt.push_str(&numbered(lines));
        }

        if step.generate_branches {
            prompt.push_str("\nBranch into three divergent paths before continuing:\n");
            prompt.push_str("A. A practical/functional path\n");
            prompt.push_str("B. An artistic/aesthetic path\n");
            prompt.push_str("C. A radical/disruptive path\n");
        }

        if step.next_thought_needed && step.thought_number < step.total_thoughts {
            prompt.push_str(&format!(
                "\nNext: continue with thought {} of {}, passing thoughtNumber={}.",
                step.thought_number + 1,
                step.total_thoughts,
                step.thought_number + 1
            ));
        } else {
            prompt.push_str("\nThis completes the sequence. Summarize the most promising directions and the reasoning behind them.");
        }

        (prompt, applied.map(|(technique, _)| technique))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> PromptGenerator<'static> {
        PromptGenerator::new(Catalog::builtin())
    }

    fn input(thought: &str, method: &str) -> ThinkingInput {
        ThinkingInput {
            thought: thought.to_string(),
            thinking_method: Some(method.to_string()),
            ..ThinkingInput::default()
        }
    }

    #[test]
    fn test_request_defaults() {
        let request = ThinkingRequest::try_from(ThinkingInput {
            thought: " design a fan ".into(),
            ..ThinkingInput::default()
        })
        .unwrap();
        assert_eq!(request.thought, "design a fan");
        assert_eq!(request.method, ThinkingMethod::StructuredProcess);
        assert_eq!(request.constraint, DEFAULT_CONSTRAINT);
        assert_eq!(request.perspective, PerspectiveType::InanimateObject);
        assert_eq!(request.step, StructuredStep::default());
    }

    #[test]
    fn test_request_validation_errors() {
        let err = ThinkingRequest::try_from(input("idea", "combine_thoughts")).unwrap_err();
        assert!(err.to_string().contains("thought2"));
        assert!(err.is_invalid_input());

        let err = ThinkingRequest::try_from(input("idea", "daydream")).unwrap_err();
        assert!(matches!(err, CreativityError::UnknownMethod(_)));

        let mut bad_domain = input("idea", "generate_branches");
        bad_domain.domain = Some("<b>".into());
        assert!(ThinkingRequest::try_from(bad_domain).is_err());

        let mut bad_seed = input("idea", "generate_branches");
        bad_seed.seed = Some(0);
        assert!(ThinkingRequest::try_from(bad_seed).is_err());
    }

    #[test]
    fn test_total_thoughts_grows_with_number() {
        let mut raw = input("idea", "structured_process");
        raw.thought_number = Some(5);
        raw.total_thoughts = Some(3);
        let request = ThinkingRequest::try_from(raw).unwrap();
        assert_eq!(request.step.total_thoughts, 5);
        assert_eq!(request.step.phase(), Phase::Synthesis);
    }

    #[test]
    fn test_context_domain_resolution_order() {
        let gen = generator().with_default_domain("Product Design");
        let mut request = ThinkingRequest::new("improve kubernetes upgrades", ThinkingMethod::GenerateBranches);
        assert_eq!(gen.context_for(&request).domain, "container orchestration");

        request.thought = "a quieter blender".into();
        assert_eq!(gen.context_for(&request).domain, "product design");

        request.domain = Some("frontend frameworks".into());
        assert_eq!(gen.context_for(&request).domain, "frontend frameworks");
    }

    #[test]
    fn test_seed_makes_output_reproducible() {
        let gen = generator();
        let mut request = ThinkingRequest::new("office chair", ThinkingMethod::GenerateBranches);
        request.advanced = true;
        request.seed = Some(4242);
        request.domain = Some("user experience optimization".into());
        let a = gen.generate(&request);
        let b = gen.generate(&request);
        assert_eq!(a.text, b.text);
        assert_eq!(a.technique, b.technique);
        assert_eq!(a.domain, "user experience optimization");
    }

    #[test]
    fn test_branch_prompt_classic_triad() {
        let gen = generator();
        let request = ThinkingRequest::new("office chair", ThinkingMethod::GenerateBranches);
        let output = gen.generate(&request);
        assert!(output.text.starts_with("Starting with the thought: 'office chair'"));
        assert!(output.text.contains("1. A practical/functional approach"));
        assert!(output.technique.is_none());
    }

    #[test]
    fn test_branch_prompt_with_technique() {
        let gen = generator();
        let mut request = ThinkingRequest::new("smart water bottle", ThinkingMethod::GenerateBranches);
        request.technique = Some(CreativityTechnique::Scamper);
        request.seed = Some(10);
        let output = gen.generate(&request);
        assert!(output.text.contains("Using SCAMPER, explore these directions:"));
        assert!(output.text.contains("\n3. ["));
        assert!(!output.text.contains("\n4. "));
    }

    #[test]
    fn test_branch_prompt_morphological_falls_back() {
        let gen = generator();
        let ctx = CreativityContext::new("general innovation");
        let (text, applied) = gen.branch_prompt(
            "idea",
            &ctx,
            Some(CreativityTechnique::MorphologicalAnalysis),
            &mut Sampler::seeded(1),
        );
        assert!(text.contains("2. An artistic/aesthetic approach"));
        assert!(applied.is_none());
    }

    #[test]
    fn test_perspective_prompt() {
        let gen = generator();
        let mut request = ThinkingRequest::new("improve online education", ThinkingMethod::PerspectiveShift);
        request.perspective = PerspectiveType::AbstractConcept;
        request.seed = Some(3);
        let output = gen.generate(&request);
        assert!(output.text.contains("'improve online education'"));
        assert!(!output.text.contains("{entity}"));

        request.advanced = true;
        let output = gen.generate(&request);
        assert!(output.text.contains("**Blue Hat (Process):**"));
        assert!(output.text.ends_with("through the lens of an abstract concept."));
        assert_eq!(output.technique, Some(CreativityTechnique::SixThinkingHats));
    }

    #[test]
    fn test_constraint_prompt() {
        let gen = generator();
        let mut request = ThinkingRequest::new("eco-friendly packaging", ThinkingMethod::CreativeConstraint);
        request.constraint = "must be made from recycled materials".into();
        let output = gen.generate(&request);
        assert!(output.text.contains("'must be made from recycled materials'"));
        assert!(output.text.contains("eco-friendly packaging"));

        request.advanced = true;
        let output = gen.generate(&request);
        assert!(output.text.contains("First, apply the constraint"));
        assert!(output.text.contains("4. How could we work around the must be made from recycled materials limitation"));
    }

    #[test]
    fn test_combination_prompt() {
        let gen = generator();
        let mut request = ThinkingRequest::new("ergonomic chair", ThinkingMethod::CombineThoughts);
        request.thought2 = Some("voice assistant".into());
        let output = gen.generate(&request);
        assert!(output.text.contains("'ergonomic chair'") && output.text.contains("'voice assistant'"));

        request.advanced = true;
        let output = gen.generate(&request);
        assert!(output.text.contains("For Thought 2, identify:\n- Core function/purpose of 'voice assistant'"));
        assert!(output.text.ends_with("in unexpected ways."));
    }

    #[test]
    fn test_reverse_prompt() {
        let gen = generator();
        let output = gen.generate(&ThinkingRequest::new("mobile banking app", ThinkingMethod::ReverseBrainstorming));
        assert!(output.text.contains("6. What would make 'mobile banking app' work only in impossible conditions?"));
        assert!(output.text.ends_with("into innovative features?"));
    }

    #[test]
    fn test_structured_process_phases() {
        let gen = generator();
        let mut request = ThinkingRequest::new("sustainable transportation", ThinkingMethod::StructuredProcess);
        let opening = gen.generate(&request).text;
        assert!(opening.contains("thought 1 of 3"));
        assert!(opening.contains("Opening:"));
        assert!(opening.contains("passing thoughtNumber=2"));

        request.step.thought_number = 2;
        request.step.generate_branches = true;
        let middle = gen.generate(&request).text;
        assert!(middle.contains("Exploration:"));
        assert!(middle.contains("A. A practical/functional path"));

        request.step.next_thought_needed = false;
        let last = gen.generate(&request).text;
        assert!(last.contains("Synthesis:"));
        assert!(last.contains("This completes the sequence."));
    }

    #[test]
    fn test_structured_process_advanced_technique() {
        let gen = generator();
        let mut request = ThinkingRequest::new("sustainable transportation", ThinkingMethod::StructuredProcess);
        request.advanced = true;
        request.technique = Some(CreativityTechnique::Biomimicry);
        let output = gen.generate(&request);
        assert_eq!(output.technique, Some(CreativityTechnique::Biomimicry));
        assert!(output.text.contains("Apply biomimicry (Learn from mechanisms found in nature):"));
    }

    #[test]
    fn test_unrendered_technique_is_not_reported() {
        let gen = generator();

        let mut branches = ThinkingRequest::new("office chair", ThinkingMethod::GenerateBranches);
        branches.technique = Some(CreativityTechnique::MorphologicalAnalysis);
        let output = gen.generate(&branches);
        assert!(output.text.contains("1. A practical/functional approach"));
        assert_eq!(output.technique, None);

        let mut step = ThinkingRequest::new("office chair", ThinkingMethod::StructuredProcess);
        step.advanced = true;
        step.technique = Some(CreativityTechnique::MorphologicalAnalysis);
        let output = gen.generate(&step);
        assert!(!output.text.contains("\nApply "));
        assert_eq!(output.technique, None);
    }

    #[test]
    fn test_numbered() {
        let lines = vec!["first".to_string(), "second".to_string()];
        assert_eq!(numbered(&lines), "1. first\n2. second\n");
        assert_eq!(numbered(&[]), "");
    }
}
