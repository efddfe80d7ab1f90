//! Thinking methods and perspective types accepted by the prompt generator

use crate::error::{CreativityError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThinkingMethod {
    /// Multi-step guided exploration, one step per call
    #[default]
    StructuredProcess,
    GenerateBranches,
    PerspectiveShift,
    CreativeConstraint,
    CombineThoughts,
    ReverseBrainstorming,
}

impl ThinkingMethod {
    pub const ALL: [ThinkingMethod; 6] = [
        ThinkingMethod::StructuredProcess,
        ThinkingMethod::GenerateBranches,
        ThinkingMethod::PerspectiveShift,
        ThinkingMethod::CreativeConstraint,
        ThinkingMethod::CombineThoughts,
        ThinkingMethod::ReverseBrainstorming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThinkingMethod::StructuredProcess => "structured_process",
            ThinkingMethod::GenerateBranches => "generate_branches",
            ThinkingMethod::PerspectiveShift => "perspective_shift",
            ThinkingMethod::CreativeConstraint => "creative_constraint",
            ThinkingMethod::CombineThoughts => "combine_thoughts",
            ThinkingMethod::ReverseBrainstorming => "reverse_brainstorming",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ThinkingMethod::StructuredProcess => "Multi-turn exploration with thought tracking and optional branching",
            ThinkingMethod::GenerateBranches => "Three distinct creative directions in one response",
            ThinkingMethod::PerspectiveShift => "View the thought through an unusual viewpoint",
            ThinkingMethod::CreativeConstraint => "Use a limitation as a creative catalyst",
            ThinkingMethod::CombineThoughts => "Merge two concepts into something new",
            ThinkingMethod::ReverseBrainstorming => "Explore failure modes and invert them",
        }
    }
}

impl fmt::Display for ThinkingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThinkingMethod {
    type Err = CreativityError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ThinkingMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted)
            .ok_or_else(|| CreativityError::UnknownMethod(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerspectiveType {
    #[default]
    InanimateObject,
    AbstractConcept,
    ImpossibleBeing,
}

impl PerspectiveType {
    pub const ALL: [PerspectiveType; 3] = [
        PerspectiveType::InanimateObject,
        PerspectiveType::AbstractConcept,
        PerspectiveType::ImpossibleBeing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PerspectiveType::InanimateObject => "inanimate_object",
            PerspectiveType::AbstractConcept => "abstract_concept",
            PerspectiveType::ImpossibleBeing => "impossible_being",
        }
    }

    /// Phrase used when the type itself is named in a prompt.
    pub fn label(&self) -> &'static str {
        match self {
            PerspectiveType::InanimateObject => "inanimate object",
            PerspectiveType::AbstractConcept => "abstract concept",
            PerspectiveType::ImpossibleBeing => "impossible being",
        }
    }
}

impl fmt::Display for PerspectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PerspectiveType {
    type Err = CreativityError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        PerspectiveType::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| CreativityError::UnknownPerspective(s.to_string()))
    }
}
