//! Creativity techniques
//!
//! Each technique turns an idea plus the domain vocabulary into a list of
//! provocation prompts. Techniques never fail: missing vocabulary falls back
//! to generic wording.

mod associations;
mod hats;
mod nature;
mod reversal;
mod scamper;

pub use hats::{Hat, HatSection};

use crate::catalog::Catalog;
use crate::error::{CreativityError, Result};
use crate::selection::WordSelector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativityTechnique {
    Scamper,
    RandomWord,
    MorphologicalAnalysis,
    AnalogicalThinking,
    ReverseBrainstorming,
    SixThinkingHats,
    Biomimicry,
    ConstraintRelaxation,
}

impl CreativityTechnique {
    pub const ALL: [CreativityTechnique; 8] = [
        CreativityTechnique::Scamper,
        CreativityTechnique::RandomWord,
        CreativityTechnique::MorphologicalAnalysis,
        CreativityTechnique::AnalogicalThinking,
        CreativityTechnique::ReverseBrainstorming,
        CreativityTechnique::SixThinkingHats,
        CreativityTechnique::Biomimicry,
        CreativityTechnique::ConstraintRelaxation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CreativityTechnique::Scamper => "scamper",
            CreativityTechnique::RandomWord => "random_word",
            CreativityTechnique::MorphologicalAnalysis => "morphological_analysis",
            CreativityTechnique::AnalogicalThinking => "analogical_thinking",
            CreativityTechnique::ReverseBrainstorming => "reverse_brainstorming",
            CreativityTechnique::SixThinkingHats => "six_thinking_hats",
            CreativityTechnique::Biomimicry => "biomimicry",
            CreativityTechnique::ConstraintRelaxation => "constraint_relaxation",
        }
    }

    /// Human readable name used in prompt headers.
    pub fn title(&self) -> &'static str {
        match self {
            CreativityTechnique::Scamper => "SCAMPER",
            CreativityTechnique::RandomWord => "random word association",
            CreativityTechnique::MorphologicalAnalysis => "morphological analysis",
            CreativityTechnique::AnalogicalThinking => "analogical thinking",
            CreativityTechnique::ReverseBrainstorming => "reverse brainstorming",
            CreativityTechnique::SixThinkingHats => "Six Thinking Hats",
            CreativityTechnique::Biomimicry => "biomimicry",
            CreativityTechnique::ConstraintRelaxation => "constraint relaxation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CreativityTechnique::Scamper => {
                "Substitute, Combine, Adapt, Modify, Put to other uses, Eliminate, Reverse"
            }
            CreativityTechnique::RandomWord => "Connect the idea with domain words and metaphors",
            CreativityTechnique::MorphologicalAnalysis => {
                "Break ideas into dimensions and recombine them"
            }
            CreativityTechnique::AnalogicalThinking => "Borrow structure from unrelated fields",
            CreativityTechnique::ReverseBrainstorming => {
                "Explore how to make the idea fail, then invert the failures"
            }
            CreativityTechnique::SixThinkingHats => {
                "Facts, emotions, risks, benefits, creativity and process in turn"
            }
            CreativityTechnique::Biomimicry => "Learn from mechanisms found in nature",
            CreativityTechnique::ConstraintRelaxation => {
                "Imagine the idea without its current limitations"
            }
        }
    }
}

impl fmt::Display for CreativityTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreativityTechnique {
    type Err = CreativityError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        CreativityTechnique::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| CreativityError::UnknownTechnique(s.to_string()))
    }
}

/// Technique implementations over a borrowed catalog
pub struct Techniques<'a> {
    catalog: &'a Catalog,
    selector: WordSelector<'a>,
}

impl<'a> Techniques<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            selector: WordSelector::new(catalog),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}

/// `words[index]`, or `fallback` when the list is too short.
fn nth_or<'s>(words: &'s [String], index: usize, fallback: &'s str) -> &'s str {
    words.get(index).map(String::as_str).unwrap_or(fallback)
}
