//! Divergent Core - domain-aware creativity prompts
//!
//! This crate turns a seed thought into provocation prompts using a catalog of
//! domain vocabularies and a set of classic creativity techniques (SCAMPER,
//! Six Thinking Hats, biomimicry and friends). Nothing here performs I/O apart
//! from optionally loading a catalog file; all randomness flows through a
//! per-request [`Sampler`] so seeded output is reproducible.

pub mod catalog;
pub mod context;
pub mod error;
pub mod method;
pub mod prompts;
pub mod sampler;
pub mod selection;
pub mod techniques;
pub mod templates;
pub mod validate;

pub use catalog::{normalize_domain, Catalog, DomainMatch, DomainProfile, WordCategory};
pub use context::{CreativityContext, DEFAULT_DOMAIN};
pub use error::{CreativityError, Result};
pub use method::{PerspectiveType, ThinkingMethod};
pub use prompts::{PromptGenerator, PromptOutput, StructuredStep, ThinkingInput, ThinkingRequest};
pub use sampler::Sampler;
pub use selection::WordSelector;
pub use techniques::{CreativityTechnique, Hat, HatSection, Techniques};
