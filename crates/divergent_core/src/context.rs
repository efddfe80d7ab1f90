//! Request context shared by all techniques

use crate::catalog::{normalize_domain, Catalog, DomainMatch};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DOMAIN: &str = "general innovation";

/// What a technique knows about the problem beyond the idea itself
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreativityContext {
    pub domain: String,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub time_period: Option<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
}

impl CreativityContext {
    /// Context for `domain`, stored in normalized form.
    pub fn new(domain: impl AsRef<str>) -> Self {
        Self {
            domain: normalize_domain(domain.as_ref()),
            ..Self::default()
        }
    }

    pub fn with_constraints<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints = constraints.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_goals<I, S>(mut self, goals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.goals = goals.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_target_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = Some(audience.into());
        self
    }

    pub fn resolve<'a>(&'a self, catalog: &'a Catalog) -> DomainMatch<'a> {
        catalog.resolve(&self.domain)
    }
}

/// Domain phrase used in templates when no context is supplied.
pub(crate) fn domain_label<'a>(catalog: &'a Catalog, context: Option<&'a CreativityContext>) -> &'a str {
    match context {
        Some(ctx) if !ctx.domain.is_empty() => ctx.resolve(catalog).label(),
        _ => DEFAULT_DOMAIN,
    }
}
