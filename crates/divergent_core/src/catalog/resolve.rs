//! Mapping free-text domains onto catalog entries

use super::{Catalog, DomainProfile};
use tracing::debug;

/// Lowercase, trim and collapse internal whitespace.
pub fn normalize_domain(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Outcome of resolving a free-text domain against the catalog
#[derive(Debug, Clone, Copy)]
pub enum DomainMatch<'a> {
    /// The text is a catalog domain name
    Exact(&'a DomainProfile),
    /// The text mentions one of a domain's keywords
    Keyword {
        profile: &'a DomainProfile,
        keyword: &'a str,
    },
    /// Nothing in the catalog matched; holds the normalized text
    Unknown(&'a str),
}

impl<'a> DomainMatch<'a> {
    pub fn profile(&self) -> Option<&'a DomainProfile> {
        match *self {
            DomainMatch::Exact(profile) | DomainMatch::Keyword { profile, .. } => Some(profile),
            DomainMatch::Unknown(_) => None,
        }
    }

    /// Phrase interpolated into templates.
    pub fn label(&self) -> &'a str {
        match *self {
            DomainMatch::Exact(profile) | DomainMatch::Keyword { profile, .. } => &profile.name,
            DomainMatch::Unknown(text) => text,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DomainMatch::Exact(_) => "exact",
            DomainMatch::Keyword { .. } => "keyword",
            DomainMatch::Unknown(_) => "unknown",
        }
    }
}

impl Catalog {
    /// Resolve `normalized` (see [`normalize_domain`]) to a catalog domain.
    ///
    /// Exact names win. Otherwise the longest keyword found on word boundaries
    /// selects the domain, ties going to the earlier domain in catalog order.
    pub fn resolve<'a>(&'a self, normalized: &'a str) -> DomainMatch<'a> {
        if let Some(profile) = self.domains.iter().find(|d| d.name == normalized) {
            return DomainMatch::Exact(profile);
        }

        match self.best_keyword(normalized) {
            Some((profile, keyword)) => {
                debug!(input = normalized, domain = %profile.name, keyword, "Resolved domain by keyword");
                DomainMatch::Keyword { profile, keyword }
            }
            None => DomainMatch::Unknown(normalized),
        }
    }

    /// Look for a catalog domain mentioned inside arbitrary text such as a thought.
    pub fn detect(&self, text: &str) -> Option<&DomainProfile> {
        let normalized = normalize_domain(text);
        if let Some(profile) = self
            .domains
            .iter()
            .find(|d| contains_phrase(&normalized, &d.name))
        {
            return Some(profile);
        }
        self.best_keyword(&normalized).map(|(profile, _)| profile)
    }

    fn best_keyword<'a>(&'a self, text: &str) -> Option<(&'a DomainProfile, &'a str)> {
        let mut best: Option<(&DomainProfile, &str)> = None;
        for profile in &self.domains {
            for keyword in &profile.keywords {
                if !contains_phrase(text, keyword) {
                    continue;
                }
                let longer = best.map_or(true, |(_, current)| keyword.len() > current.len());
                if longer {
                    best = Some((profile, keyword.as_str()));
                }
            }
        }
        best
    }
}

/// Substring match that refuses to start or end inside a word.
fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    text.match_indices(phrase).any(|(start, _)| {
        let end = start + phrase.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
