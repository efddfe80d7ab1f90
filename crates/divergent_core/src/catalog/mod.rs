//! Curated creativity vocabulary
//!
//! The catalog is the only source of "intelligence" in the crate: word banks,
//! analogy sources, biomimicry examples and Six Thinking Hats perspectives,
//! keyed by domain. The built-in catalog is embedded at compile time and parsed
//! once; alternative catalogs can be loaded from disk.

mod resolve;

pub use resolve::{normalize_domain, DomainMatch};

use crate::error::{CreativityError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::debug;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Word bank categories available for every domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCategory {
    CoreConcepts,
    Techniques,
    Metaphors,
    Challenges,
    Applications,
}

impl WordCategory {
    pub const ALL: [WordCategory; 5] = [
        WordCategory::CoreConcepts,
        WordCategory::Techniques,
        WordCategory::Metaphors,
        WordCategory::Challenges,
        WordCategory::Applications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WordCategory::CoreConcepts => "core_concepts",
            WordCategory::Techniques => "techniques",
            WordCategory::Metaphors => "metaphors",
            WordCategory::Challenges => "challenges",
            WordCategory::Applications => "applications",
        }
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordCategory {
    type Err = CreativityError;

    fn from_str(s: &str) -> Result<Self> {
        WordCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| CreativityError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainWords {
    pub core_concepts: Vec<String>,
    pub techniques: Vec<String>,
    pub metaphors: Vec<String>,
    pub challenges: Vec<String>,
    pub applications: Vec<String>,
}

impl DomainWords {
    pub fn get(&self, category: WordCategory) -> &[String] {
        match category {
            WordCategory::CoreConcepts => &self.core_concepts,
            WordCategory::Techniques => &self.techniques,
            WordCategory::Metaphors => &self.metaphors,
            WordCategory::Challenges => &self.challenges,
            WordCategory::Applications => &self.applications,
        }
    }
}

/// A field outside the target domain whose examples seed analogies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalogySource {
    pub source: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiomimicryExample {
    pub organism: String,
    pub mechanism: String,
    pub property: String,
}

/// Domain-specific questions for the first four thinking hats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HatPerspectives {
    pub factual: Vec<String>,
    pub emotional: Vec<String>,
    pub critical: Vec<String>,
    pub positive: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainCategory {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainProfile {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub words: DomainWords,
    #[serde(default)]
    pub analogies: Vec<AnalogySource>,
    #[serde(default)]
    pub biomimicry: Vec<BiomimicryExample>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspectives: Option<HatPerspectives>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub random_words: Vec<String>,
    pub default_constraints: Vec<String>,
    pub analogies: Vec<AnalogySource>,
    pub biomimicry: Vec<BiomimicryExample>,
    pub categories: Vec<DomainCategory>,
    pub domains: Vec<DomainProfile>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| match Catalog::from_toml_str(BUILTIN_CATALOG) {
            Ok(catalog) => catalog,
            // covered by test_builtin_catalog_is_valid
            Err(e) => panic!("embedded catalog is invalid: {e}"),
        })
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(source)?;
        catalog.validate()?;
        debug!(
            domains = catalog.domains.len(),
            categories = catalog.categories.len(),
            "Catalog parsed"
        );
        Ok(catalog)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CreativityError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if self.random_words.is_empty() {
            return Err(CreativityError::Catalog("random_words is empty".into()));
        }
        if self.default_constraints.is_empty() {
            return Err(CreativityError::Catalog("default_constraints is empty".into()));
        }
        if self.analogies.iter().all(|a| a.examples.is_empty()) {
            return Err(CreativityError::Catalog("no generic analogy examples".into()));
        }
        if self.biomimicry.is_empty() {
            return Err(CreativityError::Catalog("biomimicry is empty".into()));
        }

        let category_ids: HashSet<&str> = self.categories.iter().map(|c| c.id.as_str()).collect();
        let mut names = HashSet::new();
        for domain in &self.domains {
            if domain.name != normalize_domain(&domain.name) {
                return Err(CreativityError::Catalog(format!(
                    "domain name '{}' must be lowercase and single-spaced",
                    domain.name
                )));
            }
            if !names.insert(domain.name.as_str()) {
                return Err(CreativityError::Catalog(format!(
                    "duplicate domain '{}'",
                    domain.name
                )));
            }
            if !category_ids.contains(domain.category.as_str()) {
                return Err(CreativityError::Catalog(format!(
                    "domain '{}' has unknown category '{}'",
                    domain.name, domain.category
                )));
            }
            for keyword in &domain.keywords {
                if keyword.is_empty() || *keyword != normalize_domain(keyword) {
                    return Err(CreativityError::Catalog(format!(
                        "keyword '{}' of domain '{}' must be lowercase and single-spaced",
                        keyword, domain.name
                    )));
                }
            }
            for category in WordCategory::ALL {
                if domain.words.get(category).is_empty() {
                    return Err(CreativityError::Catalog(format!(
                        "domain '{}' has no {} words",
                        domain.name, category
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn domains(&self) -> &[DomainProfile] {
        &self.domains
    }

    pub fn domain(&self, name: &str) -> Option<&DomainProfile> {
        let name = normalize_domain(name);
        self.domains.iter().find(|d| d.name == name)
    }

    pub fn category(&self, id: &str) -> Option<&DomainCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn domains_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a DomainProfile> + 'a {
        self.domains.iter().filter(move |d| d.category == category)
    }

    /// Words of one category for a domain; empty for domains outside the catalog.
    pub fn words(&self, domain: &str, category: WordCategory) -> &[String] {
        self.domain(domain)
            .map(|d| d.words.get(category))
            .unwrap_or(&[])
    }

    pub fn analogies_for(&self, domain: &str) -> &[AnalogySource] {
        match self.domain(domain) {
            Some(profile) if !profile.analogies.is_empty() => &profile.analogies,
            _ => &self.analogies,
        }
    }

    pub fn biomimicry_for(&self, domain: &str) -> &[BiomimicryExample] {
        match self.domain(domain) {
            Some(profile) if !profile.biomimicry.is_empty() => &profile.biomimicry,
            _ => &self.biomimicry,
        }
    }

    pub fn perspectives_for(&self, domain: &str) -> Option<&HatPerspectives> {
        self.domain(domain).and_then(|d| d.perspectives.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
random_words = ["mirror"]
default_constraints = ["time constraints"]

[[analogies]]
source = "music"
examples = ["improvisation"]

[[biomimicry]]
organism = "gecko feet"
mechanism = "uses van der Waals forces for adhesion"
property = "reversible sticking ability"

[[categories]]
id = "craft"
label = "Craft"

[[domains]]
name = "pottery"
category = "craft"
keywords = ["ceramics"]

[domains.words]
core_concepts = ["clay"]
techniques = ["throwing"]
metaphors = ["shaping"]
challenges = ["cracking"]
applications = ["tableware"]
"#;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.domains().len(), 78);
        assert_eq!(catalog.categories.len(), 5);
        assert!(catalog.domain("cybersecurity architecture").is_some());
    }

    #[test]
    fn test_domain_lookup_is_normalized() {
        let catalog = Catalog::builtin();
        let profile = catalog.domain("  Machine   Learning Algorithms ").unwrap();
        assert_eq!(profile.name, "machine learning algorithms");
    }

    #[test]
    fn test_words_for_unknown_domain_are_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.words("basket weaving", WordCategory::Metaphors).is_empty());
        assert!(!catalog
            .words("site reliability engineering", WordCategory::Metaphors)
            .is_empty());
    }

    #[test]
    fn test_fallbacks_to_generic_tables() {
        let catalog = Catalog::builtin();
        // frontend frameworks has words but no dedicated analogies or biomimicry
        assert_eq!(catalog.analogies_for("frontend frameworks").len(), catalog.analogies.len());
        assert_eq!(catalog.biomimicry_for("frontend frameworks").len(), catalog.biomimicry.len());
        assert_eq!(catalog.analogies_for("distributed systems design")[0].source, "organizational networks");
        assert!(catalog.perspectives_for("machine learning algorithms").is_some());
        assert!(catalog.perspectives_for("frontend frameworks").is_none());
    }

    #[test]
    fn test_domains_in_category() {
        let catalog = Catalog::builtin();
        let ai: Vec<_> = catalog.domains_in("ai_ml").collect();
        assert_eq!(ai.len(), 18);
        assert!(ai.iter().all(|d| d.category == "ai_ml"));
    }

    #[test]
    fn test_word_category_round_trip_names() {
        assert_eq!("metaphors".parse::<WordCategory>().unwrap(), WordCategory::Metaphors);
        assert!("adjectives".parse::<WordCategory>().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.domains().len(), 1);
        assert_eq!(catalog.words("pottery", WordCategory::Techniques), ["throwing"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("/nonexistent/catalog.toml").unwrap_err();
        assert!(matches!(err, CreativityError::Io { .. }));
    }

    #[test]
    fn test_rejects_empty_word_bank() {
        let broken = MINIMAL.replace(r#"metaphors = ["shaping"]"#, "metaphors = []");
        let err = Catalog::from_toml_str(&broken).unwrap_err();
        assert!(err.to_string().contains("no metaphors words"));
    }

    #[test]
    fn test_rejects_unnormalized_keyword() {
        let broken = MINIMAL.replace(r#"keywords = ["ceramics"]"#, r#"keywords = ["ceramics", "Kiln"]"#);
        let err = Catalog::from_toml_str(&broken).unwrap_err();
        assert!(matches!(err, CreativityError::Catalog(_)));
        assert!(err.to_string().contains("keyword 'Kiln' of domain 'pottery'"));

        let spaced = MINIMAL.replace(r#"keywords = ["ceramics"]"#, r#"keywords = ["wood  fired"]"#);
        assert!(Catalog::from_toml_str(&spaced).is_err());

        let empty = MINIMAL.replace(r#"keywords = ["ceramics"]"#, r#"keywords = [""]"#);
        assert!(Catalog::from_toml_str(&empty).is_err());
    }

    #[test]
    fn test_rejects_unknown_category() {
        let broken = MINIMAL.replace(r#"category = "craft""#, r#"category = "art""#);
        assert!(matches!(
            Catalog::from_toml_str(&broken),
            Err(CreativityError::Catalog(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            Catalog::from_toml_str("random_words = ["),
            Err(CreativityError::CatalogParse(_))
        ));
    }
}
