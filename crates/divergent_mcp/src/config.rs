//! Configuration for the divergent MCP server
//!
//! Sources, later ones winning: built-in defaults, the TOML file named by
//! `DIVERGENT_MCP_CONFIG`, then `DIVERGENT_MCP_*` environment variables.

use divergent_core::{normalize_domain, validate, DEFAULT_DOMAIN};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "DIVERGENT_MCP_CONFIG";
const ENV_PREFIX: &str = "DIVERGENT_MCP_";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },

    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] divergent_core::CreativityError),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Domain used when a request names none and none is detected in the thought
    #[serde(default = "default_domain")]
    pub default_domain: String,

    /// Alternative catalog file replacing the built-in one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Words drawn by random word association
    #[serde(default = "default_association_words")]
    pub association_words: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_domain: default_domain(),
            catalog_path: None,
            log_level: default_log_level(),
            association_words: default_association_words(),
        }
    }
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_association_words() -> usize {
    3
}

impl ServerConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) if !path.trim().is_empty() => Self::load(path.trim())?,
            _ => Self::default(),
        };
        config.apply_overrides(&lookup)?;
        config.normalize()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_overrides<F>(&mut self, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(domain) = var("DEFAULT_DOMAIN") {
            self.default_domain = domain;
        }
        if let Some(path) = var("CATALOG_PATH") {
            self.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = level;
        }
        if let Some(words) = var("ASSOCIATION_WORDS") {
            self.association_words = words.trim().parse().map_err(|_| ConfigError::Invalid {
                key: format!("{ENV_PREFIX}ASSOCIATION_WORDS"),
                message: format!("'{words}' is not a positive integer"),
            })?;
        }
        Ok(())
    }

    /// Check every field without modifying the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate::domain(&self.default_domain).map_err(|e| ConfigError::Invalid {
            key: "default_domain".into(),
            message: e.to_string(),
        })?;

        if !(1..=10).contains(&self.association_words) {
            return Err(ConfigError::Invalid {
                key: "association_words".into(),
                message: "must be between 1 and 10".into(),
            });
        }
        Ok(())
    }

    /// Validate, then rewrite `default_domain` in the normalized form used
    /// for catalog lookups.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        self.validate()?;
        self.default_domain = normalize_domain(&self.default_domain);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.default_domain, "general innovation");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.association_words, 3);
    }

    #[test]
    fn test_file_then_env_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_domain = \"Product Design\"\nassociation_words = 5").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = ServerConfig::from_lookup(lookup(&[
            (CONFIG_ENV, path.as_str()),
            ("DIVERGENT_MCP_LOG_LEVEL", "debug"),
            ("DIVERGENT_MCP_ASSOCIATION_WORDS", "4"),
        ]))
        .unwrap();

        assert_eq!(config.default_domain, "product design");
        assert_eq!(config.association_words, 4);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[(CONFIG_ENV, "/nonexistent/divergent.toml")])).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "colour = \"blue\"").unwrap();
        let err = ServerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_validate_leaves_config_untouched() {
        let config = ServerConfig {
            default_domain: "  Product   Design ".into(),
            ..ServerConfig::default()
        };
        let before = config.clone();
        config.validate().unwrap();
        assert_eq!(config, before);

        let mut config = config;
        config.normalize().unwrap();
        assert_eq!(config.default_domain, "product design");
    }

    #[test]
    fn test_normalize_rejects_before_rewriting() {
        let mut config = ServerConfig {
            default_domain: "<x>".into(),
            ..ServerConfig::default()
        };
        assert!(config.normalize().is_err());
        assert_eq!(config.default_domain, "<x>");
    }

    #[test]
    fn test_invalid_overrides() {
        let err = ServerConfig::from_lookup(lookup(&[("DIVERGENT_MCP_ASSOCIATION_WORDS", "many")])).unwrap_err();
        assert!(err.to_string().contains("DIVERGENT_MCP_ASSOCIATION_WORDS"));

        let err = ServerConfig::from_lookup(lookup(&[("DIVERGENT_MCP_DEFAULT_DOMAIN", "<x>")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));

        let err = ServerConfig::from_lookup(lookup(&[("DIVERGENT_MCP_ASSOCIATION_WORDS", "0")])).unwrap_err();
        assert!(err.to_string().contains("between 1 and 10"));
    }
}
