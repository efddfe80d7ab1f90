//! Error types for divergent_core

use std::path::PathBuf;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, CreativityError>;

#[derive(Debug, thiserror::Error)]
pub enum CreativityError {
    #[error("Invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("Unknown thinking method: {0}")]
    UnknownMethod(String),

    #[error("Unknown creativity technique: {0}")]
    UnknownTechnique(String),

    #[error("Unknown perspective type: {0}")]
    UnknownPerspective(String),

    #[error("Unknown word category: {0}")]
    UnknownCategory(String),

    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CreativityError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        CreativityError::Validation {
            field,
            message: message.into(),
        }
    }

    /// True for errors caused by caller input rather than server state.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CreativityError::Validation { .. }
                | CreativityError::UnknownMethod(_)
                | CreativityError::UnknownTechnique(_)
                | CreativityError::UnknownPerspective(_)
                | CreativityError::UnknownCategory(_)
        )
    }
}
