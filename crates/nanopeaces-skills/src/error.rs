//! Error types for skill loading.

use std::path::PathBuf;

/// Skill-specific errors.
#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("skill not found in registry: `{0}`")]
    NotFound(String),

    #[error("document for skill `{skill}` not found at `{path}`")]
    DocumentNotFound { skill: String, path: PathBuf },

    #[error("skill registry not found at `{0}`")]
    RegistryNotFound(PathBuf),

    #[error("invalid skill registry at `{path}`: {reason}")]
    InvalidRegistry { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to walk chunk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SkillError>;
