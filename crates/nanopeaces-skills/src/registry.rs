//! Skill catalog (`registry.json`).
//!
//! The catalog is the lightweight first layer of every skill: agents read
//! it to decide which skills are relevant before loading any document.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillError};
use crate::types::RegistryEntry;

/// Catalog format version written into generated registries.
pub const REGISTRY_VERSION: &str = "0.1.0";

/// File name of the catalog, both in the content store and in agent
/// output directories.
pub const REGISTRY_FILE: &str = "registry.json";

/// The skill catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRegistry {
    pub version: String,
    #[serde(default)]
    pub skills: Vec<RegistryEntry>,
}

impl SkillRegistry {
    /// A catalog with no entries.
    pub fn empty() -> Self {
        Self {
            version: REGISTRY_VERSION.to_owned(),
            skills: Vec::new(),
        }
    }

    /// Read and parse a catalog file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(SkillError::RegistryNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| SkillError::InvalidRegistry {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize with two-space indentation. Field order is fixed by the
    /// struct definitions, so output is stable for identical input.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Find an entry by id.
    pub fn get(&self, id: &str) -> Option<&RegistryEntry> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// Upsert every entry of `other` by id.
    ///
    /// Existing entries keep their position and take the incoming values;
    /// new ids are appended in `other`'s order. The version is kept.
    pub fn merge(&mut self, other: SkillRegistry) {
        for entry in other.skills {
            match self.skills.iter_mut().find(|s| s.id == entry.id) {
                Some(existing) => *existing = entry,
                None => self.skills.push(entry),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
