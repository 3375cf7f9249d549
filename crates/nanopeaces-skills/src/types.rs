//! Skill type definitions.
//!
//! A skill is delivered in three layers:
//!
//! 1. a [`RegistryEntry`] in the catalog (`registry.json`), read first to
//!    decide whether the skill is relevant at all,
//! 2. a primary document (`SKILL.md`) with an optional metadata header,
//! 3. supplementary chunk documents under the skill's `chunks/` directory,
//!    loaded on demand by the consuming agent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::parser::SkillDocument;

/// Prefix every chunk key starts with.
pub const CHUNKS_DIR: &str = "chunks";

/// One row of the skill catalog.
///
/// Field order is the serialization order of generated registries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    /// Unique skill identifier (e.g. `shadcn-ui`).
    pub id: String,

    /// Short human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Path of the primary document, relative to the content root.
    pub skill_path: String,

    /// Matching metadata.
    #[serde(default)]
    pub signals: SkillSignals,

    /// Display / ranking hint. No ordering contract is enforced.
    #[serde(default)]
    pub priority: i64,
}

/// Signals describing when a skill is relevant.
///
/// Informational for now: recommendation is driven by the fingerprint
/// engine's own rules, not by a generic matcher over these lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSignals {
    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default)]
    pub file_patterns: Vec<String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub task_intent: Vec<String>,
}

/// The fully materialized canonical form of one skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSource {
    /// Matches [`RegistryEntry::id`].
    pub id: String,

    /// The primary document, verbatim (metadata header included).
    pub primary_document: String,

    /// Chunk documents keyed by `chunks/<relative path>`, forward-slash
    /// separated. Sorted so iteration order is stable.
    pub chunks: BTreeMap<String, String>,

    /// The catalog entry this source was resolved from.
    pub registry: RegistryEntry,
}

impl SkillSource {
    /// Parse the primary document into header and body.
    pub fn document(&self) -> SkillDocument<'_> {
        SkillDocument::parse(&self.primary_document)
    }
}

/// One file an adapter wants written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillOutput {
    /// Project-root-relative logical path with `/` separators.
    pub path: String,

    /// Full file content.
    pub content: String,
}

impl SkillOutput {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
