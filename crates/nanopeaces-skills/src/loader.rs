//! Skill loader: reads skill sources from a content store on disk.
//!
//! The content root holds the catalog and one directory per skill:
//!
//! ```text
//! <root>/registry.json
//! <root>/<skill-id>/SKILL.md
//! <root>/<skill-id>/chunks/**/*.md
//! ```
//!
//! The root is always injected by the caller; the loader never searches
//! for it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SkillError};
use crate::registry::{REGISTRY_FILE, SkillRegistry};
use crate::types::{CHUNKS_DIR, RegistryEntry, SkillSource};

/// Environment variable naming the content root. Read by the binary.
pub const SKILLS_DIR_ENV: &str = "NANO_PEACES_SKILLS_DIR";

/// Read-only access to a skill content store.
#[derive(Debug, Clone)]
pub struct SkillStore {
    root: PathBuf,
}

impl SkillStore {
    /// Create a store rooted at `root`. Nothing is read until a load call.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Return the content root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the catalog.
    pub fn load_registry(&self) -> Result<SkillRegistry> {
        let registry = SkillRegistry::from_file(&self.root.join(REGISTRY_FILE))?;
        tracing::debug!(
            root = %self.root.display(),
            version = %registry.version,
            skills = registry.skills.len(),
            "skill registry loaded"
        );
        Ok(registry)
    }

    /// Return every catalog entry, unfiltered.
    pub fn list_available_skills(&self) -> Result<Vec<RegistryEntry>> {
        Ok(self.load_registry()?.skills)
    }

    /// Load the primary document and all chunks of a skill.
    pub fn load_skill_source(&self, skill_id: &str) -> Result<SkillSource> {
        let registry = self.load_registry()?;
        let entry = registry
            .skills
            .into_iter()
            .find(|s| s.id == skill_id)
            .ok_or_else(|| SkillError::NotFound(skill_id.to_owned()))?;

        let primary_path = self.root.join(&entry.skill_path);
        if !primary_path.is_file() {
            return Err(SkillError::DocumentNotFound {
                skill: skill_id.to_owned(),
                path: primary_path,
            });
        }
        let primary_document = std::fs::read_to_string(&primary_path)?;

        let chunks = load_chunks(&self.root.join(skill_id).join(CHUNKS_DIR))?;

        tracing::info!(
            skill = %skill_id,
            chunks = chunks.len(),
            "skill source loaded"
        );

        Ok(SkillSource {
            id: skill_id.to_owned(),
            primary_document,
            chunks,
            registry: entry,
        })
    }
}

/// Collect every markdown file under `chunks_dir`, recursively.
///
/// Keys are `chunks/<relative path>` with `/` separators. A missing
/// directory yields no chunks.
fn load_chunks(chunks_dir: &Path) -> Result<BTreeMap<String, String>> {
    let mut chunks = BTreeMap::new();

    if !chunks_dir.is_dir() {
        tracing::trace!(path = %chunks_dir.display(), "no chunks directory");
        return Ok(chunks);
    }

    for entry in WalkDir::new(chunks_dir)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(".md") {
            tracing::trace!(path = %entry.path().display(), "skipping non-markdown chunk");
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(chunks_dir)
            .unwrap_or(entry.path());
        let key = std::iter::once(CHUNKS_DIR.to_owned())
            .chain(
                relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned()),
            )
            .collect::<Vec<_>>()
            .join("/");

        let content = std::fs::read_to_string(entry.path())?;
        tracing::trace!(key = %key, bytes = content.len(), "chunk loaded");
        chunks.insert(key, content);
    }

    Ok(chunks)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
