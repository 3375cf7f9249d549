//! Batching adapter outputs before they hit the disk.
//!
//! Adapters are pure and know nothing about each other, so a batch of
//! skills can produce the same path more than once. The plan resolves
//! those collisions:
//!
//! - catalog files (`registry.json`) are merged by skill id, together with
//!   any catalog already on disk;
//! - any other repeated path is concatenated in install order, separated by
//!   a blank line.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nanopeaces_skills::{REGISTRY_FILE, SkillOutput, SkillRegistry};

#[derive(Debug)]
enum PlannedContent {
    Text(String),
    Registry(SkillRegistry),
}

#[derive(Debug)]
struct PlannedFile {
    path: String,
    content: PlannedContent,
}

/// Ordered set of files to write, keyed by logical path.
#[derive(Debug, Default)]
pub struct OutputPlan {
    files: Vec<PlannedFile>,
    index: HashMap<String, usize>,
}

impl OutputPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one transform's outputs into the plan.
    pub fn add(&mut self, outputs: Vec<SkillOutput>) {
        for output in outputs {
            let content = if is_registry_path(&output.path) {
                match SkillRegistry::from_json(&output.content) {
                    Ok(registry) => PlannedContent::Registry(registry),
                    Err(e) => {
                        tracing::warn!(path = %output.path, error = %e, "catalog output is not valid JSON");
                        PlannedContent::Text(output.content)
                    }
                }
            } else {
                PlannedContent::Text(output.content)
            };
            self.insert(output.path, content);
        }
    }

    fn insert(&mut self, path: String, content: PlannedContent) {
        let Some(&slot) = self.index.get(&path) else {
            self.index.insert(path.clone(), self.files.len());
            self.files.push(PlannedFile { path, content });
            return;
        };

        let existing = &mut self.files[slot].content;
        match (existing, content) {
            (PlannedContent::Registry(base), PlannedContent::Registry(incoming)) => {
                base.merge(incoming);
            }
            (PlannedContent::Text(base), PlannedContent::Text(incoming)) => {
                base.push_str("\n\n");
                base.push_str(&incoming);
            }
            (existing, incoming) => {
                tracing::warn!(path = %path, "replacing planned output of a different kind");
                *existing = incoming;
            }
        }
    }

    /// Write every planned file under `project_root`, in plan order.
    ///
    /// Parent directories are created as needed. Catalogs are merged into
    /// the catalog already on disk when it parses; an unreadable one is
    /// replaced. Returns the paths written.
    pub async fn write(self, project_root: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.files.len());

        for file in self.files {
            let path = resolve(project_root, &file.path);
            let content = match file.content {
                PlannedContent::Text(text) => text,
                PlannedContent::Registry(registry) => {
                    let merged = merge_with_disk(&path, registry).await;
                    merged
                        .to_json_pretty()
                        .with_context(|| format!("failed to render {}", file.path))?
                }
            };

            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            tokio::fs::write(&path, content)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;

            tracing::debug!(path = %path.display(), "output written");
            written.push(path);
        }

        Ok(written)
    }
}

fn is_registry_path(path: &str) -> bool {
    path.rsplit('/').next() == Some(REGISTRY_FILE)
}

/// Translate a forward-slash logical path to an OS path under `root`.
fn resolve(root: &Path, logical: &str) -> PathBuf {
    logical
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .fold(root.to_path_buf(), |path, part| path.join(part))
}

async fn merge_with_disk(path: &Path, planned: SkillRegistry) -> SkillRegistry {
    let Ok(existing) = tokio::fs::read_to_string(path).await else {
        return planned;
    };
    match SkillRegistry::from_json(&existing) {
        Ok(mut on_disk) => {
            on_disk.merge(planned);
            on_disk
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "replacing unreadable catalog");
            planned
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
