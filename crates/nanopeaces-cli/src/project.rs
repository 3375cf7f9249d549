//! Per-project state under `.nano-peaces/` and `.gitignore` upkeep.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nanopeaces_adapters::AgentType;
use nanopeaces_fingerprint::ProjectFingerprint;
use serde::{Deserialize, Serialize};

/// State directory at the project root.
pub const STATE_DIR: &str = ".nano-peaces";
pub const CONFIG_FILE: &str = "config.json";
pub const CONTEXT_FILE: &str = "context.json";

const GITIGNORE_FILE: &str = ".gitignore";
const GITIGNORE_HEADER: &str = "# nano-peaces config";

/// Tool version recorded in saved config.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Saved install choices, `.nano-peaces/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub agent: AgentType,
    pub skills: Vec<String>,
    pub version: String,
    #[serde(default)]
    pub auto_update: bool,
}

impl ProjectConfig {
    pub fn new(agent: AgentType, skills: Vec<String>) -> Self {
        Self {
            agent,
            skills,
            version: VERSION.to_owned(),
            auto_update: false,
        }
    }

    /// Append `ids` not already recorded, keeping first-seen order.
    pub fn add_skills<'a>(&mut self, ids: impl IntoIterator<Item = &'a String>) {
        for id in ids {
            if !self.skills.contains(id) {
                self.skills.push(id.clone());
            }
        }
    }
}

fn state_path(project_root: &Path, file: &str) -> PathBuf {
    project_root.join(STATE_DIR).join(file)
}

async fn write_state<T: Serialize>(project_root: &Path, file: &str, value: &T) -> Result<()> {
    let path = state_path(project_root, file);
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("failed to serialize {file}"))?;
    tokio::fs::create_dir_all(project_root.join(STATE_DIR))
        .await
        .with_context(|| format!("failed to create {STATE_DIR}"))?;
    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "state saved");
    Ok(())
}

/// Save the install config.
pub async fn save_config(project_root: &Path, config: &ProjectConfig) -> Result<()> {
    write_state(project_root, CONFIG_FILE, config).await
}

/// Load the install config, `None` when the project was never initialized.
pub async fn load_config(project_root: &Path) -> Result<Option<ProjectConfig>> {
    let path = state_path(project_root, CONFIG_FILE);
    if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        return Ok(None);
    }
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(Some(config))
}

/// Save the fingerprint snapshot.
pub async fn save_context(project_root: &Path, fingerprint: &ProjectFingerprint) -> Result<()> {
    write_state(project_root, CONTEXT_FILE, fingerprint).await
}

/// Make sure `.gitignore` ignores the state directory.
///
/// Appends a commented section once; agent output directories stay
/// tracked. Returns whether the file changed.
pub async fn update_gitignore(project_root: &Path) -> Result<bool> {
    let path = project_root.join(GITIGNORE_FILE);
    let content = match tokio::fs::read_to_string(&path).await {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    if content.lines().any(|line| line.trim() == STATE_DIR) {
        return Ok(false);
    }

    let mut updated = content.trim_end().to_owned();
    if !updated.is_empty() {
        updated.push_str("\n\n");
    }
    updated.push_str(&format!("{GITIGNORE_HEADER}\n{STATE_DIR}\n"));

    tokio::fs::write(&path, updated)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "gitignore updated");
    Ok(true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
