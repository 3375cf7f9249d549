//! Core adapter trait and supporting types.
//!
//! Every target agent implements the [`SkillAdapter`] trait, turning one
//! canonical [`SkillSource`] into the set of files that agent expects.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use nanopeaces_skills::{SkillOutput, SkillSource};

use crate::error::AdapterError;

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// The AI coding agents skills can be installed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentType {
    /// Antigravity: `.agent/skills/` tree with a catalog.
    Antigravity,
    /// Claude Code: everything inlined into `CLAUDE.md`.
    ClaudeCode,
    /// Cursor: one `.mdc` rule per skill.
    Cursor,
    /// Any other agent: `.ai/skills/` tree with a catalog.
    Generic,
}

impl AgentType {
    /// Every supported agent, in display order.
    pub const ALL: [AgentType; 4] = [
        Self::Antigravity,
        Self::ClaudeCode,
        Self::Cursor,
        Self::Generic,
    ];

    /// The identifier used on the command line and in saved config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Antigravity => "antigravity",
            Self::ClaudeCode => "claude-code",
            Self::Cursor => "cursor",
            Self::Generic => "generic",
        }
    }
}

impl std::fmt::Display for AgentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentType {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|agent| agent.as_str() == s)
            .ok_or_else(|| AdapterError::UnknownAgent(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Core trait
// ---------------------------------------------------------------------------

/// The skill transformation interface.
///
/// Implementations are pure: [`SkillAdapter::transform`] performs no I/O
/// and returns byte-identical output for identical input. Writing the
/// returned files is the caller's job.
pub trait SkillAdapter: Send + Sync {
    /// Return the agent this adapter targets.
    fn agent(&self) -> AgentType;

    /// Return the project-relative directory this adapter writes under.
    fn output_dir(&self) -> &'static str;

    /// Resolve [`SkillAdapter::output_dir`] against a project root.
    ///
    /// Does not touch the filesystem.
    fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(self.output_dir())
    }

    /// Convert one skill into the files this agent expects.
    fn transform(&self, source: &SkillSource) -> Vec<SkillOutput>;

    /// Human-readable text describing where output landed and how the
    /// agent picks it up.
    fn install_instructions(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
