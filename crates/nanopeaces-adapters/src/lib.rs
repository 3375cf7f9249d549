//! Agent adapters for nano-peaces: Antigravity, Claude Code, Cursor, and
//! a generic fallback.
//!
//! Each adapter implements the [`SkillAdapter`] trait defined in
//! [`traits`], converting one canonical skill into the files its agent
//! expects:
//!
//! | Agent | Output |
//! |---|---|
//! | antigravity | `.agent/skills/{id}/SKILL.md`, chunks, `registry.json` |
//! | generic | `.ai/skills/{id}/SKILL.md`, chunks, `registry.json` |
//! | claude-code | `CLAUDE.md` with every chunk inlined |
//! | cursor | `.cursor/rules/{id}.mdc` with a synthesized MDC header |

pub mod antigravity;
pub mod claude_code;
pub mod cursor;
pub mod error;
pub mod generic;
pub mod registry;
pub mod traits;
mod tree;

#[cfg(test)]
mod test_support;

pub use antigravity::AntigravityAdapter;
pub use claude_code::ClaudeCodeAdapter;
pub use cursor::CursorAdapter;
pub use error::{AdapterError, Result};
pub use generic::GenericAdapter;
pub use registry::{adapter_by_name, adapter_for};
pub use traits::{AgentType, SkillAdapter};
