//! Adapter lookup.
//!
//! The agent set is closed, so lookup is an exhaustive match rather than a
//! runtime table: adding an [`AgentType`] variant fails to compile until it
//! has an adapter.

use crate::antigravity::AntigravityAdapter;
use crate::claude_code::ClaudeCodeAdapter;
use crate::cursor::CursorAdapter;
use crate::error::Result;
use crate::generic::GenericAdapter;
use crate::traits::{AgentType, SkillAdapter};

/// Return the adapter for an agent.
pub fn adapter_for(agent: AgentType) -> Box<dyn SkillAdapter> {
    match agent {
        AgentType::Antigravity => Box::new(AntigravityAdapter),
        AgentType::ClaudeCode => Box::new(ClaudeCodeAdapter),
        AgentType::Cursor => Box::new(CursorAdapter),
        AgentType::Generic => Box::new(GenericAdapter),
    }
}

/// Return the adapter for an agent name such as `claude-code`.
pub fn adapter_by_name(name: &str) -> Result<Box<dyn SkillAdapter>> {
    let agent: AgentType = name.parse()?;
    Ok(adapter_for(agent))
}
