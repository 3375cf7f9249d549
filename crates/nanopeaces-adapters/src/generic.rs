//! Generic adapter: writes skills to the `.ai/skills/` tree.
//!
//! Same layout as the Antigravity adapter under a neutral directory, for
//! agents without a dedicated adapter.

use nanopeaces_skills::{SkillOutput, SkillSource};

use crate::traits::{AgentType, SkillAdapter};
use crate::tree::mirror_skill_tree;

const OUTPUT_DIR: &str = ".ai/skills";

/// Fallback adapter for any agent that can follow a catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericAdapter;

impl SkillAdapter for GenericAdapter {
    fn agent(&self) -> AgentType {
        AgentType::Generic
    }

    fn output_dir(&self) -> &'static str {
        OUTPUT_DIR
    }

    fn transform(&self, source: &SkillSource) -> Vec<SkillOutput> {
        mirror_skill_tree(OUTPUT_DIR, source)
    }

    fn install_instructions(&self) -> &'static str {
        "✓ Skills installed to .ai/skills/\n\
         \n\
         Point your AI agent to .ai/skills/registry.json to discover skills.\n\
         Chunks are loaded on-demand based on the Context Router in SKILL.md."
    }
}
