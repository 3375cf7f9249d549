//! Claude Code adapter: inlines a skill into a single `CLAUDE.md`.
//!
//! Claude Code reads `CLAUDE.md` on every interaction and has no notion of
//! on-demand chunks, so the whole skill becomes one flat document with the
//! metadata header removed. Each chunk is introduced by an HTML comment
//! naming its original path.

use nanopeaces_skills::{SkillOutput, SkillSource};

use crate::traits::{AgentType, SkillAdapter};

const OUTPUT_DIR: &str = ".";
const OUTPUT_FILE: &str = "CLAUDE.md";

/// Adapter for Claude Code.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClaudeCodeAdapter;

impl SkillAdapter for ClaudeCodeAdapter {
    fn agent(&self) -> AgentType {
        AgentType::ClaudeCode
    }

    fn output_dir(&self) -> &'static str {
        OUTPUT_DIR
    }

    fn transform(&self, source: &SkillSource) -> Vec<SkillOutput> {
        let mut sections = Vec::with_capacity(2 + source.chunks.len() * 2);

        sections.push(format!("## UI Skills: {}\n", source.id));
        sections.push(source.document().body.to_owned());

        for (chunk_path, chunk_content) in &source.chunks {
            sections.push(format!("\n---\n\n<!-- {chunk_path} -->\n"));
            sections.push(chunk_content.clone());
        }

        vec![SkillOutput::new(OUTPUT_FILE, sections.join("\n"))]
    }

    fn install_instructions(&self) -> &'static str {
        "✓ Skills appended to CLAUDE.md\n\
         \n\
         Claude Code reads CLAUDE.md automatically on every interaction.\n\
         All skill content has been inlined into a single document."
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
