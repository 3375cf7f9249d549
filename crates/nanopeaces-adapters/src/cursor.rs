//! Cursor adapter: writes one `.cursor/rules/{id}.mdc` rule per skill.
//!
//! Cursor activates rules by glob, so the source header is replaced with
//! a synthesized MDC header built from the catalog entry, and all chunks
//! are inlined after the body.

use nanopeaces_skills::{SkillOutput, SkillSource};

use crate::traits::{AgentType, SkillAdapter};

const OUTPUT_DIR: &str = ".cursor/rules";

/// Globs used when the catalog entry declares no file patterns.
const DEFAULT_GLOBS: &[&str] = &["**/*.tsx"];

/// Adapter for Cursor.
#[derive(Debug, Default, Clone, Copy)]
pub struct CursorAdapter;

impl CursorAdapter {
    /// Build the MDC header lines for a skill.
    fn mdc_header(source: &SkillSource) -> [String; 5] {
        let description = source
            .registry
            .description
            .clone()
            .unwrap_or_else(|| format!("{} skill", source.id));

        let patterns = &source.registry.signals.file_patterns;
        let globs = if patterns.is_empty() {
            serde_json::to_string(DEFAULT_GLOBS)
        } else {
            serde_json::to_string(patterns)
        }
        .unwrap_or_else(|_| "[]".to_owned());

        [
            "---".to_owned(),
            format!("description: {description}"),
            format!("globs: {globs}"),
            "alwaysApply: false".to_owned(),
            "---\n".to_owned(),
        ]
    }
}

impl SkillAdapter for CursorAdapter {
    fn agent(&self) -> AgentType {
        AgentType::Cursor
    }

    fn output_dir(&self) -> &'static str {
        OUTPUT_DIR
    }

    fn transform(&self, source: &SkillSource) -> Vec<SkillOutput> {
        let mut sections: Vec<String> = Self::mdc_header(source).into();
        sections.push(source.document().body.to_owned());

        for chunk_content in source.chunks.values() {
            sections.push("\n---\n".to_owned());
            sections.push(chunk_content.clone());
        }

        vec![SkillOutput::new(
            format!("{OUTPUT_DIR}/{}.mdc", source.id),
            sections.join("\n"),
        )]
    }

    fn install_instructions(&self) -> &'static str {
        "✓ Skills installed to .cursor/rules/\n\
         \n\
         Cursor will load rules automatically based on glob patterns.\n\
         Rules activate when you work on matching files."
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
