//! Antigravity adapter: writes skills to the `.agent/skills/` tree.
//!
//! Antigravity reads `registry.json` first, loads `SKILL.md` when a skill
//! matches, and pulls chunks on demand, so every layer stays a separate
//! file.

use nanopeaces_skills::{SkillOutput, SkillSource};

use crate::traits::{AgentType, SkillAdapter};
use crate::tree::mirror_skill_tree;

const OUTPUT_DIR: &str = ".agent/skills";

/// Adapter for the Antigravity agent.
#[derive(Debug, Default, Clone, Copy)]
pub struct AntigravityAdapter;

impl SkillAdapter for AntigravityAdapter {
    fn agent(&self) -> AgentType {
        AgentType::Antigravity
    }

    fn output_dir(&self) -> &'static str {
        OUTPUT_DIR
    }

    fn transform(&self, source: &SkillSource) -> Vec<SkillOutput> {
        mirror_skill_tree(OUTPUT_DIR, source)
    }

    fn install_instructions(&self) -> &'static str {
        "✓ Skills installed to .agent/skills/\n\
         \n\
         Antigravity will automatically detect and load these skills.\n\
         The agent reads registry.json first, then loads SKILL.md on match.\n\
         Deep chunks are loaded on-demand based on the Context Router table."
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_source;

    #[test]
    fn transforms_to_directory_tree() {
        let outputs = AntigravityAdapter.transform(&sample_source());
        let paths: Vec<_> = outputs.iter().map(|o| o.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                ".agent/skills/shadcn-ui/SKILL.md",
                ".agent/skills/shadcn-ui/chunks/components/button.md",
                ".agent/skills/shadcn-ui/chunks/installation.md",
                ".agent/skills/registry.json",
            ]
        );
    }

    #[test]
    fn preserves_primary_document_with_header() {
        let source = sample_source();
        let outputs = AntigravityAdapter.transform(&source);
        assert_eq!(outputs[0].content, source.primary_document);
        assert!(outputs[0].content.contains("name: shadcn-ui"));
    }

    #[test]
    fn registry_snapshot_has_single_entry() {
        let outputs = AntigravityAdapter.transform(&sample_source());
        let registry = outputs.last().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&registry.content).unwrap();
        assert_eq!(parsed["version"], "0.1.0");
        assert_eq!(parsed["skills"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["skills"][0]["id"], "shadcn-ui");
        assert_eq!(parsed["skills"][0]["skillPath"], "shadcn-ui/SKILL.md");
        assert_eq!(parsed["skills"][0]["priority"], 1);
    }

    #[test]
    fn registry_snapshot_field_order() {
        let outputs = AntigravityAdapter.transform(&sample_source());
        let content = &outputs.last().unwrap().content;
        let pos = |key: &str| content.find(&format!("\"{key}\"")).unwrap();
        assert!(pos("id") < pos("description"));
        assert!(pos("description") < pos("skillPath"));
        assert!(pos("skillPath") < pos("signals"));
        assert!(pos("signals") < pos("priority"));
    }

    #[test]
    fn registry_skill_path_is_synthesized() {
        let mut source = sample_source();
        source.registry.skill_path = "somewhere/else/SKILL.md".into();
        let outputs = AntigravityAdapter.transform(&source);
        assert!(outputs.last().unwrap().content.contains("\"shadcn-ui/SKILL.md\""));
        assert!(!outputs.last().unwrap().content.contains("somewhere/else"));
    }

    #[test]
    fn registry_omits_missing_description() {
        let mut source = sample_source();
        source.registry.description = None;
        let outputs = AntigravityAdapter.transform(&source);
        assert!(!outputs.last().unwrap().content.contains("description"));
    }
}
