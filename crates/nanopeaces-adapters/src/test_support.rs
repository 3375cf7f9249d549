use std::collections::BTreeMap;

use nanopeaces_skills::{RegistryEntry, SkillSignals, SkillSource};

/// A shadcn-ui skill with a metadata header and two chunks, one nested.
pub(crate) fn sample_source() -> SkillSource {
    SkillSource {
        id: "shadcn-ui".into(),
        primary_document: [
            "---",
            "name: shadcn-ui",
            "version: 1.0.0",
            "description: Expert knowledge for shadcn/ui",
            "tags: [ui, react]",
            "---",
            "",
            "# shadcn/ui Skill",
            "",
            "Some content here.",
        ]
        .join("\n"),
        chunks: BTreeMap::from([
            (
                "chunks/installation.md".to_owned(),
                "# Installation\n\nInstall guide here.".to_owned(),
            ),
            (
                "chunks/components/button.md".to_owned(),
                "# Button\n\nButton guide here.".to_owned(),
            ),
        ]),
        registry: RegistryEntry {
            id: "shadcn-ui".into(),
            description: Some("Expert shadcn/ui knowledge".into()),
            skill_path: "shadcn-ui/SKILL.md".into(),
            signals: SkillSignals {
                dependencies: vec!["radix-ui".into(), "tailwindcss".into()],
                file_patterns: vec!["**/components/ui/**".into()],
                keywords: vec!["shadcn".into()],
                task_intent: vec!["create component".into()],
            },
            priority: 1,
        },
    }
}
