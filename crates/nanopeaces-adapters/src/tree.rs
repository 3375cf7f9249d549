//! Shared layout for adapters that keep a skill as a directory tree.
//!
//! ```text
//! {root}/registry.json
//! {root}/{skill-id}/SKILL.md
//! {root}/{skill-id}/chunks/{...}
//! ```

use nanopeaces_skills::{
    REGISTRY_FILE, REGISTRY_VERSION, RegistryEntry, SkillOutput, SkillRegistry, SkillSource,
};

/// Mirror a skill under `root`: the primary document byte-for-byte, every
/// chunk at its own key, then a single-entry catalog.
///
/// The catalog holds only the transformed skill. Accumulating entries
/// across skills is left to whoever writes the files.
pub(crate) fn mirror_skill_tree(root: &str, source: &SkillSource) -> Vec<SkillOutput> {
    let base_dir = format!("{root}/{}", source.id);
    let mut outputs = Vec::with_capacity(source.chunks.len() + 2);

    outputs.push(SkillOutput::new(
        format!("{base_dir}/SKILL.md"),
        source.primary_document.clone(),
    ));

    for (chunk_path, chunk_content) in &source.chunks {
        outputs.push(SkillOutput::new(
            format!("{base_dir}/{chunk_path}"),
            chunk_content.clone(),
        ));
    }

    outputs.push(SkillOutput::new(
        format!("{root}/{REGISTRY_FILE}"),
        registry_snapshot(source),
    ));

    tracing::debug!(
        skill = %source.id,
        root = %root,
        files = outputs.len(),
        "skill tree mirrored"
    );

    outputs
}

/// Render the catalog document for one skill.
fn registry_snapshot(source: &SkillSource) -> String {
    let registry = SkillRegistry {
        version: REGISTRY_VERSION.to_owned(),
        skills: vec![RegistryEntry {
            id: source.registry.id.clone(),
            description: source.registry.description.clone(),
            skill_path: format!("{}/SKILL.md", source.id),
            signals: source.registry.signals.clone(),
            priority: source.registry.priority,
        }],
    };

    // Plain strings and integers only, serialization cannot fail.
    serde_json::to_string_pretty(&registry).unwrap_or_default()
}
