//! Skill recommendation rules.

use crate::types::{ProjectFingerprint, UiLibrary};

/// Skill recommended when a project mixes component libraries.
pub const UI_SELECTOR_SKILL: &str = "ui-selector";

/// One skill per detected component library that has one.
const LIBRARY_SKILLS: &[(UiLibrary, &str)] = &[
    (UiLibrary::Shadcn, "shadcn-ui"),
    (UiLibrary::Carbon, "carbon-design"),
];

/// Derive recommended skill ids from a fingerprint's UI libraries.
///
/// Rules apply in order and append: shadcn, then Carbon, then the
/// selector skill when more than one library is present. Skill ids are
/// not checked against any catalog.
pub fn recommend_skills(fingerprint: &ProjectFingerprint) -> Vec<String> {
    let mut skills: Vec<String> = LIBRARY_SKILLS
        .iter()
        .filter(|(library, _)| fingerprint.ui_libraries.contains(library))
        .map(|(_, skill)| (*skill).to_owned())
        .collect();

    if fingerprint.ui_libraries.len() > 1 {
        skills.push(UI_SELECTOR_SKILL.to_owned());
    }

    skills
}
