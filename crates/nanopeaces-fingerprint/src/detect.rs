//! Stack detectors and the fingerprint entry point.
//!
//! Each detector is an independent check over the merged dependency set
//! and a few well-known paths at the project root. Where a field holds a
//! single value, the first matching rule in table order wins.

use std::path::Path;

use crate::manifest::{DependencySet, read_dependencies};
use crate::recommend::recommend_skills;
use crate::types::{
    FormLibrary, Framework, Language, ProjectFingerprint, Router, StateLibrary, Styling, UiLibrary,
};

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// Framework rules, highest priority first.
const FRAMEWORK_RULES: &[(Framework, &[&str])] = &[
    (Framework::Nextjs, &["next"]),
    (Framework::Astro, &["astro"]),
    (Framework::Remix, &["@remix-run/react", "@remix-run/node"]),
    (Framework::Vite, &["vite"]),
    (Framework::Cra, &["react-scripts"]),
];

/// Packages that, together with Tailwind, indicate shadcn/ui.
const RADIX_PACKAGES: &[&str] = &["radix-ui", "@radix-ui/react-slot", "@radix-ui/react-dialog"];

/// Marker file written by the shadcn/ui CLI.
const SHADCN_CONFIG_FILE: &str = "components.json";

/// UI libraries detected by a single package.
const UI_LIBRARY_RULES: &[(UiLibrary, &str)] = &[
    (UiLibrary::Carbon, "@carbon/react"),
    (UiLibrary::Mantine, "@mantine/core"),
    (UiLibrary::HeadlessUi, "@headlessui/react"),
    (UiLibrary::Daisyui, "daisyui"),
    (UiLibrary::ArkUi, "@ark-ui/react"),
];

const TAILWIND_PACKAGE: &str = "tailwindcss";

/// Styling rules, highest priority first.
const STYLING_RULES: &[(Styling, &[&str])] = &[
    (Styling::Tailwind, &[TAILWIND_PACKAGE]),
    (
        Styling::StyledComponents,
        &["styled-components", "@emotion/styled"],
    ),
    (Styling::Sass, &["sass", "node-sass"]),
];

const TYPESCRIPT_CONFIG_FILE: &str = "tsconfig.json";

const NEXT_PACKAGE: &str = "next";

/// Roots searched for Next.js route directories.
const NEXT_SOURCE_ROOTS: &[&str] = &["", "src"];

/// Router rules for projects without Next.js, highest priority first.
const ROUTER_RULES: &[(Router, &[&str])] = &[
    (Router::TanstackRouter, &["@tanstack/react-router"]),
    (Router::ReactRouter, &["react-router", "react-router-dom"]),
];

/// State management rules, all collected.
const STATE_RULES: &[(StateLibrary, &[&str])] = &[
    (StateLibrary::Zustand, &["zustand"]),
    (StateLibrary::Jotai, &["jotai"]),
    (StateLibrary::Redux, &["@reduxjs/toolkit", "redux"]),
    (StateLibrary::Recoil, &["recoil"]),
    (StateLibrary::Valtio, &["valtio"]),
];

/// Form rules, highest priority first.
const FORM_RULES: &[(FormLibrary, &str)] = &[
    (FormLibrary::ReactHookForm, "react-hook-form"),
    (FormLibrary::Formik, "formik"),
];

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Fingerprint the project at `project_root`.
///
/// Never fails. Without a readable manifest every field takes its default
/// except `language`, which only depends on the TypeScript config file.
pub fn create_fingerprint(project_root: &Path) -> ProjectFingerprint {
    let deps = match read_dependencies(project_root) {
        Ok(Some(deps)) => deps,
        Ok(None) => {
            tracing::debug!(root = %project_root.display(), "no dependency manifest");
            return manifestless_fingerprint(project_root);
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable dependency manifest");
            return manifestless_fingerprint(project_root);
        }
    };

    let mut fingerprint = ProjectFingerprint {
        framework: detect_framework(&deps),
        ui_libraries: detect_ui_libraries(&deps, project_root),
        styling: detect_styling(&deps),
        language: detect_language(project_root),
        router: detect_router(&deps, project_root),
        state_management: detect_state_management(&deps),
        form_library: detect_form_library(&deps),
        recommended_skills: Vec::new(),
    };
    fingerprint.recommended_skills = recommend_skills(&fingerprint);

    tracing::debug!(
        dependencies = deps.len(),
        framework = %fingerprint.framework,
        styling = %fingerprint.styling,
        language = %fingerprint.language,
        router = %fingerprint.router,
        ui_libraries = ?fingerprint.ui_libraries,
        recommended = ?fingerprint.recommended_skills,
        "project fingerprinted"
    );

    fingerprint
}

fn manifestless_fingerprint(project_root: &Path) -> ProjectFingerprint {
    ProjectFingerprint {
        language: detect_language(project_root),
        ..ProjectFingerprint::default()
    }
}

// ---------------------------------------------------------------------------
// Detectors
// ---------------------------------------------------------------------------

fn first_match<T: Copy>(deps: &DependencySet, rules: &[(T, &[&str])]) -> Option<T> {
    rules
        .iter()
        .find(|(_, packages)| deps.has_any(packages))
        .map(|(value, _)| *value)
}

fn exists(project_root: &Path, parts: &[&str]) -> bool {
    parts
        .iter()
        .fold(project_root.to_path_buf(), |path, part| path.join(part))
        .exists()
}

fn is_dir(project_root: &Path, parts: &[&str]) -> bool {
    parts
        .iter()
        .fold(project_root.to_path_buf(), |path, part| path.join(part))
        .is_dir()
}

pub(crate) fn detect_framework(deps: &DependencySet) -> Framework {
    first_match(deps, FRAMEWORK_RULES).unwrap_or_default()
}

pub(crate) fn detect_ui_libraries(deps: &DependencySet, project_root: &Path) -> Vec<UiLibrary> {
    let mut libraries = Vec::new();

    let radix_with_tailwind = deps.has_any(RADIX_PACKAGES) && deps.has(TAILWIND_PACKAGE);
    if exists(project_root, &[SHADCN_CONFIG_FILE]) || radix_with_tailwind {
        libraries.push(UiLibrary::Shadcn);
    }

    libraries.extend(
        UI_LIBRARY_RULES
            .iter()
            .filter(|(_, package)| deps.has(package))
            .map(|(library, _)| *library),
    );

    libraries
}

pub(crate) fn detect_styling(deps: &DependencySet) -> Styling {
    first_match(deps, STYLING_RULES).unwrap_or_default()
}

pub(crate) fn detect_language(project_root: &Path) -> Language {
    if exists(project_root, &[TYPESCRIPT_CONFIG_FILE]) {
        Language::Typescript
    } else {
        Language::Javascript
    }
}

pub(crate) fn detect_router(deps: &DependencySet, project_root: &Path) -> Router {
    if deps.has(NEXT_PACKAGE) {
        let has_route_dir = |dir: &str| {
            NEXT_SOURCE_ROOTS
                .iter()
                .any(|root| is_dir(project_root, &[*root, dir]))
        };
        if has_route_dir("app") {
            return Router::AppRouter;
        }
        if has_route_dir("pages") {
            return Router::PagesRouter;
        }
        // Modern Next.js defaults to the App Router.
        return Router::AppRouter;
    }

    first_match(deps, ROUTER_RULES).unwrap_or_default()
}

pub(crate) fn detect_state_management(deps: &DependencySet) -> Vec<StateLibrary> {
    STATE_RULES
        .iter()
        .filter(|(_, packages)| deps.has_any(packages))
        .map(|(library, _)| *library)
        .collect()
}

pub(crate) fn detect_form_library(deps: &DependencySet) -> Option<FormLibrary> {
    FORM_RULES
        .iter()
        .find(|(_, package)| deps.has(package))
        .map(|(library, _)| *library)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(names: &[&str]) -> DependencySet {
        DependencySet::new(names.iter().copied())
    }

    #[test]
    fn framework_priority() {
        assert_eq!(detect_framework(&deps(&["vite", "next"])), Framework::Nextjs);
        assert_eq!(detect_framework(&deps(&["vite", "astro"])), Framework::Astro);
        assert_eq!(
            detect_framework(&deps(&["@remix-run/node", "vite"])),
            Framework::Remix
        );
        assert_eq!(detect_framework(&deps(&["react-scripts"])), Framework::Cra);
        assert_eq!(detect_framework(&deps(&["react"])), Framework::Unknown);
    }

    #[test]
    fn styling_priority() {
        assert_eq!(
            detect_styling(&deps(&["sass", "tailwindcss"])),
            Styling::Tailwind
        );
        assert_eq!(
            detect_styling(&deps(&["@emotion/styled", "node-sass"])),
            Styling::StyledComponents
        );
        assert_eq!(detect_styling(&deps(&["node-sass"])), Styling::Sass);
        assert_eq!(detect_styling(&deps(&[])), Styling::Unknown);
    }

    #[test]
    fn shadcn_needs_radix_and_tailwind_without_config() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(detect_ui_libraries(&deps(&["@radix-ui/react-slot"]), tmp.path()).is_empty());
        assert!(detect_ui_libraries(&deps(&["tailwindcss"]), tmp.path()).is_empty());
        assert_eq!(
            detect_ui_libraries(&deps(&["@radix-ui/react-dialog", "tailwindcss"]), tmp.path()),
            [UiLibrary::Shadcn]
        );
    }

    #[test]
    fn ui_libraries_keep_detection_order() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("components.json"), "{}").unwrap();
        let found = detect_ui_libraries(
            &deps(&["@ark-ui/react", "daisyui", "@mantine/core", "@headlessui/react", "@carbon/react"]),
            tmp.path(),
        );
        assert_eq!(
            found,
            [
                UiLibrary::Shadcn,
                UiLibrary::Carbon,
                UiLibrary::Mantine,
                UiLibrary::HeadlessUi,
                UiLibrary::Daisyui,
                UiLibrary::ArkUi,
            ]
        );
    }

    #[test]
    fn next_router_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let next = deps(&["next"]);
        assert_eq!(detect_router(&next, tmp.path()), Router::AppRouter);

        std::fs::create_dir_all(tmp.path().join("src/pages")).unwrap();
        assert_eq!(detect_router(&next, tmp.path()), Router::PagesRouter);

        std::fs::create_dir_all(tmp.path().join("src/app")).unwrap();
        assert_eq!(detect_router(&next, tmp.path()), Router::AppRouter);
    }

    #[test]
    fn next_takes_precedence_over_router_packages() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("pages")).unwrap();
        assert_eq!(
            detect_router(&deps(&["next", "@tanstack/react-router"]), tmp.path()),
            Router::PagesRouter
        );
    }

    #[test]
    fn non_next_routers() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(
            detect_router(&deps(&["react-router-dom", "@tanstack/react-router"]), tmp.path()),
            Router::TanstackRouter
        );
        assert_eq!(
            detect_router(&deps(&["react-router-dom"]), tmp.path()),
            Router::ReactRouter
        );
        assert_eq!(detect_router(&deps(&["react"]), tmp.path()), Router::Unknown);
    }

    #[test]
    fn state_and_forms() {
        let d = deps(&["valtio", "redux", "zustand", "formik", "react-hook-form"]);
        assert_eq!(
            detect_state_management(&d),
            [StateLibrary::Zustand, StateLibrary::Redux, StateLibrary::Valtio]
        );
        assert_eq!(detect_form_library(&d), Some(FormLibrary::ReactHookForm));
        assert_eq!(detect_form_library(&deps(&["formik"])), Some(FormLibrary::Formik));
        assert_eq!(detect_form_library(&deps(&[])), None);
    }
}
