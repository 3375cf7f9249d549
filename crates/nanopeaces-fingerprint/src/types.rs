//! Fingerprint type definitions.
//!
//! Every enum serializes to the lowercase / kebab-case identifiers used in
//! the persisted `context.json` snapshot (`nextjs`, `css-modules`,
//! `app-router`, ...).

use serde::{Deserialize, Serialize};

/// Detection result for one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFingerprint {
    pub framework: Framework,

    /// UI libraries in detection order.
    pub ui_libraries: Vec<UiLibrary>,

    pub styling: Styling,

    pub language: Language,

    pub router: Router,

    /// State management libraries in detection order.
    pub state_management: Vec<StateLibrary>,

    pub form_library: Option<FormLibrary>,

    /// Recommended skill ids in rule order. Weak references: the engine
    /// never checks that these exist in any catalog.
    pub recommended_skills: Vec<String>,
}

macro_rules! string_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// The serialized identifier.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Application framework.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Nextjs,
    Vite,
    Remix,
    Astro,
    Cra,
    #[default]
    Unknown,
}

string_enum!(Framework {
    Nextjs => "nextjs",
    Vite => "vite",
    Remix => "remix",
    Astro => "astro",
    Cra => "cra",
    Unknown => "unknown",
});

/// Component library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UiLibrary {
    Shadcn,
    Carbon,
    Mantine,
    HeadlessUi,
    Daisyui,
    ArkUi,
}

string_enum!(UiLibrary {
    Shadcn => "shadcn",
    Carbon => "carbon",
    Mantine => "mantine",
    HeadlessUi => "headless-ui",
    Daisyui => "daisyui",
    ArkUi => "ark-ui",
});

/// Styling approach.
///
/// `CssModules` is part of the vocabulary but no detector produces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Styling {
    Tailwind,
    CssModules,
    StyledComponents,
    Sass,
    #[default]
    Unknown,
}

string_enum!(Styling {
    Tailwind => "tailwind",
    CssModules => "css-modules",
    StyledComponents => "styled-components",
    Sass => "sass",
    Unknown => "unknown",
});

/// Source language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Typescript,
    #[default]
    Javascript,
}

string_enum!(Language {
    Typescript => "typescript",
    Javascript => "javascript",
});

/// Routing solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Router {
    AppRouter,
    PagesRouter,
    ReactRouter,
    TanstackRouter,
    #[default]
    Unknown,
}

string_enum!(Router {
    AppRouter => "app-router",
    PagesRouter => "pages-router",
    ReactRouter => "react-router",
    TanstackRouter => "tanstack-router",
    Unknown => "unknown",
});

/// State management library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateLibrary {
    Zustand,
    Jotai,
    Redux,
    Recoil,
    Valtio,
}

string_enum!(StateLibrary {
    Zustand => "zustand",
    Jotai => "jotai",
    Redux => "redux",
    Recoil => "recoil",
    Valtio => "valtio",
});

/// Form library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormLibrary {
    ReactHookForm,
    Formik,
}

string_enum!(FormLibrary {
    ReactHookForm => "react-hook-form",
    Formik => "formik",
});

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
