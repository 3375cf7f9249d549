//! Project fingerprinting for nano-peaces.
//!
//! Inspects a JavaScript/TypeScript project root (the `package.json`
//! dependency tables plus a handful of marker files and directories) and
//! produces a [`ProjectFingerprint`]: framework, UI libraries, styling,
//! language, router, state management, form library, and the skill ids
//! worth installing.
//!
//! Detection is read-only and never fails. A missing or malformed
//! manifest yields the default fingerprint.
//!
//! ```rust,no_run
//! let fingerprint = nanopeaces_fingerprint::create_fingerprint(std::path::Path::new("."));
//! println!("{} / {}", fingerprint.framework, fingerprint.styling);
//! ```

pub mod detect;
pub mod manifest;
pub mod recommend;
pub mod types;

pub use detect::create_fingerprint;
pub use manifest::{DependencySet, MANIFEST_FILE, ManifestError, read_dependencies};
pub use recommend::{UI_SELECTOR_SKILL, recommend_skills};
pub use types::{
    FormLibrary, Framework, Language, ProjectFingerprint, Router, StateLibrary, Styling, UiLibrary,
};
