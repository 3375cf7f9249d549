//! Skill content for nano-peaces.
//!
//! This crate provides:
//!
//! - **Data model**: the three skill layers: catalog entries
//!   ([`RegistryEntry`]), the primary `SKILL.md` document, and chunk
//!   documents, materialized together as a [`SkillSource`].
//!
//! - **Document model**: [`SkillDocument`] splits a primary document into
//!   its optional metadata header and body.
//!
//! - **Skill store**: [`SkillStore`] loads the catalog and skill sources
//!   from an explicitly provided content root.
//!
//! # Example
//!
//! ```rust,no_run
//! use nanopeaces_skills::SkillStore;
//!
//! let store = SkillStore::new("skills");
//! for entry in store.list_available_skills().unwrap() {
//!     println!("{}", entry.id);
//! }
//! let source = store.load_skill_source("shadcn-ui").unwrap();
//! println!("{} chunks", source.chunks.len());
//! ```

pub mod error;
pub mod loader;
pub mod parser;
pub mod registry;
pub mod types;

pub use error::{Result, SkillError};
pub use loader::{SKILLS_DIR_ENV, SkillStore};
pub use parser::{Frontmatter, SkillDocument, strip_metadata_header};
pub use registry::{REGISTRY_FILE, REGISTRY_VERSION, SkillRegistry};
pub use types::{CHUNKS_DIR, RegistryEntry, SkillOutput, SkillSignals, SkillSource};
