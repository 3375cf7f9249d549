//! Checks the skill content shipped at the workspace root.

use std::path::PathBuf;

use nanopeaces_skills::{SkillStore, strip_metadata_header};

fn bundled_store() -> SkillStore {
    SkillStore::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../skills"))
}

#[test]
fn every_catalog_entry_loads() {
    let store = bundled_store();
    let entries = store.list_available_skills().unwrap();
    assert!(!entries.is_empty());

    for entry in entries {
        let source = store.load_skill_source(&entry.id).unwrap();
        assert_eq!(source.registry, entry);
        assert!(source.chunks.keys().all(|k| k.starts_with("chunks/") && k.ends_with(".md")));

        let document = source.document();
        let header = document.header.expect("bundled skills carry a header");
        assert_eq!(header.get("name"), Some(entry.id.as_str()));
        assert!(strip_metadata_header(&source.primary_document).starts_with('#'));
    }
}

#[test]
fn chunk_keys_are_nested_paths() {
    let source = bundled_store().load_skill_source("shadcn-ui").unwrap();
    let keys: Vec<_> = source.chunks.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "chunks/components/button.md",
            "chunks/components/dialog.md",
            "chunks/installation.md",
        ]
    );
}
