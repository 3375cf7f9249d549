//! Dependency manifest (`package.json`) reading.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Manifest file name at the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Errors reading the manifest. Never surfaced by the engine: callers
/// degrade to a manifest-less fingerprint.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The parts of `package.json` detection looks at.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    dev_dependencies: BTreeMap<String, serde_json::Value>,
}

/// Read the project's dependency names.
///
/// Returns `Ok(None)` when there is no manifest. Runtime and development
/// dependencies are merged into one set.
pub fn read_dependencies(project_root: &Path) -> Result<Option<DependencySet>, ManifestError> {
    let path = project_root.join(MANIFEST_FILE);
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ManifestError::Io {
        path: path.clone(),
        source,
    })?;
    let manifest: PackageManifest =
        serde_json::from_str(&content).map_err(|source| ManifestError::Parse { path, source })?;

    let names = manifest
        .dependencies
        .into_keys()
        .chain(manifest.dev_dependencies.into_keys())
        .collect();
    Ok(Some(DependencySet { names }))
}

/// Declared package names, runtime and development merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    names: BTreeSet<String>,
}

impl DependencySet {
    /// Build a set from package names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a declared package matches `target`.
    ///
    /// A name matches when it equals `target` or starts with `target`
    /// minus any trailing `*`. This is a plain prefix test, so `next` also
    /// matches `next-auth` and `vite` matches `vitest`.
    pub fn has(&self, target: &str) -> bool {
        let prefix = target.trim_end_matches('*');
        self.names
            .iter()
            .any(|name| name == target || name.starts_with(prefix))
    }

    /// Whether any of `targets` matches.
    pub fn has_any(&self, targets: &[&str]) -> bool {
        targets.iter().any(|t| self.has(t))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
