//! Manifest discovery for filter and test registries.
//!
//! A registry directory holds TOML manifests mapping exposed names to
//! builtin callable identifiers, e.g.
//!
//! ```toml
//! uppercase = "uppercase"
//! shout = "uppercase"
//! ```
//!
//! Discovery is deliberately total: an absent or unreadable directory, a
//! malformed manifest, or a non-string entry contributes nothing beyond a
//! warning. Filenames are sorted so registration order (and therefore the
//! collision tie-break) is deterministic across platforms.

use std::path::{Path, PathBuf};

/// Which registry a manifest directory feeds; used in log messages only.
#[derive(Debug, Clone, Copy)]
pub(super) enum ManifestKind {
    /// Filter manifests.
    Filter,
    /// Test manifests.
    Test,
}

impl ManifestKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::Test => "test",
        }
    }
}

/// One name-to-builtin binding read from a manifest file.
#[derive(Debug, Clone)]
pub(super) struct ManifestEntry {
    /// Name the callable is exposed under inside templates.
    pub(super) name: String,
    /// Identifier of the builtin callable backing the name.
    pub(super) builtin: String,
    /// Manifest file the binding came from.
    pub(super) manifest: PathBuf,
}

/// Read every manifest in `dir`, in sorted filename order.
///
/// Entries whose exposed name starts with an underscore are private and
/// skipped. Later entries for the same name are returned after earlier
/// ones, so "last manifest wins" falls out of plain registry insertion.
pub(super) fn manifest_entries(dir: &Path, kind: ManifestKind) -> Vec<ManifestEntry> {
    let mut entries = Vec::new();
    for path in manifest_paths(dir, kind) {
        collect_entries(&path, kind, &mut entries);
    }
    entries
}

fn manifest_paths(dir: &Path, kind: ManifestKind) -> Vec<PathBuf> {
    let Ok(listing) = std::fs::read_dir(dir) else {
        tracing::debug!(
            dir = %dir.display(),
            kind = kind.as_str(),
            "manifest directory absent or unreadable; registering nothing"
        );
        return Vec::new();
    };
    let mut paths: Vec<PathBuf> = listing
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_toml_extension(path))
        .collect();
    paths.sort();
    paths
}

fn has_toml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"))
}

fn collect_entries(path: &Path, kind: ManifestKind, entries: &mut Vec<ManifestEntry>) {
    let Ok(data) = std::fs::read_to_string(path) else {
        tracing::warn!(manifest = %path.display(), "skipping unreadable manifest");
        return;
    };
    let table: toml::Table = match toml::from_str(&data) {
        Ok(table) => table,
        Err(error) => {
            tracing::warn!(
                manifest = %path.display(),
                %error,
                "skipping malformed manifest"
            );
            return;
        }
    };
    for (name, value) in table {
        if name.starts_with('_') {
            tracing::debug!(
                name = %name,
                manifest = %path.display(),
                "skipping private manifest entry"
            );
            continue;
        }
        match value {
            toml::Value::String(builtin) => entries.push(ManifestEntry {
                name,
                builtin,
                manifest: path.to_path_buf(),
            }),
            other => tracing::warn!(
                name = %name,
                manifest = %path.display(),
                kind = kind.as_str(),
                "skipping manifest entry whose value is not a string: {other}"
            ),
        }
    }
}
