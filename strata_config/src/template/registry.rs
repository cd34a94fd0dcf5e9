//! Named filter and test registries applied to the template engine.
//!
//! A registry is the narrow boundary behind which callables are discovered:
//! the engine only ever sees "name → callable", never where the name came
//! from. Registries are built fresh per expansion call from manifest
//! directories (see the module docs on [`FilterRegistry::from_manifest_dir`])
//! or assembled in code by the host.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use minijinja::Environment;
use minijinja::value::Value as TemplateValue;

use super::builtins;
use super::discovery::{self, ManifestKind};

/// A named template filter: transforms one template value into another.
pub type FilterFn =
    Arc<dyn Fn(TemplateValue) -> Result<TemplateValue, minijinja::Error> + Send + Sync>;

/// A named template test: a boolean predicate over one template value.
pub type TestFn = Arc<dyn Fn(TemplateValue) -> Result<bool, minijinja::Error> + Send + Sync>;

/// Registry of named filter functions.
#[derive(Default, Clone)]
pub struct FilterRegistry {
    entries: BTreeMap<String, FilterFn>,
}

impl FilterRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the TOML manifests in `dir`.
    ///
    /// Manifests map an exposed name to a builtin callable identifier.
    /// Files are visited in lexicographically sorted filename order and a
    /// later manifest shadows an earlier one on name collision. Names with
    /// a leading underscore are never registered. An absent or unreadable
    /// directory contributes nothing.
    #[must_use]
    pub fn from_manifest_dir(dir: &Path) -> Self {
        let mut registry = Self::new();
        for entry in discovery::manifest_entries(dir, ManifestKind::Filter) {
            match builtins::filter(&entry.builtin) {
                Some(callable) => registry.insert(entry.name, callable),
                None => tracing::warn!(
                    name = %entry.name,
                    builtin = %entry.builtin,
                    manifest = %entry.manifest.display(),
                    "skipping filter manifest entry with unknown builtin"
                ),
            }
        }
        registry
    }

    /// Register `callable` under `name`, replacing any existing entry.
    pub fn insert(&mut self, name: impl Into<String>, callable: FilterFn) {
        let name = name.into();
        if self.entries.insert(name.clone(), callable).is_some() {
            tracing::debug!(name = %name, "filter registration shadowed an earlier entry");
        }
    }

    /// Number of registered filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Add every registered filter to a template environment.
    pub fn apply(&self, environment: &mut Environment<'_>) {
        for (name, callable) in &self.entries {
            let callable = Arc::clone(callable);
            environment.add_filter(name.clone(), move |value: TemplateValue| callable(value));
        }
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Registry of named test predicates.
#[derive(Default, Clone)]
pub struct TestRegistry {
    entries: BTreeMap<String, TestFn>,
}

impl TestRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the TOML manifests in `dir`.
    ///
    /// Discovery rules match [`FilterRegistry::from_manifest_dir`].
    #[must_use]
    pub fn from_manifest_dir(dir: &Path) -> Self {
        let mut registry = Self::new();
        for entry in discovery::manifest_entries(dir, ManifestKind::Test) {
            match builtins::test(&entry.builtin) {
                Some(callable) => registry.insert(entry.name, callable),
                None => tracing::warn!(
                    name = %entry.name,
                    builtin = %entry.builtin,
                    manifest = %entry.manifest.display(),
                    "skipping test manifest entry with unknown builtin"
                ),
            }
        }
        registry
    }

    /// Register `callable` under `name`, replacing any existing entry.
    pub fn insert(&mut self, name: impl Into<String>, callable: TestFn) {
        let name = name.into();
        if self.entries.insert(name.clone(), callable).is_some() {
            tracing::debug!(name = %name, "test registration shadowed an earlier entry");
        }
    }

    /// Number of registered tests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no tests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Add every registered test to a template environment.
    pub fn apply(&self, environment: &mut Environment<'_>) {
        for (name, callable) in &self.entries {
            let callable = Arc::clone(callable);
            environment.add_test(name.clone(), move |value: TemplateValue| callable(value));
        }
    }
}

impl fmt::Debug for TestRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestRegistry")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
