//! Fixpoint expansion of templated configuration values.

use std::path::PathBuf;

use minijinja::Environment;
use minijinja::value::Value as TemplateValue;
use serde_json::Value;

use crate::{ConfigMap, RenderError};

use super::registry::{FilterRegistry, TestRegistry};

/// Default cap on whole-mapping render passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Options controlling a template expansion call.
#[derive(Debug, Clone)]
pub struct ExpandOptions {
    /// Directory of filter manifests; absent directories contribute nothing.
    pub filters_dir: Option<PathBuf>,
    /// Directory of test manifests; absent directories contribute nothing.
    pub tests_dir: Option<PathBuf>,
    /// Maximum number of whole-mapping render passes.
    pub max_iterations: usize,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            filters_dir: None,
            tests_dir: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl ExpandOptions {
    /// Options with no registries and the default iteration cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Expand templated values, loading registries from the configured
/// manifest directories.
///
/// See [`expand_with`] for the algorithm.
///
/// # Errors
///
/// Returns a [`RenderError`] when any value fails to render.
pub fn expand(config: &ConfigMap, options: &ExpandOptions) -> Result<ConfigMap, RenderError> {
    let filters = options
        .filters_dir
        .as_deref()
        .map(FilterRegistry::from_manifest_dir)
        .unwrap_or_default();
    let tests = options
        .tests_dir
        .as_deref()
        .map(TestRegistry::from_manifest_dir)
        .unwrap_or_default();
    expand_with(config, &filters, &tests, options.max_iterations)
}

/// Expand templated values against caller-supplied registries.
///
/// Each pass renders every top-level string value containing a template
/// marker, using the *previous* pass's full snapshot as the variable
/// namespace; a value therefore may reference any sibling key, including
/// ones rewritten later in the same pass. Passes repeat until a pass
/// changes nothing (a fixpoint) or `max_iterations` is reached. Multi-hop
/// references resolve one hop per pass; a genuine reference cycle is not
/// detected and simply exhausts the cap, returning the last snapshot.
///
/// Every key is re-rendered on every pass: a value can look resolved while
/// the sibling values it consumed are still changing.
///
/// # Errors
///
/// Rendering is fail-fast: the first value that fails aborts the call with
/// a [`RenderError`] instead of applying the other keys. Running out of
/// iterations is not an error.
pub fn expand_with(
    config: &ConfigMap,
    filters: &FilterRegistry,
    tests: &TestRegistry,
    max_iterations: usize,
) -> Result<ConfigMap, RenderError> {
    let mut environment = Environment::new();
    filters.apply(&mut environment);
    tests.apply(&mut environment);

    let mut snapshot = config.clone();
    for pass in 1..=max_iterations {
        let namespace = TemplateValue::from_serialize(&snapshot);
        let mut next = ConfigMap::new();
        for (key, value) in &snapshot {
            next.insert(
                key.clone(),
                render_value(&environment, key, value, &namespace)?,
            );
        }
        if next == snapshot {
            tracing::debug!(passes = pass, "template expansion reached a fixpoint");
            return Ok(next);
        }
        snapshot = next;
    }
    tracing::debug!(
        passes = max_iterations,
        "template expansion hit the iteration cap without converging"
    );
    Ok(snapshot)
}

fn render_value(
    environment: &Environment<'_>,
    key: &str,
    value: &Value,
    namespace: &TemplateValue,
) -> Result<Value, RenderError> {
    match value {
        Value::String(text) if has_template_markers(text) => {
            let rendered = environment
                .render_str(text, namespace.clone())
                .map_err(|e| RenderError::from_engine(key, e))?;
            Ok(Value::String(rendered))
        }
        other => Ok(other.clone()),
    }
}

/// Whether a string carries template expansion markers.
fn has_template_markers(text: &str) -> bool {
    text.contains("{{") || text.contains("{%")
}
