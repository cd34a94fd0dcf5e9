//! Rendering an output template from the resolved configuration.

use camino::Utf8Path;
use minijinja::Environment;
use minijinja::value::Value as TemplateValue;
use strata_config::{ConfigMap, FilterRegistry, TestRegistry};

use crate::error::CliError;

/// Render `input` with the resolved configuration as namespace and write
/// the result to `output`.
///
/// The template environment is rooted at the input file's directory, so
/// templates may include siblings by relative path.
pub fn render_to_file(
    input: &Utf8Path,
    output: &Utf8Path,
    config: &ConfigMap,
    filters: &FilterRegistry,
    tests: &TestRegistry,
) -> Result<(), CliError> {
    let mut environment = Environment::new();
    environment.set_loader(minijinja::path_loader(parent_or_dot(input)));
    filters.apply(&mut environment);
    tests.apply(&mut environment);

    let file_name = input.file_name().ok_or_else(|| CliError::Io {
        path: input.to_owned(),
        source: std::io::Error::other("cannot determine template file name"),
    })?;
    let rendered = environment
        .get_template(file_name)
        .and_then(|template| template.render(TemplateValue::from_serialize(config)))
        .map_err(|e| CliError::Render {
            path: input.to_owned(),
            source: e,
        })?;

    std::fs::write(output, rendered).map_err(|e| CliError::Io {
        path: output.to_owned(),
        source: e,
    })?;
    tracing::info!(output = %output, "rendered output written");
    Ok(())
}

/// Parent directory of `path`, falling back to `"."` when the path has no
/// parent or the parent is empty.
fn parent_or_dot(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}
