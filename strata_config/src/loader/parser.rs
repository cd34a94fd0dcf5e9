//! Format-specific decoding for configuration documents.

use std::path::Path;

use serde_json::Value;

use crate::{ConfigMap, LoadError};

use super::properties;

/// Decode configuration data according to the file extension.
///
/// The extension is lowercased before dispatch, so `CONFIG.YAML` and
/// `config.yaml` behave identically.
///
/// # Errors
///
/// Returns [`LoadError::UnsupportedFormat`] for an unrecognised extension
/// and [`LoadError::Parse`] when decoding fails or the document's top level
/// is not a mapping.
pub(super) fn decode_by_extension(path: &Path, data: &str) -> Result<ConfigMap, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("yaml" | "yml") => {
            let value: Value =
                serde_yaml::from_str(data).map_err(|e| LoadError::parse(path, e))?;
            require_mapping(path, value)
        }
        Some("json") => {
            let value: Value =
                serde_json::from_str(data).map_err(|e| LoadError::parse(path, e))?;
            require_mapping(path, value)
        }
        Some("toml") => {
            let table: toml::Value =
                toml::from_str(data).map_err(|e| LoadError::parse(path, e))?;
            let value = serde_json::to_value(table).map_err(|e| LoadError::parse(path, e))?;
            require_mapping(path, value)
        }
        Some("properties") => properties::decode(path, data),
        other => Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: other.unwrap_or_default().to_owned(),
        }),
    }
}

/// Insist that a decoded document is a mapping at the top level.
fn require_mapping(path: &Path, value: Value) -> Result<ConfigMap, LoadError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(LoadError::parse(
            path,
            format!(
                "top level must be a mapping, found {}",
                type_name_of(&other)
            ),
        )),
    }
}

fn type_name_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
