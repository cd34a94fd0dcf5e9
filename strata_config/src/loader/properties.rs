//! Decoder for `.properties` files.
//!
//! Sections become nested mappings of their key/value pairs, flattened one
//! level; values stay strings. Keys must appear under a `[section]` header.

use std::path::Path;

use serde_json::Value;

use crate::{ConfigMap, LoadError};

/// Decode INI-style properties data into a mapping of sections.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] when a key/value pair appears before any
/// section header or a non-comment line carries no `=`/`:` delimiter.
pub(super) fn decode(path: &Path, data: &str) -> Result<ConfigMap, LoadError> {
    let mut sections = ConfigMap::new();
    let mut current: Option<String> = None;

    for (index, raw_line) in data.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(name) = section_header(line) {
            sections
                .entry(name.to_owned())
                .or_insert_with(|| Value::Object(ConfigMap::new()));
            current = Some(name.to_owned());
            continue;
        }
        let Some((key, value)) = split_pair(line) else {
            return Err(LoadError::parse(
                path,
                format!("line {}: expected 'key = value', found '{line}'", index + 1),
            ));
        };
        let Some(section) = current.as_deref() else {
            return Err(LoadError::parse(
                path,
                format!("line {}: key '{key}' appears before any [section] header", index + 1),
            ));
        };
        if let Some(Value::Object(pairs)) = sections.get_mut(section) {
            pairs.insert(key.to_owned(), Value::String(value.to_owned()));
        }
    }

    Ok(sections)
}

/// Extract the section name from a `[section]` header line.
fn section_header(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    let name = inner.trim();
    (!name.is_empty()).then_some(name)
}

/// Split a `key = value` or `key: value` pair, trimming both halves.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let delimiter = line.find(['=', ':'])?;
    let (key, rest) = line.split_at(delimiter);
    let value = rest.get(1..).unwrap_or_default();
    let trimmed_key = key.trim();
    (!trimmed_key.is_empty()).then_some((trimmed_key, value.trim()))
}
