//! Shallow, order-biased merging of configuration documents.

use crate::ConfigMap;

/// Fold an ordered sequence of top-level mappings into one.
///
/// Later documents overwrite earlier ones key-by-key. The merge is shallow:
/// a nested mapping value is replaced wholesale, never merged recursively.
/// An empty input yields an empty mapping.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strata_config::merge_documents;
///
/// let first = json!({"a": {"x": 1}, "b": 2});
/// let second = json!({"a": {"y": 2}, "c": 3});
/// let merged = merge_documents([
///     first.as_object().cloned().unwrap_or_default(),
///     second.as_object().cloned().unwrap_or_default(),
/// ]);
/// // The nested mapping under `a` is replaced, not deep-merged.
/// assert_eq!(serde_json::Value::Object(merged), json!({"a": {"y": 2}, "b": 2, "c": 3}));
/// ```
#[must_use]
pub fn merge_documents<I>(documents: I) -> ConfigMap
where
    I: IntoIterator<Item = ConfigMap>,
{
    let mut merged = ConfigMap::new();
    for document in documents {
        for (key, value) in document {
            merged.insert(key, value);
        }
    }
    tracing::debug!(keys = merged.len(), "merged configuration documents");
    merged
}
