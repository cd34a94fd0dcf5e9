//! Environment-variable substitution over configuration mappings.
//!
//! Rewrites string values of the form `${NAME}` or `${NAME:default}` using
//! the process environment. Only whole-string matches are substituted;
//! occurrences embedded in a longer string are left untouched.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::ConfigMap;

/// Default token that maps to an absent value rather than a literal string.
const NULL_DEFAULT: &str = "null";

#[expect(clippy::expect_used, reason = "the pattern is a static literal")]
static SUBSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$\{(\w+)(?::\s*(.*))?\}$").expect("substitution pattern must compile")
});

/// Resolve environment-variable placeholders throughout a mapping.
///
/// The walk is total and structure-preserving: it recurses into nested
/// mappings and sequences, visits every value and rebuilds a new container
/// of the same shape. Non-string values pass through unchanged. A set
/// variable wins over the default; an unset variable falls back to the
/// default, or to null when no default is given or the default is the
/// literal token `null`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strata_config::resolve_env;
///
/// let config = json!({"greeting": "${STRATA_DOCS_GREETING:hello}"});
/// let resolved = resolve_env(config.as_object().map(Clone::clone).unwrap_or_default());
/// assert_eq!(resolved.get("greeting"), Some(&json!("hello")));
/// ```
#[must_use]
pub fn resolve_env(config: ConfigMap) -> ConfigMap {
    config
        .into_iter()
        .map(|(key, value)| (key, resolve_value(value)))
        .collect()
}

fn resolve_value(value: Value) -> Value {
    match value {
        Value::String(text) => substitute(&text).unwrap_or(Value::String(text)),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, nested)| (key, resolve_value(nested)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(resolve_value).collect()),
        other => other,
    }
}

/// Substitute a whole-string placeholder, or return `None` to keep the
/// original text.
fn substitute(text: &str) -> Option<Value> {
    let captures = SUBSTITUTION.captures(text)?;
    let name = captures.get(1)?.as_str();
    if let Ok(found) = std::env::var(name) {
        return Some(Value::String(found));
    }
    let resolved = match captures.get(2) {
        Some(default) if default.as_str() != NULL_DEFAULT => {
            Value::String(default.as_str().to_owned())
        }
        _ => Value::Null,
    };
    Some(resolved)
}
