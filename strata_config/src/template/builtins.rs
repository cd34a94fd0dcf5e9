//! Statically linked catalogue of filter and test callables.
//!
//! Manifests select from this catalogue by identifier; nothing outside this
//! module executes discovered code.

use std::sync::Arc;

use minijinja::value::{Value as TemplateValue, ValueKind};
use minijinja::{Error, ErrorKind};

use super::registry::{FilterFn, TestFn};

/// Look up a builtin filter by identifier.
pub(super) fn filter(id: &str) -> Option<FilterFn> {
    let callable: FilterFn = match id {
        "uppercase" => Arc::new(|value| transform(value, "uppercase", str::to_uppercase)),
        "lowercase" => Arc::new(|value| transform(value, "lowercase", str::to_lowercase)),
        "trim" => Arc::new(|value| transform(value, "trim", |s| s.trim().to_owned())),
        "reverse" => Arc::new(|value| transform(value, "reverse", |s| s.chars().rev().collect())),
        "capitalize" => Arc::new(|value| transform(value, "capitalize", capitalize)),
        _ => return None,
    };
    Some(callable)
}

/// Look up a builtin test by identifier.
pub(super) fn test(id: &str) -> Option<TestFn> {
    let callable: TestFn = match id {
        "blank" => Arc::new(|value| Ok(value.as_str().is_some_and(|s| s.trim().is_empty()))),
        "numeric" => Arc::new(|value| Ok(is_numeric(&value))),
        _ => return None,
    };
    Some(callable)
}

/// Apply a string transformation, rejecting non-string inputs.
fn transform(
    value: TemplateValue,
    name: &str,
    f: impl Fn(&str) -> String,
) -> Result<TemplateValue, Error> {
    let Some(text) = value.as_str() else {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("filter '{name}' expects a string"),
        ));
    };
    Ok(TemplateValue::from(f(text)))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
    })
}

fn is_numeric(value: &TemplateValue) -> bool {
    if matches!(value.kind(), ValueKind::Number) {
        return true;
    }
    value
        .as_str()
        .is_some_and(|s| s.trim().parse::<f64>().is_ok())
}
