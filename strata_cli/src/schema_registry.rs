//! Statically linked schema capabilities selectable by name.
//!
//! Schemas are ordinary [`SchemaModel`] implementations compiled into the
//! binary; `--schema <name>` picks one. No foreign code is ever loaded.

use std::collections::BTreeMap;

use strata_config::schema::{self, FieldViolation, SchemaModel};
use strata_config::{ConfigMap, ValidationOutcome};

/// A named validation entry point.
pub type ValidatorFn = fn(&ConfigMap) -> ValidationOutcome;

/// Registry of schemas shipped with the binary.
pub struct SchemaRegistry {
    entries: BTreeMap<&'static str, ValidatorFn>,
}

impl SchemaRegistry {
    /// Registry holding every first-party schema.
    pub fn with_defaults() -> Self {
        let mut entries: BTreeMap<&'static str, ValidatorFn> = BTreeMap::new();
        entries.insert("service", schema::validate::<ServiceConfig>);
        Self { entries }
    }

    /// Look up a validator by name.
    pub fn get(&self, name: &str) -> Option<ValidatorFn> {
        self.entries.get(name).copied()
    }

    /// Comma-separated list of registered names, for error messages.
    pub fn available(&self) -> String {
        self.entries.keys().copied().collect::<Vec<_>>().join(", ")
    }
}

/// First-party schema describing a deployable service configuration.
#[derive(Debug)]
pub struct ServiceConfig {
    name: String,
    version: String,
    debug: bool,
    age: i64,
}

impl SchemaModel for ServiceConfig {
    fn construct(config: &ConfigMap) -> Result<Self, Vec<FieldViolation>> {
        let mut violations = Vec::new();
        let name = schema::required(config, "name")
            .map_err(|v| violations.push(v))
            .ok();
        let version = schema::required(config, "version")
            .map_err(|v| violations.push(v))
            .ok();
        let debug = schema::required(config, "debug")
            .map_err(|v| violations.push(v))
            .ok();
        let age: Option<i64> = schema::required(config, "age")
            .map_err(|v| violations.push(v))
            .ok();
        if let Some(value) = age {
            if !(0..=150).contains(&value) {
                violations.push(FieldViolation::new(
                    "age",
                    format!("{value} is outside the valid range [0, 150]"),
                ));
            }
        }
        match (name, version, debug, age) {
            (Some(name), Some(version), Some(debug), Some(age)) if violations.is_empty() => {
                Ok(Self {
                    name,
                    version,
                    debug,
                    age,
                })
            }
            _ => Err(violations),
        }
    }
}
