//! Schema validation boundary for resolved configuration.
//!
//! The validator never raises past this boundary: [`validate`] always
//! returns a tagged [`ValidationOutcome`], produced once and terminal. The
//! schema itself is opaque to the engine: any type implementing
//! [`SchemaModel`] can be constructed from the mapping's top-level keys.
//! Hosts register the models they ship; nothing here loads foreign code.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ConfigMap;

/// A single field-level violation collected during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Top-level configuration key at fault.
    pub field: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl FieldViolation {
    /// Build a violation for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of validating a resolved configuration against a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The configuration satisfied the schema.
    Success {
        /// Human-readable confirmation, including the constructed model.
        message: String,
    },
    /// The configuration violated the schema.
    Failure {
        /// Every violation collected during construction.
        violations: Vec<FieldViolation>,
    },
}

impl ValidationOutcome {
    /// Whether validation succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// A schema type constructible from a configuration mapping.
///
/// Implementations should collect *every* field violation rather than
/// stopping at the first, so callers see the full shape of a bad
/// configuration in one pass. The [`required`] and [`optional`] helpers
/// produce per-field violations for missing keys and type mismatches.
pub trait SchemaModel: Sized + fmt::Debug {
    /// Construct the model from the mapping's top-level keys.
    ///
    /// # Errors
    ///
    /// Returns the collected field violations when the mapping does not
    /// satisfy the schema.
    fn construct(config: &ConfigMap) -> Result<Self, Vec<FieldViolation>>;
}

/// Validate a resolved configuration against the schema type `M`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use strata_config::schema::{self, FieldViolation, SchemaModel};
/// use strata_config::ConfigMap;
///
/// #[derive(Debug)]
/// struct Greeting {
///     recipient: String,
/// }
///
/// impl SchemaModel for Greeting {
///     fn construct(config: &ConfigMap) -> Result<Self, Vec<FieldViolation>> {
///         let recipient = schema::required(config, "recipient").map_err(|v| vec![v])?;
///         Ok(Self { recipient })
///     }
/// }
///
/// let config = json!({"recipient": "world"});
/// let mapping = config.as_object().cloned().unwrap_or_default();
/// assert!(schema::validate::<Greeting>(&mapping).is_success());
/// ```
#[must_use]
pub fn validate<M: SchemaModel>(config: &ConfigMap) -> ValidationOutcome {
    match M::construct(config) {
        Ok(model) => ValidationOutcome::Success {
            message: format!("validation successful: {model:?}"),
        },
        Err(violations) => {
            tracing::debug!(count = violations.len(), "configuration failed validation");
            ValidationOutcome::Failure { violations }
        }
    }
}

/// Extract a required typed field from the mapping.
///
/// # Errors
///
/// Returns a [`FieldViolation`] when the key is absent or its value does
/// not deserialize as `T`.
pub fn required<T: DeserializeOwned>(config: &ConfigMap, field: &str) -> Result<T, FieldViolation> {
    config.get(field).map_or_else(
        || Err(FieldViolation::new(field, "field required")),
        |value| coerce(field, value),
    )
}

/// Extract an optional typed field from the mapping.
///
/// An absent key or an explicit null yields `Ok(None)`.
///
/// # Errors
///
/// Returns a [`FieldViolation`] when a present, non-null value does not
/// deserialize as `T`.
pub fn optional<T: DeserializeOwned>(
    config: &ConfigMap,
    field: &str,
) -> Result<Option<T>, FieldViolation> {
    match config.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce(field, value).map(Some),
    }
}

fn coerce<T: DeserializeOwned>(field: &str, value: &Value) -> Result<T, FieldViolation> {
    serde_json::from_value(value.clone())
        .map_err(|e| FieldViolation::new(field, e.to_string()))
}
