//! Error enums for document loading and template expansion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading configuration documents.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The configuration file does not exist on disk.
    #[error("configuration file not found: {}", path.display())]
    NotFound {
        /// Path that was requested but absent.
        path: PathBuf,
    },

    /// The file extension maps to no known decoder.
    #[error("unsupported configuration format '{extension}' for '{}'", path.display())]
    UnsupportedFormat {
        /// Path whose extension was rejected.
        path: PathBuf,
        /// The offending extension, lowercased, without the leading dot.
        extension: String,
    },

    /// The file exists but its contents failed to decode.
    #[error("failed to parse configuration file '{}': {source}", path.display())]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl LoadError {
    /// Construct a [`LoadError::Parse`] for a configuration path.
    pub fn parse(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Parse {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Errors raised while rendering templated configuration values.
///
/// Expansion is fail-fast within a pass: the first failing value aborts the
/// whole call. Failure to converge within the iteration cap is deliberately
/// *not* an error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// A template referenced a filter name that is not registered.
    #[error("value for key '{key}' references an unknown filter: {detail}")]
    UnknownFilter {
        /// Top-level configuration key whose value failed to render.
        key: String,
        /// Engine-reported description naming the missing filter.
        detail: String,
    },

    /// A template referenced a test name that is not registered.
    #[error("value for key '{key}' references an unknown test: {detail}")]
    UnknownTest {
        /// Top-level configuration key whose value failed to render.
        key: String,
        /// Engine-reported description naming the missing test.
        detail: String,
    },

    /// The template expression was malformed or failed to evaluate.
    #[error("value for key '{key}' failed to render")]
    Template {
        /// Top-level configuration key whose value failed to render.
        key: String,
        /// Underlying template engine error.
        #[source]
        source: minijinja::Error,
    },
}

impl RenderError {
    /// Classify a template engine failure for the value under `key`.
    #[must_use]
    pub fn from_engine(key: &str, source: minijinja::Error) -> Self {
        match source.kind() {
            minijinja::ErrorKind::UnknownFilter => Self::UnknownFilter {
                key: key.to_owned(),
                detail: source.to_string(),
            },
            minijinja::ErrorKind::UnknownTest => Self::UnknownTest {
                key: key.to_owned(),
                detail: source.to_string(),
            },
            _ => Self::Template {
                key: key.to_owned(),
                source,
            },
        }
    }
}

/// Top-level error for the resolution pipeline.
///
/// Schema validation is absent by design: the validator returns a tagged
/// [`crate::schema::ValidationOutcome`] instead of raising.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StrataError {
    /// Failure loading or decoding configuration documents.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Failure expanding templated configuration values.
    #[error(transparent)]
    Render(#[from] RenderError),
}
