//! Error types for the `strata` command-line pipeline.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the `strata` pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to resolve configuration: {0}")]
    Resolve(#[from] std::sync::Arc<strata_config::StrataError>),

    #[error("unknown schema '{name}'; available schemas: {available}")]
    UnknownSchema { name: String, available: String },

    #[error("configuration failed schema validation")]
    Validation,

    #[error("failed to render template '{path}': {source}")]
    Render {
        path: Utf8PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialise resolved configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write resolved configuration to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}
