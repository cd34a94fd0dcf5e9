//! Error types produced by the configuration resolution pipeline.

mod types;

pub use types::{LoadError, RenderError, StrataError};
