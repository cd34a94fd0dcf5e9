//! Layered configuration resolution for Rust applications.
//!
//! `strata_config` folds heterogeneous configuration documents into one
//! mapping, substitutes environment-variable placeholders, iteratively
//! expands template expressions that reference sibling values, and hands
//! the result to an opaque schema for validation.
//!
//! The pipeline runs leaf-first:
//!
//! 1. [`load_and_merge`] decodes `.yaml`/`.yml`, `.json`, `.toml` and
//!    `.properties` files into JSON-like mappings.
//! 2. [`merge_documents`] folds them shallowly, later sources winning.
//! 3. [`resolve_env`] rewrites whole-string `${NAME:default}` placeholders.
//! 4. [`template`] re-renders the mapping against itself until a fixpoint
//!    or the iteration cap.
//! 5. [`schema`] constructs a caller-supplied model, returning a tagged
//!    outcome instead of raising.
//!
//! Every stage is a pure function over immutable snapshots; the only state
//! shared across a resolution run is the registries built for that call.

use std::sync::Arc;

mod env_vars;
mod error;
mod loader;
mod merge;
mod resolver;
mod result_ext;
pub mod schema;
pub mod template;

pub use env_vars::resolve_env;
pub use error::{LoadError, RenderError, StrataError};
pub use loader::{ConfigDocument, load_and_merge, load_document};
pub use merge::merge_documents;
pub use resolver::{Resolver, ResolverBuilder};
pub use result_ext::IntoStrata;
pub use schema::{FieldViolation, SchemaModel, ValidationOutcome, validate};
pub use template::{ExpandOptions, FilterRegistry, TestRegistry, expand, expand_with};

/// Universal JSON-like configuration value.
///
/// Order-preserving mappings come from `serde_json`'s `preserve_order`
/// feature, so documents round-trip in declaration order.
pub type ConfigValue = serde_json::Value;

/// Top-level configuration mapping from key to [`ConfigValue`].
pub type ConfigMap = serde_json::Map<String, ConfigValue>;

/// Result alias used by pipeline-level APIs.
///
/// Errors are shared via [`Arc`] so a single failure can be reported to
/// multiple observers without cloning the underlying error.
pub type StrataResult<T> = Result<T, Arc<StrataError>>;
