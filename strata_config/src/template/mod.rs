//! Iterative template expansion over configuration mappings.
//!
//! Every top-level string value may be a Jinja-dialect template referencing
//! sibling keys; the engine re-renders the whole mapping against itself
//! until nothing changes or the iteration cap is reached.

mod builtins;
mod discovery;
mod expand;
mod registry;

pub use expand::{DEFAULT_MAX_ITERATIONS, ExpandOptions, expand, expand_with};
pub use registry::{FilterFn, FilterRegistry, TestFn, TestRegistry};
