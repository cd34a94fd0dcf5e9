//! End-to-end resolution pipeline.
//!
//! A [`Resolver`] composes the individual stages (load and merge,
//! environment substitution, template expansion) behind one call. Each
//! stage remains independently callable; the resolver adds no behaviour of
//! its own.

use std::path::PathBuf;

use crate::template::{DEFAULT_MAX_ITERATIONS, ExpandOptions, expand};
use crate::{ConfigMap, IntoStrata, StrataResult, env_vars, loader};

/// Configured resolution pipeline.
///
/// # Examples
///
/// ```rust,no_run
/// use strata_config::Resolver;
///
/// # fn run() -> strata_config::StrataResult<()> {
/// let resolved = Resolver::builder()
///     .add_path("config-a.yaml")
///     .add_path("config-b.yaml")
///     .filters_dir("filters")
///     .build()
///     .resolve()?;
/// assert!(resolved.contains_key("name"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    paths: Vec<PathBuf>,
    filters_dir: Option<PathBuf>,
    tests_dir: Option<PathBuf>,
    max_iterations: usize,
}

impl Resolver {
    /// Creates a new builder with no sources configured.
    #[must_use]
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::new()
    }

    /// Run the pipeline: load and merge every source, substitute
    /// environment placeholders, then expand templated values.
    ///
    /// # Errors
    ///
    /// Returns the first load error (no partial merge) or the first render
    /// error (no partially-applied expansion pass).
    pub fn resolve(&self) -> StrataResult<ConfigMap> {
        let merged = loader::load_and_merge(&self.paths).into_strata()?;
        let substituted = env_vars::resolve_env(merged);
        let options = ExpandOptions {
            filters_dir: self.filters_dir.clone(),
            tests_dir: self.tests_dir.clone(),
            max_iterations: self.max_iterations,
        };
        expand(&substituted, &options).into_strata()
    }
}

/// Builder for [`Resolver`].
#[derive(Debug, Clone, Default)]
pub struct ResolverBuilder {
    paths: Vec<PathBuf>,
    filters_dir: Option<PathBuf>,
    tests_dir: Option<PathBuf>,
    max_iterations: Option<usize>,
}

impl ResolverBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one configuration source; sources merge in insertion order.
    #[must_use]
    pub fn add_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Replaces the configuration sources.
    #[must_use]
    pub fn paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the filter manifest directory.
    #[must_use]
    pub fn filters_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.filters_dir = Some(dir.into());
        self
    }

    /// Sets the test manifest directory.
    #[must_use]
    pub fn tests_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tests_dir = Some(dir.into());
        self
    }

    /// Overrides the template expansion iteration cap.
    #[must_use]
    pub fn max_iterations(mut self, cap: usize) -> Self {
        self.max_iterations = Some(cap);
        self
    }

    /// Produces the configured [`Resolver`].
    #[must_use]
    pub fn build(self) -> Resolver {
        Resolver {
            paths: self.paths,
            filters_dir: self.filters_dir,
            tests_dir: self.tests_dir,
            max_iterations: self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
        }
    }
}
