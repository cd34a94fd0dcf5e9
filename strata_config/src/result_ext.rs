//! Extensions for mapping stage errors into `StrataResult` concisely.
//!
//! Stage-level APIs return their own error enums ([`crate::LoadError`],
//! [`crate::RenderError`]); pipeline-level callers work with the shared
//! `StrataResult<T>` alias (`Result<T, Arc<StrataError>>`). This helper
//! removes the repetitive `.map_err(|e| Arc::new(e.into()))` plumbing.
//!
//! # Examples
//!
//! ```
//! use strata_config::{IntoStrata, LoadError, StrataResult};
//!
//! fn always_missing() -> StrataResult<()> {
//!     Err(LoadError::NotFound {
//!         path: "demo.toml".into(),
//!     })
//!     .into_strata()
//! }
//! assert!(always_missing().is_err());
//! ```

use std::sync::Arc;

use crate::{StrataError, StrataResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<StrataError>`
/// into a `StrataResult<T>`.
pub trait IntoStrata<T> {
    /// Convert `Result<T, E>` into `StrataResult<T>` using `Into<StrataError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<StrataError>`.
    fn into_strata(self) -> StrataResult<T>;
}

impl<T, E> IntoStrata<T> for Result<T, E>
where
    E: Into<StrataError>,
{
    fn into_strata(self) -> StrataResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
