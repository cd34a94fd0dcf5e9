//! Test helpers shared across crates in the workspace.
//!
//! Currently provides RAII guards for mutating process environment
//! variables safely from tests.

pub mod env {
    //! Guarded environment-variable mutation for tests.
    //!
    //! Mutations go through a global mutex so parallel tests cannot race
    //! each other, and every mutation returns a guard that restores the
    //! prior state on drop (removing the variable if it was absent).
    //!
    //! # Examples
    //!
    //! ```
    //! use strata_test_helpers::env;
    //!
    //! let _guard = env::set_var("DEMO_KEY", "value");
    //! assert_eq!(std::env::var("DEMO_KEY").as_deref(), Ok("value"));
    //! ```

    use std::env;
    use std::ffi::{OsStr, OsString};
    use std::sync::{LazyLock, Mutex};

    static ENV_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

    /// RAII guard restoring an environment variable to its prior value on
    /// drop.
    #[must_use = "dropping restores the prior value"]
    pub struct EnvVarGuard {
        key: String,
        original: Option<OsString>,
    }

    /// Sets an environment variable, returning a guard that restores the
    /// prior value.
    pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        let key = key.into();
        let original = with_lock(|| {
            let previous = env::var_os(&key);
            // SAFETY: the global mutex serialises all environment writes.
            unsafe { env::set_var(&key, value.as_ref()) };
            previous
        });
        EnvVarGuard { key, original }
    }

    /// Removes an environment variable, returning a guard that restores
    /// the prior value.
    pub fn remove_var<K>(key: K) -> EnvVarGuard
    where
        K: Into<String>,
    {
        let key = key.into();
        let original = with_lock(|| {
            let previous = env::var_os(&key);
            // SAFETY: the global mutex serialises all environment writes.
            unsafe { env::remove_var(&key) };
            previous
        });
        EnvVarGuard { key, original }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            let key = self.key.clone();
            let original = self.original.take();
            with_lock(|| match original {
                // SAFETY: the global mutex serialises all environment writes.
                Some(value) => unsafe { env::set_var(&key, value) },
                None => unsafe { env::remove_var(&key) },
            });
        }
    }

    fn with_lock<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        f()
    }
}
