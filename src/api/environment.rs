//! Selected backend environment for the data namespace.

use super::store::{KeyValueStore, StoreError};

/// Environment used when nothing has been persisted.
pub const DEFAULT_ENVIRONMENT: &str = "prod";

/// Storage key holding the selected environment.
pub const ENVIRONMENT_KEY: &str = "cw.env";

/// Reads and writes the selected environment through a [`KeyValueStore`].
///
/// ```
/// use cyberwatch::{EnvironmentSelector, MemoryStore};
///
/// let mut selector = EnvironmentSelector::new(MemoryStore::default());
/// assert_eq!(selector.selected(), "prod");
/// selector.select("dev").unwrap();
/// assert_eq!(selector.selected(), "dev");
/// ```
#[derive(Clone, Debug)]
pub struct EnvironmentSelector<S> {
    store: S,
}

impl<S: KeyValueStore> EnvironmentSelector<S> {
    /// Wraps `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the persisted environment, or [`DEFAULT_ENVIRONMENT`] when the
    /// key is absent or empty.
    #[must_use]
    pub fn selected(&self) -> String {
        self.store
            .get(ENVIRONMENT_KEY)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned())
    }

    /// Persists `environment` and echoes it back unchanged.
    ///
    /// Any string is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot persist the value.
    pub fn select(&mut self, environment: &str) -> Result<String, StoreError> {
        self.store.set(ENVIRONMENT_KEY, environment)?;
        log::debug!(target: "api::environment", "selected environment `{environment}`");
        Ok(environment.to_owned())
    }

    /// Consumes the selector, returning the store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
