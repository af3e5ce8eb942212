//! Key/value storage backing the environment selector.

use std::collections::{BTreeMap, HashMap};

use camino::{Utf8Path, Utf8PathBuf};
use directories_next::ProjectDirs;
use log::warn;
use thiserror::Error;

const STORE_FILE_NAME: &str = "storage.toml";

/// Errors raised when persisting a value.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform data directory could not be determined.
    #[error("could not determine a data directory for the store")]
    NoDataDirectory,

    /// The store file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the store file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The stored table could not be serialised.
    #[error("failed to serialise store: {0}")]
    Serialise(#[from] toml::ser::Error),
}

/// Persistent string storage with last-write-wins semantics per key.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the value cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store; values live as long as the store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store persisted as a flat TOML table on disk.
///
/// Each `set` rewrites the whole file. Unreadable or malformed files read
/// as empty so a damaged store never blocks URL composition.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: Utf8PathBuf,
}

impl FileStore {
    /// Creates a store backed by `path`.
    #[must_use]
    pub fn at(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store under the platform data directory.
    ///
    /// - Linux: `~/.local/share/cyberwatch/storage.toml`
    /// - macOS: `~/Library/Application Support/cyberwatch/storage.toml`
    /// - Windows: `%APPDATA%\cyberwatch\data\storage.toml`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoDataDirectory`] when no home directory can be
    /// resolved or the path is not valid UTF-8.
    pub fn in_data_dir() -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from("", "", "cyberwatch").ok_or(StoreError::NoDataDirectory)?;
        let dir = Utf8PathBuf::try_from(dirs.data_dir().to_path_buf())
            .map_err(|_| StoreError::NoDataDirectory)?;
        Ok(Self::at(dir.join(STORE_FILE_NAME)))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn read_table(&self) -> BTreeMap<String, String> {
        let Ok(text) = std::fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };

        toml::from_str(&text).unwrap_or_else(|error| {
            warn!(target: "api::store", "ignoring malformed store {}: {error}", self.path);
            BTreeMap::new()
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_table().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut table = self.read_table();
        table.insert(key.to_owned(), value.to_owned());
        let text = toml::to_string(&table)?;

        let write = |path: &Utf8Path| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, text.as_bytes())
        };
        write(&self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
