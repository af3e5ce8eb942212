//! Shared configuration and API URL composition for the Cyberwatch dashboard
//! tooling.
//!
//! - [`config`] loads `cyberwatch.toml` from the project root.
//! - [`api`] composes control and data URLs and tracks the selected backend
//!   environment through an injected key/value store.

pub mod api;
pub mod config;

pub use api::{
    API_BASE_ENV, ApiBase, DEFAULT_API_BASE, DEFAULT_ENVIRONMENT, ENVIRONMENT_KEY,
    EnvironmentSelector, FileStore, KeyValueStore, MemoryStore, StoreError, UrlBuilder, join,
};
pub use config::{CONFIG_FILE_NAME, ConfigError, RulesConfig, SharedConfig};
