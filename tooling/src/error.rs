//! Error types for the tooling binaries.
//!
//! Only setup failures surface as [`ToolError`]: a malformed configuration
//! or rule book, an unreadable catalogue, or a broken output stream.
//! Per-file migration failures are data on the batch report and never reach
//! this type.

use camino::Utf8PathBuf;
use cyberwatch::ConfigError;
use thiserror::Error;

use crate::rules::RuleBookError;

/// Errors that stop a tooling command before or after its main work.
#[derive(Debug, Error)]
pub enum ToolError {
    /// `cyberwatch.toml` could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The rule book could not be loaded.
    #[error(transparent)]
    RuleBook(#[from] RuleBookError),

    /// The translation catalogue could not be read.
    #[error("failed to read catalogue {path}: {source}")]
    CatalogueRead {
        /// Path of the catalogue.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The translation catalogue could not be written back.
    #[error("failed to write catalogue {path}: {source}")]
    CatalogueWrite {
        /// Path of the catalogue.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A search pattern built from catalogue data did not compile.
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The source tree could not be enumerated.
    #[error("invalid source glob: {0}")]
    Glob(#[from] glob::PatternError),

    /// JSON output could not be produced.
    #[error("failed to serialise JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write output.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for tooling operations.
pub type Result<T> = std::result::Result<T, ToolError>;
