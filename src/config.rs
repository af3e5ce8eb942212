//! Project-level configuration loader.
//!
//! The tooling keeps its settings in `cyberwatch.toml` at the project root.
//! [`SharedConfig`] captures the subset shared by every binary: the report
//! locale, the API base override, the catalogue location, and an optional
//! replacement rule book. A missing file yields the defaults; a file that
//! exists but cannot be read or parsed is an error.

use camino::{Utf8Path, Utf8PathBuf};
use common::i18n::normalise_locale;
use serde::Deserialize;
use thiserror::Error;

/// File name looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "cyberwatch.toml";

const DEFAULT_CATALOGUE: &str = "src/i18n/index.js";

/// Errors raised while loading `cyberwatch.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`SharedConfig`].
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Shared configuration for the tooling binaries.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SharedConfig {
    /// Preferred report locale when neither `--locale` nor
    /// `CYBERWATCH_LOCALE` is set. Blank values are ignored.
    pub locale: Option<String>,
    /// API base address used when `VITE_API_URL` is unset.
    pub api_base: Option<String>,
    /// Translation catalogue path, relative to the project root.
    pub catalogue: Option<Utf8PathBuf>,
    /// Rule book overrides for the migrator.
    pub rules: RulesConfig,
}

/// Settings for the translation-key migrator.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// TOML rule book replacing the built-in one, relative to the project root.
    pub path: Option<Utf8PathBuf>,
}

impl SharedConfig {
    /// Loads `cyberwatch.toml` from `root`, returning defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but cannot be read or
    /// parsed.
    pub fn load_from(root: &Utf8Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            log::debug!(target: "config", "no {CONFIG_FILE_NAME} under {root}; using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Returns the configured locale override, if present.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        normalise_locale(self.locale.as_deref())
    }

    /// Returns the configured API base, ignoring blank values.
    #[must_use]
    pub fn api_base(&self) -> Option<&str> {
        non_blank(self.api_base.as_deref())
    }

    /// Returns the catalogue path relative to the project root.
    #[must_use]
    pub fn catalogue(&self) -> &Utf8Path {
        self.catalogue
            .as_deref()
            .unwrap_or_else(|| Utf8Path::new(DEFAULT_CATALOGUE))
    }
}

/// Trim whitespace and discard empty values.
pub(crate) fn non_blank(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn utf8_root(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("temp dir should be UTF-8")
    }

    #[rstest]
    fn defaults_leave_every_override_unset() {
        let config = SharedConfig::default();

        assert!(config.locale().is_none());
        assert!(config.api_base().is_none());
        assert!(config.rules.path.is_none());
        assert_eq!(config.catalogue(), Utf8Path::new("src/i18n/index.js"));
    }

    #[rstest]
    fn deserialises_overrides_from_toml() {
        let source = concat!(
            "locale = \"fr\"\n",
            "api_base = \"https://api.example.test\"\n",
            "catalogue = \"web/i18n.js\"\n",
            "[rules]\n",
            "path = \"tools/rules.toml\"\n",
        );

        let config = toml::from_str::<SharedConfig>(source)
            .expect("expected configuration to parse successfully");

        assert_eq!(config.locale(), Some("fr"));
        assert_eq!(config.api_base(), Some("https://api.example.test"));
        assert_eq!(config.catalogue(), Utf8Path::new("web/i18n.js"));
        assert_eq!(
            config.rules.path.as_deref(),
            Some(Utf8Path::new("tools/rules.toml"))
        );
    }

    #[rstest]
    #[case("locale = \"\"\n")]
    #[case("locale = \"   \"\n")]
    fn blank_locale_is_ignored(#[case] source: &str) {
        let config = toml::from_str::<SharedConfig>(source).expect("expected config to parse");
        assert!(config.locale().is_none());
    }

    #[rstest]
    fn rejects_unknown_fields() {
        let error = toml::from_str::<SharedConfig>("colour = \"blue\"\n")
            .expect_err("unknown fields should be rejected");
        assert!(error.to_string().contains("colour"));
    }

    #[rstest]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let config = SharedConfig::load_from(&utf8_root(&dir)).expect("defaults expected");
        assert_eq!(config, SharedConfig::default());
    }

    #[rstest]
    fn malformed_file_is_reported_with_its_path() {
        let dir = TempDir::new().expect("temp dir");
        let root = utf8_root(&dir);
        std::fs::write(root.join(CONFIG_FILE_NAME), "locale = [").expect("write config");

        let error = SharedConfig::load_from(&root).expect_err("parse should fail");

        assert!(matches!(error, ConfigError::Parse { .. }));
        assert!(error.to_string().contains(CONFIG_FILE_NAME));
    }
}
