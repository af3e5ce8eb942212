//! TOML rule book loading.
//!
//! ```toml
//! [[file]]
//! path = "src/pages/Users.jsx"
//! lang_var = "lang"
//!
//! [[file.rule]]
//! pattern = '"Nom"'
//! key = "users.name"
//!
//! [[file.rule]]
//! pattern = 'name="Score"'
//! prefix = "name="
//! key = "users.score"
//!
//! [[file.rule]]
//! pattern = '"/ 100"'
//! replacement = "/ 100"
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;

use super::{DEFAULT_LANG_VAR, FileRuleSet, RuleBook, TranslationRule};

/// Errors raised while loading a rule book.
#[derive(Debug, Error)]
pub enum RuleBookError {
    /// The rule book file could not be read.
    #[error("failed to read rule book {path}: {source}")]
    Read {
        /// Path of the rule book.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The rule book is not valid TOML for the expected schema.
    #[error("invalid rule book: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two rule sets target the same file.
    #[error("rule book lists {path} more than once")]
    DuplicateFile {
        /// The repeated path.
        path: Utf8PathBuf,
    },

    /// A rule is malformed.
    #[error("rule {index} for {path} is invalid: {reason}")]
    InvalidRule {
        /// File the rule belongs to.
        path: Utf8PathBuf,
        /// Zero-based position of the rule within its file.
        index: usize,
        /// What is wrong with the rule.
        reason: &'static str,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleBookFile {
    #[serde(default)]
    file: Vec<FileEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileEntry {
    path: Utf8PathBuf,
    #[serde(default = "default_lang_var")]
    lang_var: String,
    #[serde(default, rename = "rule")]
    rules: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleEntry {
    pattern: String,
    key: Option<String>,
    prefix: Option<String>,
    replacement: Option<String>,
}

fn default_lang_var() -> String {
    DEFAULT_LANG_VAR.to_owned()
}

impl RuleEntry {
    fn into_rule(self, path: &Utf8Path, index: usize) -> Result<TranslationRule, RuleBookError> {
        let invalid = |reason| RuleBookError::InvalidRule {
            path: path.to_owned(),
            index,
            reason,
        };

        if self.pattern.is_empty() {
            return Err(invalid("pattern must not be empty"));
        }

        match (self.key, self.prefix, self.replacement) {
            (Some(key), prefix, None) => Ok(TranslationRule::prefixed_call(
                self.pattern,
                prefix.unwrap_or_default(),
                key,
            )),
            (None, None, Some(text)) => Ok(TranslationRule::verbatim(self.pattern, text)),
            (None, Some(_), Some(_)) => Err(invalid("prefix only applies to key rules")),
            (Some(_), _, Some(_)) => Err(invalid("set either key or replacement, not both")),
            (None, _, None) => Err(invalid("set either key or replacement")),
        }
    }
}

impl RuleBook {
    /// Parses a rule book from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`RuleBookError`] when the text does not match the schema, a
    /// file is listed twice, or a rule is malformed.
    pub fn from_toml(text: &str) -> Result<Self, RuleBookError> {
        let parsed: RuleBookFile = toml::from_str(text)?;
        let mut book = Self::new();

        for entry in parsed.file {
            let rules = entry
                .rules
                .into_iter()
                .enumerate()
                .map(|(index, rule)| rule.into_rule(&entry.path, index))
                .collect::<Result<Vec<_>, _>>()?;
            book.insert(FileRuleSet::new(entry.path, rules).with_lang_var(entry.lang_var))?;
        }

        Ok(book)
    }

    /// Reads and parses the rule book at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleBookError::Read`] when the file cannot be read, or any
    /// error from [`RuleBook::from_toml`].
    pub fn load(path: &Utf8Path) -> Result<Self, RuleBookError> {
        let text = std::fs::read_to_string(path).map_err(|source| RuleBookError::Read {
            path: path.to_owned(),
            source,
        })?;
        log::debug!(target: "rules", "loading rule book from {path}");
        Self::from_toml(&text)
    }
}
