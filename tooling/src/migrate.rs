//! The translation-key migrator.
//!
//! For every file in a [`RuleBook`] the migrator reads the text, skips it if
//! the translation import is already present, inserts the import after the
//! first existing import, applies the file's rules in order as global literal
//! replacements, and writes the result back over the original. Each file is
//! its own error boundary: a failure is recorded on the [`BatchReport`] and
//! the batch carries on. Writes are not atomic; an interrupted run can leave
//! a file partially rewritten.

use std::borrow::Cow;
use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::report::{BatchReport, FileOutcome, FileStatus};
use crate::rules::{FileRuleSet, RuleBook};

/// Substring whose presence marks a file as already migrated.
pub const MIGRATED_MARKER: &str = "import { t } from '../i18n'";

/// Substring indicating the translation function is already imported.
pub const TRANSLATION_IMPORT_PROBE: &str = "import { t }";

/// Text inserted directly after the first import statement.
pub const TRANSLATION_IMPORT: &str = ";\nimport { t } from '../i18n'";

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal checked by the tests below"
)]
static FIRST_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+.*\s+from\s+['"][^'"]+['"]"#).expect("import pattern should compile")
});

/// Result of migrating one file's text in memory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Migration {
    /// The text already carries [`MIGRATED_MARKER`]; nothing to do.
    AlreadyMigrated,
    /// The rewritten text and the number of substitutions made.
    Rewritten {
        /// Text after import insertion and rule application.
        text: String,
        /// Total occurrences replaced across all rules.
        replacements: usize,
    },
}

/// Inserts [`TRANSLATION_IMPORT`] after the first import statement.
///
/// The text is returned unchanged when it already imports `t` or has no
/// import statement to anchor on.
///
/// ```
/// use cyberwatch_tooling::migrate::insert_translation_import;
///
/// let source = "import React from 'react';\nconst a = 1;\n";
/// assert_eq!(
///     insert_translation_import(source),
///     "import React from 'react';\nimport { t } from '../i18n';\nconst a = 1;\n",
/// );
/// ```
#[must_use]
pub fn insert_translation_import(text: &str) -> Cow<'_, str> {
    if text.contains(TRANSLATION_IMPORT_PROBE) {
        return Cow::Borrowed(text);
    }

    match FIRST_IMPORT.find(text) {
        Some(found) => {
            let (head, tail) = text.split_at(found.end());
            Cow::Owned(format!("{head}{TRANSLATION_IMPORT}{tail}"))
        }
        None => Cow::Borrowed(text),
    }
}

/// Applies the rules of `set` to `text` in order.
///
/// Each rule replaces every non-overlapping occurrence of its pattern. A
/// later rule operates on the output of earlier ones, so a pattern that
/// occurs inside an earlier replacement is substituted again. Returns the
/// new text and the number of occurrences replaced.
#[must_use]
pub fn apply_rules(text: &str, set: &FileRuleSet) -> (String, usize) {
    let mut buffer = text.to_owned();
    let mut replacements = 0;

    for rule in &set.rules {
        if rule.pattern.is_empty() {
            continue;
        }
        let occurrences = buffer.matches(rule.pattern.as_str()).count();
        trace!(
            target: "migrate",
            "{}: `{}` matched {occurrences} time(s)",
            set.path,
            rule.pattern
        );
        if occurrences == 0 {
            continue;
        }
        buffer = buffer.replace(rule.pattern.as_str(), &rule.replacement.render(&set.lang_var));
        replacements += occurrences;
    }

    (buffer, replacements)
}

/// Migrates `text` according to `set` without touching the filesystem.
#[must_use]
pub fn migrate_text(text: &str, set: &FileRuleSet) -> Migration {
    if text.contains(MIGRATED_MARKER) {
        return Migration::AlreadyMigrated;
    }

    let with_import = insert_translation_import(text);
    let (text, replacements) = apply_rules(&with_import, set);
    Migration::Rewritten { text, replacements }
}

/// Per-file I/O failure.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// The file could not be read as UTF-8 text.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Absolute path of the file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The rewritten text could not be written back.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Absolute path of the file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Text file access used by the [`Migrator`].
#[cfg_attr(test, mockall::automock)]
pub trait SourceFiles {
    /// Reads `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file is missing, unreadable,
    /// or not valid UTF-8.
    fn read(&self, path: &Utf8Path) -> std::io::Result<String>;

    /// Replaces the contents of `path` with `text`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be written.
    fn write(&self, path: &Utf8Path, text: &str) -> std::io::Result<()>;
}

/// [`SourceFiles`] backed by the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiskFiles;

impl SourceFiles for DiskFiles {
    fn read(&self, path: &Utf8Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Utf8Path, text: &str) -> std::io::Result<()> {
        std::fs::write(path, text)
    }
}

/// Runs a [`RuleBook`] against files under a project root.
pub struct Migrator<'a> {
    root: &'a Utf8Path,
    book: &'a RuleBook,
    files: &'a dyn SourceFiles,
    dry_run: bool,
}

impl fmt::Debug for Migrator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Migrator")
            .field("root", &self.root)
            .field("rule_sets", &self.book.len())
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

impl<'a> Migrator<'a> {
    /// Creates a migrator resolving rule book paths against `root` on disk.
    #[must_use]
    pub const fn new(root: &'a Utf8Path, book: &'a RuleBook) -> Self {
        Self {
            root,
            book,
            files: &DiskFiles,
            dry_run: false,
        }
    }

    /// Reads and writes through `files` instead of the local filesystem.
    #[must_use]
    pub const fn with_files(mut self, files: &'a dyn SourceFiles) -> Self {
        self.files = files;
        self
    }

    /// When set, outcomes are computed but no file is written.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Migrates every file in the rule book.
    #[must_use]
    pub fn run(&self) -> BatchReport {
        let outcomes = self.book.iter().map(|set| self.migrate_file(set)).collect();
        BatchReport::new(outcomes, self.dry_run)
    }

    /// Migrates a single file, containing any failure in the outcome.
    #[must_use]
    pub fn migrate_file(&self, set: &FileRuleSet) -> FileOutcome {
        let status = match self.try_migrate_file(set) {
            Ok(status) => status,
            Err(error) => {
                debug!(target: "migrate", "{error}");
                FileStatus::Failed {
                    detail: error.to_string(),
                }
            }
        };
        FileOutcome {
            path: set.path.clone(),
            status,
        }
    }

    fn try_migrate_file(&self, set: &FileRuleSet) -> Result<FileStatus, MigrationError> {
        let path = self.root.join(&set.path);
        let original = self.files.read(&path).map_err(|source| MigrationError::Read {
            path: path.clone(),
            source,
        })?;

        match migrate_text(&original, set) {
            Migration::AlreadyMigrated => Ok(FileStatus::Skipped),
            Migration::Rewritten { text, replacements } => {
                if self.dry_run {
                    debug!(target: "migrate", "dry run: not writing {path}");
                } else {
                    self.files
                        .write(&path, &text)
                        .map_err(|source| MigrationError::Write { path, source })?;
                }
                Ok(FileStatus::Updated { replacements })
            }
        }
    }
}
