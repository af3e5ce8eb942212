//! Migration outcomes and their localised rendering.
//!
//! Every file yields a [`FileOutcome`] tagged updated, skipped, or failed.
//! The batch renders as a start banner, one line per file, an unconditional
//! completion banner, and a `processed/total` summary, where processed
//! counts updated and skipped files.

use std::io::Write;

use camino::Utf8PathBuf;
use common::i18n::{Arguments, FluentValue, Localizer};
use serde::Serialize;

use crate::error::Result;
use crate::output::{message_args, write_lines};

/// What happened to one file.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// The file was rewritten (or would have been, in a dry run).
    Updated {
        /// Occurrences replaced across all rules.
        replacements: usize,
    },
    /// The file already carried the migration marker.
    Skipped,
    /// The file could not be read or written.
    Failed {
        /// Human-readable failure description.
        detail: String,
    },
}

/// Outcome for one governed file.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FileOutcome {
    /// Path relative to the project root.
    pub path: Utf8PathBuf,
    /// What happened.
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Aggregated outcomes of one migrator run.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BatchReport {
    outcomes: Vec<FileOutcome>,
    dry_run: bool,
}

impl BatchReport {
    /// Creates a report from per-file outcomes.
    #[must_use]
    pub const fn new(outcomes: Vec<FileOutcome>, dry_run: bool) -> Self {
        Self { outcomes, dry_run }
    }

    /// Per-file outcomes in processing order.
    #[must_use]
    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    /// Whether the run left files untouched.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Number of files governed by the run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Files that were updated or skipped.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| !matches!(outcome.status, FileStatus::Failed { .. }))
            .count()
    }

    /// Files that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.total() - self.processed()
    }

    /// Renders the report as lines in the localizer's language.
    #[must_use]
    pub fn render(&self, localizer: &Localizer) -> Vec<String> {
        let none = Arguments::new();
        let mut lines = Vec::with_capacity(self.outcomes.len() + 6);

        if self.dry_run {
            lines.push(localizer.message_or_key("migrate-dry-run", &none));
        }
        lines.push(localizer.message_or_key("migrate-start", &none));
        lines.push(String::new());

        lines.extend(
            self.outcomes
                .iter()
                .map(|outcome| render_outcome(outcome, localizer)),
        );

        lines.push(String::new());
        lines.push(localizer.message_or_key("migrate-finished", &none));
        lines.push(self.summary(localizer));
        lines
    }

    /// Renders only the failure lines and the summary.
    #[must_use]
    pub fn render_quiet(&self, localizer: &Localizer) -> Vec<String> {
        let mut lines: Vec<String> = self
            .outcomes
            .iter()
            .filter(|outcome| matches!(outcome.status, FileStatus::Failed { .. }))
            .map(|outcome| render_outcome(outcome, localizer))
            .collect();
        lines.push(self.summary(localizer));
        lines
    }

    fn summary(&self, localizer: &Localizer) -> String {
        let summary = message_args([
            ("processed", FluentValue::from(self.processed())),
            ("total", FluentValue::from(self.total())),
        ]);
        localizer.message_or_key("migrate-summary", &summary)
    }

    /// Writes the rendered report to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ToolError::WriteFailed`] when `out` rejects a
    /// line.
    pub fn write_to(&self, out: &mut dyn Write, localizer: &Localizer) -> Result<()> {
        write_lines(out, self.render(localizer))
    }
}

fn render_outcome(outcome: &FileOutcome, localizer: &Localizer) -> String {
    let path = FluentValue::from(outcome.path.as_str());
    match &outcome.status {
        FileStatus::Updated { replacements } => localizer.message_or_key(
            "migrate-updated",
            &message_args([("path", path), ("count", FluentValue::from(*replacements))]),
        ),
        FileStatus::Skipped => {
            localizer.message_or_key("migrate-skipped", &message_args([("path", path)]))
        }
        FileStatus::Failed { detail } => localizer.message_or_key(
            "migrate-failed",
            &message_args([("path", path), ("detail", FluentValue::from(detail.as_str()))]),
        ),
    }
}
