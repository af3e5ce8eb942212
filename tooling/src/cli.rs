//! CLI argument definitions for `cyberwatch-migrate`.
//!
//! The migrator runs when no subcommand is given, so the apply arguments are
//! flattened into [`Cli`] as well as offered under `apply`.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Rewrite hardcoded dashboard strings into translation calls.
#[derive(Parser, Debug, Default)]
#[command(name = "cyberwatch-migrate")]
#[command(version, about)]
#[command(long_about = concat!(
    "Rewrite hardcoded dashboard strings into translation calls.\n\n",
    "Each governed file is checked for the translation import. Files that ",
    "already carry it are skipped; the others receive the import and have ",
    "every mapped literal replaced by a `t('<key>', lang)` call. A failure in ",
    "one file is reported and the batch continues.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Migrate the built-in dashboard and connectors pages:\n",
    "    $ cyberwatch-migrate --root ../dashboard\n\n",
    "  Preview a custom rule book in French:\n",
    "    $ cyberwatch-migrate apply --rules rules.toml --dry-run --locale fr\n\n",
    "  List keys used in code but missing from the catalogue:\n",
    "    $ cyberwatch-migrate audit --json\n\n",
    "  Replace French text left in the English catalogue section:\n",
    "    $ cyberwatch-migrate fix-english --dry-run",
))]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Migration arguments (used when no subcommand is given).
    #[command(flatten)]
    pub apply: ApplyArgs,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Migrate governed files (default when no subcommand given).
    Apply(ApplyArgs),

    /// Report translation keys used in code but missing from the catalogue.
    Audit(AuditArgs),

    /// Replace French values left in the English catalogue section.
    FixEnglish(FixEnglishArgs),
}

/// Arguments shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Dashboard project root holding `src/` and `cyberwatch.toml`.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: Utf8PathBuf,

    /// Report language (overrides `CYBERWATCH_LOCALE` and `cyberwatch.toml`).
    #[arg(long, value_name = "TAG")]
    pub locale: Option<String>,
}

impl Default for ProjectArgs {
    fn default() -> Self {
        Self {
            root: Utf8PathBuf::from("."),
            locale: None,
        }
    }
}

/// Arguments for the apply command.
#[derive(Parser, Debug, Clone, Default)]
pub struct ApplyArgs {
    /// Project location and report language.
    #[command(flatten)]
    pub project: ProjectArgs,

    /// TOML rule book to use instead of the built-in tables.
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<Utf8PathBuf>,

    /// Compute outcomes without writing any file.
    #[arg(long)]
    pub dry_run: bool,

    /// Only print failures and the summary.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the audit command.
#[derive(Parser, Debug, Clone, Default)]
pub struct AuditArgs {
    /// Project location and report language.
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Catalogue file, relative to the root [default: src/i18n/index.js].
    #[arg(short, long, value_name = "FILE")]
    pub catalogue: Option<Utf8PathBuf>,

    /// Output in JSON format for scripting.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the fix-english command.
#[derive(Parser, Debug, Clone, Default)]
pub struct FixEnglishArgs {
    /// Project location and report language.
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Catalogue file, relative to the root [default: src/i18n/index.js].
    #[arg(short, long, value_name = "FILE")]
    pub catalogue: Option<Utf8PathBuf>,

    /// Report the fixes without rewriting the catalogue.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Returns the effective apply arguments.
    ///
    /// An explicit `apply` subcommand wins; otherwise the flattened
    /// arguments are used.
    #[must_use]
    pub fn apply_args(&self) -> &ApplyArgs {
        match &self.command {
            Some(Command::Apply(args)) => args,
            Some(Command::Audit(_) | Command::FixEnglish(_)) | None => &self.apply,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
