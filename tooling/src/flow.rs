//! Command handlers for `cyberwatch-migrate`.
//!
//! Each handler takes a loaded [`ProjectContext`] and an output stream, so
//! the binary stays a thin shell around parsing and exit codes.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use common::i18n::{FluentValue, LOCALE_ENV, Localizer, resolve_localizer};
use cyberwatch::SharedConfig;
use log::{debug, info};

use crate::audit::{AuditReport, compare, scan_usage};
use crate::catalogue::{Catalogue, ENGLISH_FIXES, EnglishFixOutcome, fix_english};
use crate::cli::{ApplyArgs, AuditArgs, FixEnglishArgs, ProjectArgs};
use crate::error::{Result, ToolError};
use crate::migrate::Migrator;
use crate::output::{message_args, write_lines};
use crate::report::BatchReport;
use crate::rules::RuleBook;

/// Project root, configuration, and report language for one invocation.
#[derive(Debug)]
pub struct ProjectContext {
    root: Utf8PathBuf,
    config: SharedConfig,
    localizer: Localizer,
}

impl ProjectContext {
    /// Loads the context, reading `CYBERWATCH_LOCALE` from the process.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Config`] when `cyberwatch.toml` is malformed.
    pub fn load(args: &ProjectArgs) -> Result<Self> {
        Self::load_with(args, std::env::var(LOCALE_ENV).ok())
    }

    /// Loads the context with an explicit environment locale.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Config`] when `cyberwatch.toml` is malformed.
    pub fn load_with(args: &ProjectArgs, environment_locale: Option<String>) -> Result<Self> {
        let config = SharedConfig::load_from(&args.root)?;
        let selection = resolve_localizer(
            args.locale.as_deref(),
            environment_locale,
            config.locale(),
        );
        selection.log_outcome("flow");

        Ok(Self {
            root: args.root.clone(),
            config,
            localizer: selection.into_localizer(),
        })
    }

    /// Project root every relative path resolves against.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Localizer for user-facing output.
    #[must_use]
    pub const fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    /// Catalogue location relative to the root: the flag, else the configuration.
    #[must_use]
    pub fn catalogue<'a>(&'a self, flag: Option<&'a Utf8Path>) -> &'a Utf8Path {
        flag.unwrap_or_else(|| self.config.catalogue())
    }

    /// Picks the rule book: `--rules`, then `rules.path`, then the built-in tables.
    ///
    /// A `--rules` path is used as given; `rules.path` resolves against the root.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::RuleBook`] when the chosen file is unreadable or
    /// invalid.
    pub fn rule_book(&self, flag: Option<&Utf8Path>) -> Result<RuleBook> {
        let configured = self.config.rules.path.as_deref().map(|path| self.root.join(path));
        match flag.map(Utf8Path::to_owned).or(configured) {
            Some(path) => {
                debug!(target: "flow", "loading rule book {path}");
                Ok(RuleBook::load(&path)?)
            }
            None => Ok(RuleBook::builtin()),
        }
    }

    fn read_catalogue(&self, relative: &Utf8Path) -> Result<(Utf8PathBuf, String)> {
        let path = self.root.join(relative);
        let text = std::fs::read_to_string(&path).map_err(|source| ToolError::CatalogueRead {
            path: path.clone(),
            source,
        })?;
        Ok((path, text))
    }
}

/// Runs the migrator and writes its report.
///
/// # Errors
///
/// Returns an error when the rule book cannot be loaded or `out` rejects
/// the report. Per-file failures are part of the returned report.
pub fn run_apply(
    context: &ProjectContext,
    args: &ApplyArgs,
    out: &mut dyn Write,
) -> Result<BatchReport> {
    let book = context.rule_book(args.rules.as_deref())?;
    info!(
        target: "flow",
        "migrating {} file(s) under {}",
        book.len(),
        context.root()
    );

    let report = Migrator::new(context.root(), &book)
        .dry_run(args.dry_run)
        .run();

    if args.quiet {
        write_lines(out, report.render_quiet(context.localizer()))?;
    } else {
        report.write_to(out, context.localizer())?;
    }
    Ok(report)
}

/// Audits catalogue coverage and writes the findings.
///
/// # Errors
///
/// Returns an error when the catalogue cannot be read, the source tree
/// cannot be searched, or `out` rejects the output.
pub fn run_audit(
    context: &ProjectContext,
    args: &AuditArgs,
    out: &mut dyn Write,
) -> Result<AuditReport> {
    let relative = context.catalogue(args.catalogue.as_deref());
    let (_, text) = context.read_catalogue(relative)?;
    let catalogue = Catalogue::parse(&text);
    let report = compare(&catalogue, scan_usage(context.root())?);

    if args.json {
        let json = serde_json::to_string_pretty(&report)?;
        write_lines(out, [json])?;
    } else {
        report.write_to(out, context.localizer(), relative)?;
    }
    Ok(report)
}

/// Rewrites French values in the English catalogue section.
///
/// # Errors
///
/// Returns an error when the catalogue cannot be read or written, or `out`
/// rejects the output.
pub fn run_fix_english(
    context: &ProjectContext,
    args: &FixEnglishArgs,
    out: &mut dyn Write,
) -> Result<EnglishFixOutcome> {
    let (path, text) = context.read_catalogue(context.catalogue(args.catalogue.as_deref()))?;
    let outcome = fix_english(&text, ENGLISH_FIXES)?;

    if args.dry_run {
        debug!(target: "flow", "dry run: not writing {path}");
    } else if outcome.total() > 0 {
        std::fs::write(&path, &outcome.text)
            .map_err(|source| ToolError::CatalogueWrite { path, source })?;
    }

    write_lines(out, render_fixes(&outcome, context.localizer()))?;
    Ok(outcome)
}

fn render_fixes(outcome: &EnglishFixOutcome, localizer: &Localizer) -> Vec<String> {
    let mut lines: Vec<String> = outcome
        .fixes
        .iter()
        .map(|fix| {
            localizer.message_or_key(
                "fix-english-replaced",
                &message_args([
                    ("french", FluentValue::from(fix.french.as_str())),
                    ("english", FluentValue::from(fix.english.as_str())),
                    ("count", FluentValue::from(fix.count)),
                ]),
            )
        })
        .collect();
    lines.push(String::new());
    lines.push(localizer.message_or_key(
        "fix-english-total",
        &message_args([("count", FluentValue::from(outcome.total()))]),
    ));
    lines
}
