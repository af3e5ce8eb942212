//! Report locale resolution.
//!
//! Candidates are tried in order: the `--locale` flag, [`LOCALE_ENV`], then
//! `cyberwatch.toml`. Blank candidates are ignored; unsupported ones are
//! logged and skipped.

use std::fmt;

use log::{debug, warn};

use super::{FALLBACK_LOCALE, LOCALE_ENV, Localizer, supports_locale};

/// Where the report locale came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleSource {
    /// The `--locale` flag.
    Flag,
    /// The [`LOCALE_ENV`] environment variable.
    Environment,
    /// The `locale` key of `cyberwatch.toml`.
    Configuration,
    /// No candidate applied.
    Fallback,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Flag => "--locale",
            Self::Environment => LOCALE_ENV,
            Self::Configuration => "cyberwatch.toml",
            Self::Fallback => "fallback",
        };
        formatter.write_str(label)
    }
}

/// The resolved report language and its origin.
#[derive(Clone, Debug)]
pub struct LocaleSelection {
    /// Localizer for the chosen language.
    pub localizer: Localizer,
    /// Which candidate won.
    pub source: LocaleSource,
}

impl LocaleSelection {
    /// Canonical tag of the chosen language.
    #[must_use]
    pub fn locale(&self) -> String {
        self.localizer.locale()
    }

    /// Consumes the selection, returning the localizer.
    #[must_use]
    pub fn into_localizer(self) -> Localizer {
        self.localizer
    }

    /// Logs the outcome at debug level under `target`.
    pub fn log_outcome(&self, target: &str) {
        debug!(target: target, "report locale `{}` from {}", self.locale(), self.source);
    }
}

/// Picks the report locale from the flag, environment, and configuration.
#[must_use]
pub fn resolve_localizer(
    flag: Option<&str>,
    environment: Option<String>,
    configuration: Option<&str>,
) -> LocaleSelection {
    let candidates = [
        (LocaleSource::Flag, flag),
        (LocaleSource::Environment, environment.as_deref()),
        (LocaleSource::Configuration, configuration),
    ];

    for (source, raw) in candidates {
        let Some(tag) = normalise_locale(raw) else {
            continue;
        };
        if supports_locale(tag) {
            return LocaleSelection {
                localizer: Localizer::new(Some(tag)),
                source,
            };
        }
        warn!(target: "i18n", "ignoring unsupported locale `{tag}` from {source}");
    }

    debug!(target: "i18n", "no usable locale candidate; using {FALLBACK_LOCALE}");
    LocaleSelection {
        localizer: Localizer::new(None),
        source: LocaleSource::Fallback,
    }
}

/// Trims a locale candidate, treating blank input as absent.
#[must_use]
pub fn normalise_locale(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|tag| !tag.is_empty())
}
