//! Localisation loader for tooling reports.
//!
//! Fluent resources under `locales/` are embedded at compile time, so the
//! binaries resolve translated report lines without touching the filesystem.
//! The API is a thin wrapper around `fluent-templates` that records whether
//! the fallback bundle was used and surfaces missing messages as errors.
//!
//! Locale resolution is handled by [`resolve_localizer`], which evaluates an
//! explicit override, the [`LOCALE_ENV`] variable, and the configured locale
//! in priority order before falling back to the bundled locale.

use fluent_templates::static_loader;
use unic_langid::langid;

/// Re-export the Fluent value type for constructing message arguments.
pub use fluent_templates::fluent_bundle::FluentValue;
pub(crate) use fluent_templates::loader::LanguageIdentifier;

const FALLBACK_LITERAL: &str = "en-GB";

static_loader! {
    pub(crate) static LOADER = {
        locales: "./locales",
        fallback_language: "en-GB",
        // Report lines are written to terminals and files, so placeables are
        // rendered without bidi isolation marks.
        customise: |bundle| bundle.set_use_isolating(false),
    };
}

/// Locale used when no candidate resolves to a bundled language.
pub const FALLBACK_LOCALE: &str = FALLBACK_LITERAL;
pub(crate) const FALLBACK_LANGUAGE: LanguageIdentifier = langid!("en-GB");

/// Environment variable consulted for the report locale.
pub const LOCALE_ENV: &str = "CYBERWATCH_LOCALE";

mod loader;
mod locales;
mod selection;

pub use loader::{Arguments, I18nError, Localizer};
pub use locales::{available_locales, supports_locale};
pub use selection::{LocaleSelection, LocaleSource, normalise_locale, resolve_localizer};

#[cfg(test)]
mod tests;
