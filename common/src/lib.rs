//! Shared helpers for the Cyberwatch tooling: localised report messages and
//! locale resolution.

pub mod i18n;

pub use i18n::{
    Arguments, FALLBACK_LOCALE, FluentValue, I18nError, LOCALE_ENV, LocaleSelection, LocaleSource,
    Localizer, available_locales, normalise_locale, resolve_localizer, supports_locale,
};
