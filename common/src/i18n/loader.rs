use std::borrow::Cow;
use std::collections::HashMap;
use std::str::FromStr;

use fluent_templates::Loader;
use fluent_templates::fluent_bundle::FluentValue;
use thiserror::Error;

use super::locales::supports_locale;
use super::{FALLBACK_LANGUAGE, LOADER, LanguageIdentifier};

/// `HashMap` wrapper used when passing Fluent arguments to lookups.
pub type Arguments<'a> = HashMap<Cow<'static, str>, FluentValue<'a>>;

/// Error raised when localisation data cannot satisfy a caller request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// Raised when the requested message slug is missing for the resolved locale.
    #[error("message `{key}` missing for locale `{locale}`")]
    MissingMessage {
        /// Message slug that was requested.
        key: String,
        /// Locale the lookup ran against.
        locale: String,
    },
}

/// Resolve localisation messages for a specific locale.
///
/// The loader falls back to `en-GB` when the requested locale is not
/// recognised.
#[derive(Clone, Debug)]
pub struct Localizer {
    language: LanguageIdentifier,
    fallback_used: bool,
}

impl Localizer {
    /// Create a localizer for `locale`, falling back to
    /// [`FALLBACK_LOCALE`](super::FALLBACK_LOCALE).
    ///
    /// ```
    /// use common::i18n::Localizer;
    ///
    /// let french = Localizer::new(Some("fr"));
    /// assert_eq!(french.locale(), "fr");
    /// assert!(!french.used_fallback());
    ///
    /// let fallback = Localizer::new(Some("zz"));
    /// assert_eq!(fallback.locale(), "en-GB");
    /// assert!(fallback.used_fallback());
    /// ```
    #[must_use]
    pub fn new(locale: Option<&str>) -> Self {
        match locale {
            Some(value) if supports_locale(value) => match LanguageIdentifier::from_str(value) {
                Ok(identifier) => Self {
                    language: identifier,
                    fallback_used: false,
                },
                Err(_) => Self::fallback(),
            },
            _ => Self::fallback(),
        }
    }

    /// Return the resolved locale identifier.
    #[must_use]
    pub fn language(&self) -> &LanguageIdentifier {
        &self.language
    }

    /// Return the resolved locale as a string.
    #[must_use]
    pub fn locale(&self) -> String {
        self.language.to_string()
    }

    /// Whether the fallback locale was used.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.fallback_used
    }

    /// Fetch the translated message for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingMessage`] when no bundle defines `key`.
    pub fn message(&self, key: &str) -> Result<String, I18nError> {
        self.lookup(key, None)
    }

    /// Fetch the translated message with Fluent arguments.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingMessage`] when no bundle defines `key`.
    pub fn message_with_args(&self, key: &str, args: &Arguments<'_>) -> Result<String, I18nError> {
        self.lookup(key, Some(args))
    }

    /// Fetch a message, substituting the slug itself when it is missing.
    ///
    /// Report rendering uses this so a gap in a bundle degrades to a visible
    /// slug instead of dropping the line.
    #[must_use]
    pub fn message_or_key(&self, key: &str, args: &Arguments<'_>) -> String {
        self.message_with_args(key, args).unwrap_or_else(|error| {
            log::warn!(target: "i18n::loader", "{error}");
            key.to_owned()
        })
    }

    fn lookup(&self, key: &str, args: Option<&Arguments<'_>>) -> Result<String, I18nError> {
        let maybe_value = match args {
            Some(arguments) => LOADER.try_lookup_with_args(&self.language, key, arguments),
            None => LOADER.try_lookup(&self.language, key),
        };

        maybe_value.ok_or_else(|| I18nError::MissingMessage {
            key: key.to_owned(),
            locale: self.language.to_string(),
        })
    }

    fn fallback() -> Self {
        Self {
            language: FALLBACK_LANGUAGE.clone(),
            fallback_used: true,
        }
    }
}
