//! Bundled locales.

use std::collections::BTreeSet;

use fluent_templates::{Loader, loader::LanguageIdentifier};
use once_cell::sync::Lazy;

use super::LOADER;

static BUNDLED: Lazy<BTreeSet<String>> =
    Lazy::new(|| LOADER.locales().map(ToString::to_string).collect());

/// Locales with an embedded bundle, in tag order.
pub fn available_locales() -> impl Iterator<Item = &'static str> {
    BUNDLED.iter().map(String::as_str)
}

/// Whether `locale` names a bundled language.
///
/// Tags are canonicalised first, so `EN-gb` matches `en-GB`.
#[must_use]
pub fn supports_locale(locale: &str) -> bool {
    locale
        .parse::<LanguageIdentifier>()
        .is_ok_and(|identifier| BUNDLED.contains(&identifier.to_string()))
}
