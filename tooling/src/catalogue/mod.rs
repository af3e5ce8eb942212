//! Translation catalogue parsing and the English section fix-up.
//!
//! The catalogue is the dashboard's `src/i18n/index.js`, an object literal
//! with an `en: { ... },` section followed by an `fr: { ... }` section whose
//! entries read `'key': 'value'`. Parsing is pattern-based, not a JavaScript
//! parser, and only recognises single-quoted entries.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::Result;

mod english;

pub use english::ENGLISH_FIXES;

#[expect(
    clippy::expect_used,
    reason = "the patterns are literals checked by the tests below"
)]
static EN_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)en:\s*\{(.*?)^\s*\},").expect("en section pattern"));

#[expect(
    clippy::expect_used,
    reason = "the patterns are literals checked by the tests below"
)]
static FR_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?ms)fr:\s*\{(.*?)^\s*\}").expect("fr section pattern"));

#[expect(
    clippy::expect_used,
    reason = "the patterns are literals checked by the tests below"
)]
static ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'([^']+)':\s*'[^']*'").expect("entry pattern"));

/// Keys defined by a catalogue, per language section.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Catalogue {
    en: BTreeSet<String>,
    fr: BTreeSet<String>,
}

fn section_keys(section: &Regex, text: &str) -> BTreeSet<String> {
    section
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|body| {
            ENTRY
                .captures_iter(body.as_str())
                .filter_map(|entry| entry.get(1))
                .map(|key| key.as_str().to_owned())
                .collect()
        })
        .unwrap_or_default()
}

impl Catalogue {
    /// Extracts the keys of the `en` and `fr` sections of `text`.
    ///
    /// A missing section contributes no keys.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            en: section_keys(&EN_SECTION, text),
            fr: section_keys(&FR_SECTION, text),
        }
    }

    /// Keys of the `en` section.
    #[must_use]
    pub const fn en_keys(&self) -> &BTreeSet<String> {
        &self.en
    }

    /// Keys of the `fr` section.
    #[must_use]
    pub const fn fr_keys(&self) -> &BTreeSet<String> {
        &self.fr
    }

    /// Whether either section defines `key`.
    #[must_use]
    pub fn defines(&self, key: &str) -> bool {
        self.en.contains(key) || self.fr.contains(key)
    }

    /// Number of distinct keys across both sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.en.union(&self.fr).count()
    }

    /// Whether no key was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.fr.is_empty()
    }
}

/// One table entry that matched during [`fix_english`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EnglishFix {
    /// French value found in the `en` section.
    pub french: String,
    /// English value written in its place.
    pub english: String,
    /// Number of entries rewritten.
    pub count: usize,
}

/// Rewritten catalogue text plus the fixes applied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnglishFixOutcome {
    /// Catalogue text after all fixes.
    pub text: String,
    /// Matching table entries, in table order.
    pub fixes: Vec<EnglishFix>,
}

impl EnglishFixOutcome {
    /// Total entries rewritten.
    #[must_use]
    pub fn total(&self) -> usize {
        self.fixes.iter().map(|fix| fix.count).sum()
    }
}

fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Replaces French values left in the `en` section with English ones.
///
/// For each `(french, english)` pair, an entry `'key': '<french>'` reachable
/// from `en: {` without crossing a closing brace is rewritten to
/// `'key': '<english>'`. The English value has backslashes and single quotes
/// escaped. Entries in other sections are untouched.
///
/// # Errors
///
/// Returns [`crate::error::ToolError::Pattern`] if a search pattern built
/// from the table fails to compile.
pub fn fix_english(text: &str, table: &[(&str, &str)]) -> Result<EnglishFixOutcome> {
    let mut content = text.to_owned();
    let mut fixes = Vec::new();

    for &(french, english) in table {
        let pattern = Regex::new(&format!(
            r"(en:\s*\{{[^}}]*?)'([^']*?)':\s*'{}'",
            regex::escape(french)
        ))?;
        let count = pattern.find_iter(&content).count();
        if count == 0 {
            continue;
        }

        let escaped = escape_single_quoted(english);
        content = pattern
            .replace_all(&content, |captures: &Captures<'_>| {
                let head = captures.get(1).map_or("", |m| m.as_str());
                let key = captures.get(2).map_or("", |m| m.as_str());
                format!("{head}'{key}': '{escaped}'")
            })
            .into_owned();
        log::debug!(target: "catalogue", "replaced `{french}` with `{english}` ({count})");
        fixes.push(EnglishFix {
            french: french.to_owned(),
            english: english.to_owned(),
            count,
        });
    }

    Ok(EnglishFixOutcome {
        text: content,
        fixes,
    })
}
