//! Finds translation keys used in code but missing from the catalogue.
//!
//! Every `.js` and `.jsx` file below `src/` is scanned for calls of the form
//! `t('<key>', <ident>)`. Keys not defined in either catalogue section are
//! reported with the files that use them. `node_modules`, `dist`, and `.git`
//! directories are skipped; unreadable files are reported and the scan
//! continues.

use std::collections::BTreeMap;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use glob::{MatchOptions, Pattern};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use common::i18n::{Arguments, FluentValue, Localizer};

use crate::catalogue::Catalogue;
use crate::error::Result;
use crate::output::{message_args, write_lines};

const SOURCE_DIR: &str = "src";
const SKIPPED_DIRS: &[&str] = &["node_modules", "dist", ".git"];
const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx"];

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal checked by the tests below"
)]
static TRANSLATION_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"t\('([^']+)',\s*\w+\)").expect("translation call pattern"));

/// A source file that could not be read during the scan.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UnreadableFile {
    /// Path relative to the project root.
    pub path: Utf8PathBuf,
    /// Human-readable failure description.
    pub detail: String,
}

/// Translation keys used by the source tree.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct KeyUsage {
    /// Key to the files using it, in scan order.
    pub keys: BTreeMap<String, Vec<Utf8PathBuf>>,
    /// Files skipped because they could not be read.
    pub unreadable: Vec<UnreadableFile>,
}

/// Result of comparing key usage against a catalogue.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct AuditReport {
    /// Distinct keys defined by the catalogue.
    pub defined: usize,
    /// Distinct keys used in the code.
    pub used: usize,
    /// Keys used but not defined, with the files using them.
    pub missing: BTreeMap<String, Vec<Utf8PathBuf>>,
    /// Files skipped because they could not be read.
    pub unreadable: Vec<UnreadableFile>,
}

impl AuditReport {
    /// Whether every key in use is defined.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }

    /// Renders the report in the localizer's language.
    ///
    /// `catalogue` names the catalogue in the closing advice.
    #[must_use]
    pub fn render(&self, localizer: &Localizer, catalogue: &Utf8Path) -> Vec<String> {
        let none = Arguments::new();
        let mut lines = vec![localizer.message_or_key("audit-start", &none), String::new()];

        lines.extend(self.unreadable.iter().map(|file| {
            localizer.message_or_key(
                "audit-unreadable",
                &message_args([
                    ("path", FluentValue::from(file.path.as_str())),
                    ("detail", FluentValue::from(file.detail.as_str())),
                ]),
            )
        }));
        lines.push(localizer.message_or_key(
            "audit-defined-keys",
            &message_args([("count", FluentValue::from(self.defined))]),
        ));
        lines.push(localizer.message_or_key(
            "audit-used-keys",
            &message_args([("count", FluentValue::from(self.used))]),
        ));
        lines.push(String::new());

        if self.is_clean() {
            lines.push(localizer.message_or_key("audit-clean", &none));
            return lines;
        }

        lines.push(localizer.message_or_key(
            "audit-missing-header",
            &message_args([("count", FluentValue::from(self.missing.len()))]),
        ));
        for (key, files) in &self.missing {
            lines.push(String::new());
            lines.push(localizer.message_or_key(
                "audit-missing-key",
                &message_args([("key", FluentValue::from(key.as_str()))]),
            ));
            lines.push(format!("   {}", localizer.message_or_key("audit-used-in", &none)));
            lines.extend(files.iter().map(|file| format!("   - {file}")));
        }
        lines.push(String::new());
        lines.push(localizer.message_or_key(
            "audit-advice",
            &message_args([("catalogue", FluentValue::from(catalogue.as_str()))]),
        ));
        lines
    }

    /// Writes the rendered report to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ToolError::WriteFailed`] when `out` rejects a
    /// line.
    pub fn write_to(
        &self,
        out: &mut dyn Write,
        localizer: &Localizer,
        catalogue: &Utf8Path,
    ) -> Result<()> {
        write_lines(out, self.render(localizer, catalogue))
    }
}

/// Collects `t('<key>', <ident>)` keys from `text`.
#[must_use]
pub fn keys_in(text: &str) -> Vec<&str> {
    TRANSLATION_CALL
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|key| key.as_str())
        .collect()
}

fn is_skipped(relative: &Utf8Path) -> bool {
    relative
        .components()
        .any(|component| SKIPPED_DIRS.contains(&component.as_str()))
}

fn source_files(root: &Utf8Path) -> Result<Vec<Utf8PathBuf>> {
    let options = MatchOptions {
        require_literal_leading_dot: false,
        ..MatchOptions::new()
    };
    let base = Pattern::escape(root.join(SOURCE_DIR).as_str());
    let mut files = Vec::new();

    for extension in SOURCE_EXTENSIONS {
        for entry in glob::glob_with(&format!("{base}/**/*.{extension}"), options)? {
            let Ok(path) = entry else {
                continue;
            };
            let Ok(path) = Utf8PathBuf::from_path_buf(path) else {
                continue;
            };
            let relative = path.strip_prefix(root).map_or(path.as_path(), |rel| rel);
            if path.is_file() && !is_skipped(relative) {
                files.push(relative.to_owned());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Scans `root/src` for translation keys.
///
/// # Errors
///
/// Returns [`crate::error::ToolError::Glob`] when the root cannot be turned
/// into a search pattern.
pub fn scan_usage(root: &Utf8Path) -> Result<KeyUsage> {
    let mut usage = KeyUsage::default();

    for relative in source_files(root)? {
        let text = match std::fs::read_to_string(root.join(&relative)) {
            Ok(text) => text,
            Err(error) => {
                debug!(target: "audit", "cannot read {relative}: {error}");
                usage.unreadable.push(UnreadableFile {
                    path: relative,
                    detail: error.to_string(),
                });
                continue;
            }
        };

        for key in keys_in(&text) {
            trace!(target: "audit", "{relative}: uses `{key}`");
            let files = usage.keys.entry(key.to_owned()).or_default();
            if files.last() != Some(&relative) {
                files.push(relative.clone());
            }
        }
    }

    Ok(usage)
}

/// Compares `usage` with `catalogue`.
#[must_use]
pub fn compare(catalogue: &Catalogue, usage: KeyUsage) -> AuditReport {
    let used = usage.keys.len();
    let missing = usage
        .keys
        .into_iter()
        .filter(|(key, _)| !catalogue.defines(key))
        .collect();

    AuditReport {
        defined: catalogue.len(),
        used,
        missing,
        unreadable: usage.unreadable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn write(root: &Utf8Path, relative: &str, text: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().expect("file has a parent")).expect("mkdir");
        std::fs::write(path, text).expect("write fixture");
    }

    #[rstest]
    #[case("{t('users.title', lang)}", vec!["users.title"])]
    #[case("t('a.b',lang) t('c.d',   language)", vec!["a.b", "c.d"])]
    #[case("t(\"double.quoted\", lang)", vec![])]
    #[case("t(`users.${id}`, lang)", vec![])]
    #[case("t('no.lang')", vec![])]
    fn finds_static_translation_calls(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(keys_in(text), expected);
    }

    #[rstest]
    fn scans_source_tree_and_skips_vendor_dirs() {
        let dir = TempDir::new().expect("temp dir");
        let root = Utf8Path::from_path(dir.path()).expect("UTF-8 temp dir");
        write(root, "src/pages/Users.jsx", "{t('users.title', lang)}");
        write(root, "src/components/Nav.js", "t('users.title', lang); t('nav.home', lang)");
        write(root, "src/node_modules/lib/index.js", "t('vendor.key', lang)");
        write(root, "src/dist/bundle.js", "t('bundle.key', lang)");
        write(root, "src/styles.css", "t('css.key', lang)");
        write(root, "other/Outside.jsx", "t('outside.key', lang)");

        let usage = scan_usage(root).expect("scan succeeds");

        let keys: Vec<&str> = usage.keys.keys().map(String::as_str).collect();
        assert_eq!(keys, ["nav.home", "users.title"]);
        assert_eq!(
            usage.keys.get("users.title").map(Vec::len),
            Some(2),
            "both files should be recorded"
        );
        assert!(usage.unreadable.is_empty());
    }

    #[rstest]
    fn reports_keys_missing_from_the_catalogue() {
        let catalogue = Catalogue::parse("en: {\n  'users.title': 'Users',\n},\nfr: {\n  'users.title': 'Utilisateurs',\n}\n");
        let mut usage = KeyUsage::default();
        usage.keys.insert(
            "users.title".to_owned(),
            vec![Utf8PathBuf::from("src/pages/Users.jsx")],
        );
        usage.keys.insert(
            "users.deleted".to_owned(),
            vec![Utf8PathBuf::from("src/pages/Users.jsx")],
        );

        let report = compare(&catalogue, usage);

        assert_eq!(report.defined, 1);
        assert_eq!(report.used, 2);
        assert!(!report.is_clean());
        assert_eq!(
            report.missing.keys().collect::<Vec<_>>(),
            vec!["users.deleted"]
        );
    }

    #[rstest]
    fn records_each_file_once_per_key() {
        let dir = TempDir::new().expect("temp dir");
        let root = Utf8Path::from_path(dir.path()).expect("UTF-8 temp dir");
        write(root, "src/App.jsx", "t('a.b', lang); t('a.b', lang); t('a.b', lang)");

        let usage = scan_usage(root).expect("scan succeeds");

        assert_eq!(
            usage.keys.get("a.b"),
            Some(&vec![Utf8PathBuf::from("src/App.jsx")])
        );
    }

    #[rstest]
    fn renders_missing_keys_with_their_files() {
        let mut report = AuditReport {
            defined: 12,
            used: 3,
            ..AuditReport::default()
        };
        report.missing.insert(
            "users.deleted".to_owned(),
            vec![
                Utf8PathBuf::from("src/pages/Users.jsx"),
                Utf8PathBuf::from("src/pages/Roles.jsx"),
            ],
        );

        let lines = report.render(&Localizer::new(None), Utf8Path::new("src/i18n/index.js"));

        assert_eq!(
            lines,
            vec![
                "Searching for deleted translation keys",
                "",
                "✓ 12 keys found in the catalogue",
                "✓ 3 distinct keys used in the code",
                "",
                "⚠️  1 deleted key(s) found:",
                "",
                "📌 Key: users.deleted",
                "   Used in:",
                "   - src/pages/Users.jsx",
                "   - src/pages/Roles.jsx",
                "",
                "These keys must be replaced by their original text in the files above, or added back to src/i18n/index.js",
            ]
        );
    }

    #[rstest]
    fn clean_reports_end_with_the_all_clear() {
        let report = AuditReport {
            defined: 2,
            used: 2,
            ..AuditReport::default()
        };

        let lines = report.render(&Localizer::new(None), Utf8Path::new("src/i18n/index.js"));

        assert_eq!(
            lines.last().map(String::as_str),
            Some("✅ No deleted keys found. Every key in use is defined.")
        );
    }

    #[rstest]
    fn unreadable_files_serialise_with_their_paths() {
        let report = AuditReport {
            unreadable: vec![UnreadableFile {
                path: Utf8PathBuf::from("src/pages/Broken.jsx"),
                detail: "stream did not contain valid UTF-8".to_owned(),
            }],
            ..AuditReport::default()
        };

        let json = serde_json::to_value(&report).expect("report should serialise");

        assert_eq!(json["unreadable"][0]["path"], "src/pages/Broken.jsx");
        assert_eq!(json["missing"], serde_json::json!({}));
    }
}
