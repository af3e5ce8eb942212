//! Rule sets mapping literal UI text to translation calls.
//!
//! A [`RuleBook`] maps each target file, by path relative to the project
//! root, to a [`FileRuleSet`]: the language variable used in the generated
//! calls plus an ordered list of [`TranslationRule`]s. Order is significant.
//! Rules run one after another against the same buffer, so a later rule sees
//! the text produced by earlier ones and may match inside an earlier
//! replacement.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use camino::{Utf8Path, Utf8PathBuf};

mod book;
mod builtin;

pub use book::RuleBookError;

/// Language variable used when a rule set does not name one.
pub const DEFAULT_LANG_VAR: &str = "lang";

/// Text substituted for a rule's pattern.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Replacement {
    /// A translation call, rendered as `<prefix>{t('<key>', <lang>)}`.
    Call {
        /// Literal text kept in front of the call, e.g. `name=`.
        prefix: String,
        /// Translation key passed to `t`.
        key: String,
    },
    /// Text inserted exactly as written.
    Verbatim(String),
}

impl Replacement {
    /// Renders the replacement for a file whose language variable is `lang_var`.
    ///
    /// ```
    /// use cyberwatch_tooling::rules::Replacement;
    ///
    /// let call = Replacement::Call { prefix: "name=".into(), key: "users.name".into() };
    /// assert_eq!(call.render("lang"), "name={t('users.name', lang)}");
    /// ```
    #[must_use]
    pub fn render(&self, lang_var: &str) -> String {
        match self {
            Self::Call { prefix, key } => format!("{prefix}{{t('{key}', {lang_var})}}"),
            Self::Verbatim(text) => text.clone(),
        }
    }
}

/// A literal substitution directive.
///
/// Matching is byte-for-byte: case, whitespace, and embedded quotes must all
/// agree. Patterns are never interpreted as regular expressions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TranslationRule {
    /// Literal text to find.
    pub pattern: String,
    /// Text substituted for every occurrence.
    pub replacement: Replacement,
}

impl TranslationRule {
    /// Replaces `pattern` with a bare `{t('<key>', <lang>)}` call.
    #[must_use]
    pub fn call(pattern: impl Into<String>, key: impl Into<String>) -> Self {
        Self::prefixed_call(pattern, "", key)
    }

    /// Replaces `pattern` with `<prefix>{t('<key>', <lang>)}`.
    #[must_use]
    pub fn prefixed_call(
        pattern: impl Into<String>,
        prefix: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: Replacement::Call {
                prefix: prefix.into(),
                key: key.into(),
            },
        }
    }

    /// Replaces `pattern` with `text` verbatim.
    #[must_use]
    pub fn verbatim(pattern: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: Replacement::Verbatim(text.into()),
        }
    }
}

/// The ordered rules for one target file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileRuleSet {
    /// Path relative to the project root.
    pub path: Utf8PathBuf,
    /// Variable holding the active language in generated calls.
    pub lang_var: String,
    /// Rules applied in order.
    pub rules: Vec<TranslationRule>,
}

impl FileRuleSet {
    /// Creates a rule set for `path` using [`DEFAULT_LANG_VAR`].
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, rules: Vec<TranslationRule>) -> Self {
        Self {
            path: path.into(),
            lang_var: DEFAULT_LANG_VAR.to_owned(),
            rules,
        }
    }

    /// Overrides the language variable.
    #[must_use]
    pub fn with_lang_var(mut self, lang_var: impl Into<String>) -> Self {
        self.lang_var = lang_var.into();
        self
    }
}

/// Mapping from relative file path to its rule set.
///
/// Files are independent of each other; iteration is ordered by path so
/// reports are stable between runs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RuleBook {
    files: BTreeMap<Utf8PathBuf, FileRuleSet>,
}

impl RuleBook {
    /// Creates an empty rule book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rule book shipped with the tooling.
    #[must_use]
    pub fn builtin() -> Self {
        let mut book = Self::new();
        for set in builtin::rule_sets() {
            book.files.insert(set.path.clone(), set);
        }
        book
    }

    /// Adds `set`, rejecting a second rule set for the same path.
    ///
    /// # Errors
    ///
    /// Returns [`RuleBookError::DuplicateFile`] when `set.path` is already
    /// present.
    pub fn insert(&mut self, set: FileRuleSet) -> Result<(), RuleBookError> {
        match self.files.entry(set.path.clone()) {
            Entry::Occupied(entry) => Err(RuleBookError::DuplicateFile {
                path: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(set);
                Ok(())
            }
        }
    }

    /// Returns the rule set for `path`, if any.
    #[must_use]
    pub fn get(&self, path: &Utf8Path) -> Option<&FileRuleSet> {
        self.files.get(path)
    }

    /// Iterates over rule sets in path order.
    pub fn iter(&self) -> impl Iterator<Item = &FileRuleSet> {
        self.files.values()
    }

    /// Number of governed files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the book governs no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        Replacement::Call { prefix: String::new(), key: "users.title".into() },
        "ln",
        "{t('users.title', ln)}"
    )]
    #[case(
        Replacement::Call { prefix: "64".into(), key: "dashboard.percent".into() },
        "lang",
        "64{t('dashboard.percent', lang)}"
    )]
    #[case(Replacement::Verbatim("/ 100".into()), "lang", "/ 100")]
    fn renders_replacements(
        #[case] replacement: Replacement,
        #[case] lang_var: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(replacement.render(lang_var), expected);
    }

    #[rstest]
    fn builtin_book_starts_the_dashboard_with_the_security_score() {
        let book = RuleBook::builtin();

        let dashboard = book
            .get(Utf8Path::new("src/pages/Dashboard.jsx"))
            .expect("dashboard rules");
        assert_eq!(dashboard.lang_var, "lang");
        assert_eq!(
            dashboard.rules.first(),
            Some(&TranslationRule::call(
                "\"Score de Sécurité AD\"",
                "dashboard.adSecurityScore"
            ))
        );
    }

    #[rstest]
    #[case("src/pages/Dashboard.jsx", 27)]
    #[case("src/pages/Connectors.jsx", 18)]
    #[case("src/pages/Compliance.jsx", 14)]
    #[case("src/pages/Users.jsx", 18)]
    #[case("src/pages/Automation.jsx", 31)]
    #[case("src/pages/Integrations.jsx", 4)]
    #[case("src/pages/Languages.jsx", 16)]
    #[case("src/pages/ML.jsx", 7)]
    #[case("src/pages/Bloodhound.jsx", 2)]
    #[case("src/pages/Pingcastle.jsx", 2)]
    #[case("src/pages/Rosetta.jsx", 2)]
    #[case("src/pages/Details.jsx", 26)]
    #[case("src/pages/Profile.jsx", 21)]
    #[case("src/pages/Remediation.jsx", 24)]
    #[case("src/components/Login.jsx", 12)]
    #[case("src/components/Register.jsx", 9)]
    fn builtin_book_governs_each_page(#[case] path: &str, #[case] rule_count: usize) {
        let book = RuleBook::builtin();

        let set = book.get(Utf8Path::new(path)).expect("page is governed");

        assert_eq!(set.rules.len(), rule_count);
        assert_eq!(set.lang_var, DEFAULT_LANG_VAR);
    }

    #[rstest]
    fn builtin_book_governs_nothing_else() {
        assert_eq!(RuleBook::builtin().len(), 16);
    }

    #[rstest]
    fn builtin_compliance_score_suffix_stays_verbatim() {
        let book = RuleBook::builtin();
        let compliance = book
            .get(Utf8Path::new("src/pages/Compliance.jsx"))
            .expect("compliance rules");

        assert!(
            compliance
                .rules
                .contains(&TranslationRule::verbatim("\"/ 100\"", "/ 100"))
        );
    }

    #[rstest]
    fn builtin_patterns_are_never_empty() {
        let book = RuleBook::builtin();
        assert!(
            book.iter()
                .flat_map(|set| set.rules.iter())
                .all(|rule| !rule.pattern.is_empty())
        );
    }

    #[rstest]
    fn insert_rejects_duplicate_paths() {
        let mut book = RuleBook::new();
        book.insert(FileRuleSet::new("src/pages/Users.jsx", Vec::new()))
            .expect("first insert succeeds");

        let error = book
            .insert(FileRuleSet::new("src/pages/Users.jsx", Vec::new()))
            .expect_err("duplicate should fail");

        assert!(matches!(error, RuleBookError::DuplicateFile { .. }));
    }
}
