//! Every bundled locale must define the same report messages with the same
//! placeables, so a translated run never falls back line by line.

use rstest::rstest;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

type Messages = BTreeMap<String, BTreeSet<String>>;

fn locale_file(locale: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("locales")
        .join(locale)
        .join("tooling.ftl")
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split("{ $")
        .skip(1)
        .filter_map(|rest| rest.split_whitespace().next())
        .map(|name| name.trim_end_matches('}').to_owned())
        .collect()
}

fn messages(locale: &str) -> Messages {
    let path = locale_file(locale);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));

    text.lines()
        .filter(|line| !line.starts_with('#') && !line.starts_with(' '))
        .filter_map(|line| line.split_once(" = "))
        .map(|(id, value)| (id.trim().to_owned(), variables(value)))
        .collect()
}

#[rstest]
#[case::french("fr")]
fn locale_matches_fallback_messages(#[case] locale: &str) {
    let fallback = messages("en-GB");
    let translated = messages(locale);

    assert!(!fallback.is_empty(), "fallback bundle should define messages");
    assert_eq!(
        fallback.keys().collect::<Vec<_>>(),
        translated.keys().collect::<Vec<_>>(),
        "{locale} should define exactly the fallback message ids",
    );
    for (id, expected) in &fallback {
        assert_eq!(
            translated.get(id),
            Some(expected),
            "{locale} message `{id}` should use the fallback placeables",
        );
    }
}

#[test]
fn variables_are_extracted_from_placeables() {
    let found = variables("✓ { $path } updated ({ $count } replacements)");
    assert_eq!(
        found.into_iter().collect::<Vec<_>>(),
        vec!["count".to_owned(), "path".to_owned()]
    );
}
