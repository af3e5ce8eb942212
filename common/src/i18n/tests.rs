use std::borrow::Cow;

use rstest::rstest;

use super::{
    Arguments, FALLBACK_LOCALE, FluentValue, I18nError, Localizer, available_locales,
    supports_locale,
};

#[rstest]
#[case(None, FALLBACK_LOCALE, true)]
#[case(Some("en-GB"), "en-GB", false)]
#[case(Some("fr"), "fr", false)]
#[case(Some("zz"), FALLBACK_LOCALE, true)]
fn resolves_locales(#[case] input: Option<&str>, #[case] expected: &str, #[case] fallback: bool) {
    let localizer = Localizer::new(input);
    assert_eq!(localizer.locale(), expected);
    assert_eq!(localizer.used_fallback(), fallback);
}

#[test]
fn enumerates_available_locales() {
    assert_eq!(available_locales().collect::<Vec<_>>(), ["en-GB", "fr"]);
}

#[test]
fn supports_locale_reports_known_languages() {
    assert!(supports_locale("en-GB"));
    assert!(supports_locale("fr"));
    assert!(supports_locale("EN-gb"));
    assert!(!supports_locale("zz"));
    assert!(!supports_locale("not a tag"));
}

#[test]
fn message_lookup_with_arguments_interpolates_values() {
    let localizer = Localizer::new(Some("fr"));
    let mut args = Arguments::new();
    args.insert(Cow::Borrowed("path"), FluentValue::from("src/pages/Users.jsx"));

    let message = localizer
        .message_with_args("migrate-skipped", &args)
        .expect("message should exist");

    assert_eq!(message, "✓ src/pages/Users.jsx déjà mis à jour");
}

#[test]
fn missing_messages_surface_errors() {
    let localizer = Localizer::new(None);

    let error = localizer
        .message("no-such-message")
        .expect_err("lookup should fail");

    assert_eq!(
        error,
        I18nError::MissingMessage {
            key: "no-such-message".to_owned(),
            locale: "en-GB".to_owned(),
        }
    );
}

#[test]
fn message_or_key_degrades_to_the_slug() {
    let localizer = Localizer::new(None);
    assert_eq!(
        localizer.message_or_key("no-such-message", &Arguments::new()),
        "no-such-message"
    );
}

#[test]
fn arguments_may_borrow_values_from_the_caller() {
    let localizer = Localizer::new(None);
    let path = String::from("src/pages/Compliance.jsx");
    let detail = format!("{} bytes unreadable", 3);
    let args: Arguments<'_> = [
        (Cow::Borrowed("path"), FluentValue::from(path.as_str())),
        (Cow::Borrowed("detail"), FluentValue::from(detail.as_str())),
    ]
    .into_iter()
    .collect();

    let message = localizer
        .message_with_args("migrate-failed", &args)
        .expect("message should exist");

    assert_eq!(message, "✗ Error with src/pages/Compliance.jsx: 3 bytes unreadable");
}
