//! Tests for format and currency option lints.

use quill::currency::{OptionWarning, compute_suggestions, lint_currency_options};
use quill::interpreter::{FormatWarning, lint_format};
use quill::{Value, parse_format, record};

// =============================================================================
// Format lint
// =============================================================================

#[test]
fn test_homogeneous_formats_are_clean() {
    assert!(lint_format(&parse_format("%s %d")).is_empty());
    assert!(lint_format(&parse_format("%(a)s %(b)d")).is_empty());
    assert!(lint_format(&parse_format("no directives")).is_empty());
}

#[test]
fn test_mixed_directives_warn() {
    let warnings = lint_format(&parse_format("%s %(a)s %d"));
    assert_eq!(warnings, vec![FormatWarning::MixedDirectives { ignored: 2 }]);
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"format string mixes named and positional directives; 2 positional directive(s) will render empty"
    );
}

// =============================================================================
// Currency option lint
// =============================================================================

#[test]
fn test_valid_options_are_clean() {
    assert!(lint_currency_options(&record! {}).is_empty());
    assert!(lint_currency_options(&record! { "code" => "EUR", "locale" => "en" }).is_empty());
}

#[test]
fn test_ignored_option_with_suggestion() {
    let warnings = lint_currency_options(&record! { "locle" => "en" });
    assert_eq!(
        warnings,
        vec![OptionWarning::IgnoredOption {
            name: "locle".into(),
            suggestions: vec!["locale".into()],
        }]
    );
}

#[test]
fn test_swapped_key_is_reported() {
    let warnings = lint_currency_options(&record! { "en" => "de_CH" });
    insta::assert_snapshot!(warnings[0].to_string(), @"option 'en' is ignored");
}

#[test]
fn test_unknown_code_with_suggestion() {
    let warnings = lint_currency_options(&record! { "code" => "usd" });
    assert_eq!(
        warnings,
        vec![OptionWarning::UnknownCode {
            code: "usd".into(),
            suggestions: vec!["USD".into()],
        }]
    );
    insta::assert_snapshot!(
        warnings[0].to_string(),
        @"unknown currency code 'usd', the result will be empty (did you mean: USD?)"
    );
}

#[test]
fn test_unknown_code_skips_locale_check() {
    let warnings = lint_currency_options(&record! { "code" => "GB", "locale" => "xx" });
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], OptionWarning::UnknownCode { .. }));
}

#[test]
fn test_unrecognized_locale_reports_fallback() {
    let warnings = lint_currency_options(&record! { "code" => "EUR", "locale" => "fr" });
    assert_eq!(
        warnings,
        vec![OptionWarning::UnrecognizedLocale {
            locale: "fr".into(),
            fallback: "de".into(),
        }]
    );
}

#[test]
fn test_lint_does_not_change_output() {
    let options = record! { "code" => "EUR", "locale" => "fr", "extra" => 1 };
    let _ = lint_currency_options(&options);
    assert_eq!(
        quill::format_currency(Some(&Value::from(1)), &options),
        "1,00\u{a0}€"
    );
}

#[test]
fn test_compute_suggestions() {
    assert_eq!(compute_suggestions("cod", &["code", "locale"]), vec!["code"]);
    assert_eq!(compute_suggestions("code", &["code", "locale"]), Vec::<String>::new());
    assert!(compute_suggestions("currency", &["code", "locale"]).is_empty());
}
