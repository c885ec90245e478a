//! Diagnostics for currency options.
//!
//! Linting never changes what [`format_currency`](super::format_currency)
//! returns. It explains silent behavior: ignored keys, codes that empty the
//! result, and locales that fall back.

use quill_semantics::{
    CODE_OPTION, CURRENCY_OPTIONS, LOCALE_OPTION, OVERRIDE_LOCALES, accepted_currency_codes,
    is_currency_option,
};
use strsim::levenshtein;
use thiserror::Error;

use crate::currency::options::{CurrencyOptions, resolve_code, resolve_locale};
use crate::types::Options;

/// A currency option that is ignored or only partly honored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionWarning {
    /// A key outside the allow-list.
    #[error("option '{name}' is ignored{}", did_you_mean(.suggestions))]
    IgnoredOption {
        name: String,
        suggestions: Vec<String>,
    },

    /// A currency code that makes the result empty.
    #[error("unknown currency code '{code}', the result will be empty{}", did_you_mean(.suggestions))]
    UnknownCode {
        code: String,
        suggestions: Vec<String>,
    },

    /// A locale that is not a recognized override.
    #[error("locale '{locale}' is not recognized, falling back to '{fallback}'")]
    UnrecognizedLocale { locale: String, fallback: String },
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Inspect currency options and report everything that will be silently
/// ignored or degraded.
///
/// ```
/// use quill::record;
/// use quill::currency::lint_currency_options;
///
/// let warnings = lint_currency_options(&record! { "cod" => "EUR" });
/// assert_eq!(
///     warnings[0].to_string(),
///     "option 'cod' is ignored (did you mean: code?)"
/// );
/// ```
pub fn lint_currency_options(options: &Options) -> Vec<OptionWarning> {
    let mut warnings = Vec::new();

    for name in options.keys().filter(|name| !is_currency_option(name)) {
        warnings.push(OptionWarning::IgnoredOption {
            name: name.clone(),
            suggestions: compute_suggestions(name, CURRENCY_OPTIONS),
        });
    }

    let recognized = CurrencyOptions::extract(options);
    let Ok(code) = resolve_code(recognized.code) else {
        let code = options
            .get(CODE_OPTION)
            .map(ToString::to_string)
            .unwrap_or_default();
        let upper = code.to_ascii_uppercase();
        let suggestions = if accepted_currency_codes().contains(&upper.as_str()) {
            vec![upper]
        } else {
            compute_suggestions(&upper, accepted_currency_codes())
        };
        warnings.push(OptionWarning::UnknownCode { code, suggestions });
        return warnings;
    };

    if let Some(locale) = options.get(LOCALE_OPTION) {
        let is_override = locale
            .as_str()
            .is_some_and(|tag| OVERRIDE_LOCALES.contains(&tag));
        if !is_override {
            warnings.push(OptionWarning::UnrecognizedLocale {
                locale: locale.to_string(),
                fallback: resolve_locale(recognized.locale, code).as_str().to_string(),
            });
        }
    }

    warnings
}

/// Compute typo suggestions for `name` from a static list of candidates.
///
/// Returns up to three candidates within a small edit distance, closest
/// first. A candidate equal to `name` is never suggested.
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter(|candidate| **candidate != name)
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
