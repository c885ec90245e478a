//! Validation stages of the currency gate.

use std::collections::BTreeMap;

use quill_semantics::{
    CODE_OPTION, CurrencyCode, DEFAULT_CURRENCY, LOCALE_OPTION, NumberLocale,
    is_currency_option, resolve_currency_code, resolve_locale_override,
};
use tracing::debug;

use crate::currency::CurrencyError;
use crate::types::{Options, Value, parse_decimal};

/// The options the currency gate reads, after the allow-list is applied.
///
/// Keys outside the allow-list are dropped before any value is read, so a
/// near miss such as `en="de"` can never be mistaken for a locale.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CurrencyOptions<'a> {
    pub code: Option<&'a Value>,
    pub locale: Option<&'a Value>,
}

impl<'a> CurrencyOptions<'a> {
    /// Extract the recognized options.
    pub fn extract(options: &'a Options) -> Self {
        let recognized: BTreeMap<&str, &Value> = options
            .iter()
            .filter(|(name, _)| is_currency_option(name))
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        CurrencyOptions {
            code: recognized.get(CODE_OPTION).copied(),
            locale: recognized.get(LOCALE_OPTION).copied(),
        }
    }
}

/// Interpret the value to format as a finite number.
///
/// Numbers are accepted when finite. Strings are accepted when they hold a
/// plain decimal literal. Everything else is rejected.
pub fn numeric_value(value: Option<&Value>) -> Result<f64, CurrencyError> {
    let value = value.ok_or(CurrencyError::MissingValue)?;
    let number = match value {
        Value::Number(n) => Some(*n as f64),
        Value::Float(f) => f.is_finite().then_some(*f),
        Value::String(s) => parse_decimal(s),
        Value::Null | Value::Bool(_) | Value::List(_) | Value::Record(_) => None,
    };
    number.ok_or_else(|| CurrencyError::InvalidValue {
        value: value.to_string(),
    })
}

/// Resolve the currency code. An unsupported code fails the whole call.
///
/// Only string values can name a currency; an omitted code means
/// [`DEFAULT_CURRENCY`].
pub fn resolve_code(code: Option<&Value>) -> Result<CurrencyCode, CurrencyError> {
    let Some(code) = code else {
        return Ok(DEFAULT_CURRENCY);
    };
    code.as_str()
        .and_then(resolve_currency_code)
        .ok_or_else(|| CurrencyError::UnknownCode {
            code: code.to_string(),
        })
}

/// Resolve the number locale. Never fails.
///
/// A recognized override wins; anything else, including an absent or
/// non-string locale, falls back to the currency's native locale.
pub fn resolve_locale(locale: Option<&Value>, code: CurrencyCode) -> NumberLocale {
    if let Some(resolved) = locale.and_then(Value::as_str).and_then(resolve_locale_override) {
        return resolved;
    }
    let native = code.native_locale();
    if let Some(locale) = locale {
        debug!(%locale, fallback = native.as_str(), "unrecognized locale, using native locale");
    }
    native
}
