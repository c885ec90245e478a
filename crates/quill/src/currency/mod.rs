//! Currency formatting behind a fail-closed validation gate.
//!
//! Validation runs in a fixed order: the value, then the option allow-list,
//! then the currency code (a hard failure), then the locale (a soft
//! fallback). Only the first two kinds of problem can empty the result.

mod error;
mod lint;
mod options;
mod render;

use tracing::debug;

use crate::types::{Options, Value};

pub use error::CurrencyError;
pub use lint::{OptionWarning, compute_suggestions, lint_currency_options};
pub use options::{CurrencyOptions, numeric_value, resolve_code, resolve_locale};
pub use quill_semantics::{CurrencyCode, NumberLocale};
pub use render::render_amount;

/// Format `value` as currency, or return an empty string.
///
/// Reads only the `code` and `locale` options. An unknown `code` or a value
/// that is not a finite number empties the result; an unknown `locale` falls
/// back to the currency's native locale. The currency symbol is returned raw.
///
/// # Example
///
/// ```
/// use quill::{Value, format_currency, record};
///
/// let amount = Value::from(1234567.89);
/// assert_eq!(format_currency(Some(&amount), &record! {}), "$1,234,567.89");
/// assert_eq!(
///     format_currency(Some(&amount), &record! { "code" => "EUR" }),
///     "1.234.567,89\u{a0}€"
/// );
/// assert_eq!(format_currency(Some(&amount), &record! { "code" => "GB" }), "");
/// ```
pub fn format_currency(value: Option<&Value>, options: &Options) -> String {
    try_format_currency(value, options).unwrap_or_else(|error| {
        debug!(%error, "currency formatting failed closed");
        String::new()
    })
}

/// Format `value` as currency, reporting why the gate rejected it.
///
/// # Errors
///
/// Returns an error if:
/// - The value is missing or is not a finite number
/// - The `code` option names a currency that is not supported
pub fn try_format_currency(value: Option<&Value>, options: &Options) -> Result<String, CurrencyError> {
    let amount = numeric_value(value)?;
    let recognized = CurrencyOptions::extract(options);
    let code = resolve_code(recognized.code)?;
    let locale = resolve_locale(recognized.locale, code);
    Ok(render_amount(amount, code, locale))
}
