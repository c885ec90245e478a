//! CLI command implementations.

mod currencies;
mod currency;
mod helper;
mod interpolate;

pub use currencies::run_currencies;
pub use currency::{run_currency, CurrencyArgs};
pub use helper::{run_helper, HelperArgs};
pub use interpolate::{run_interpolate, InterpolateArgs};

use quill::{Options, Value};

/// Parse a command-line value: JSON when it parses as JSON, else a string.
///
/// `42` is a number, `"42"` (with quotes) and `forty-two` are strings, and
/// `{"a": 1}` is a record.
pub fn parse_value(s: &str) -> Result<Value, String> {
    Ok(serde_json::from_str(s).unwrap_or_else(|_| Value::from(s)))
}

/// Parse a key=value option string. The value is parsed like [`parse_value`].
pub fn parse_key_val(s: &str) -> Result<(String, Value), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid option format '{}': expected key=value", s))?;
    Ok((s[..pos].to_string(), parse_value(&s[pos + 1..])?))
}

/// Collect repeated `-o key=value` flags into an options record.
pub fn collect_options(pairs: Vec<(String, Value)>) -> Options {
    pairs.into_iter().collect()
}
