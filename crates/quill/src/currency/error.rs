//! Error types for the currency gate.

use quill_semantics::accepted_currency_codes;
use thiserror::Error;

/// Why a value was rejected by the currency gate.
///
/// [`format_currency`](super::format_currency) turns every one of these into
/// an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// No value was supplied.
    #[error("no value to format")]
    MissingValue,

    /// The value is not a finite number or a numeric string.
    #[error("'{value}' is not a finite number")]
    InvalidValue { value: String },

    /// The `code` option is not a supported currency.
    #[error("unknown currency code '{code}', expected one of: {}", accepted_currency_codes().join(", "))]
    UnknownCode { code: String },
}
