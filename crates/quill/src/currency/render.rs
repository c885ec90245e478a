//! Locale-aware rendering of a validated amount.

use quill_semantics::{CurrencyCode, NumberLocale, SymbolPosition};
use rust_decimal::{Decimal, RoundingStrategy};

/// Separates the number from a suffixed symbol.
const SYMBOL_SPACE: char = '\u{a0}';

/// Render `amount` with two fraction digits, the locale's separators, and
/// the currency symbol on the locale's side.
///
/// ```
/// use quill::currency::{CurrencyCode, NumberLocale, render_amount};
///
/// assert_eq!(render_amount(-1234.5, CurrencyCode::Usd, NumberLocale::En), "-$1,234.50");
/// assert_eq!(render_amount(1234.5, CurrencyCode::Eur, NumberLocale::De), "1.234,50\u{a0}€");
/// ```
pub fn render_amount(amount: f64, code: CurrencyCode, locale: NumberLocale) -> String {
    let fixed = two_decimals(amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let number = format!(
        "{}{}{fraction}",
        group_digits(whole, locale.grouping_separator()),
        locale.decimal_separator()
    );

    // An amount that rounds to zero is never shown as negative.
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };

    match locale.symbol_position() {
        SymbolPosition::Prefix => format!("{sign}{}{number}", code.symbol()),
        SymbolPosition::Suffix => format!("{sign}{number}{SYMBOL_SPACE}{}", code.symbol()),
    }
}

/// Round a non-negative amount to cents, half away from zero.
///
/// Rounding starts from the shortest decimal text that reads back as the
/// same float, so `1.005` rounds up to `1.01`.
fn two_decimals(amount: f64) -> String {
    match amount.to_string().parse::<Decimal>() {
        Ok(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        // Beyond the decimal range a float has no fraction digits left.
        Err(_) => format!("{amount:.2}"),
    }
}

/// Insert `separator` between groups of three digits, counting from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len * 2);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0", ','), "0");
        assert_eq!(group_digits("999", ','), "999");
        assert_eq!(group_digits("1000", ','), "1,000");
        assert_eq!(group_digits("1234567", '.'), "1.234.567");
        assert_eq!(group_digits("123456", ','), "123,456");
    }

    #[test]
    fn test_rounds_to_two_digits() {
        assert_eq!(render_amount(0.126, CurrencyCode::Usd, NumberLocale::En), "$0.13");
        assert_eq!(render_amount(7.0, CurrencyCode::Usd, NumberLocale::En), "$7.00");
    }

    #[test]
    fn test_two_decimals_rounds_ties_away_from_zero() {
        assert_eq!(two_decimals(0.125), "0.13");
        assert_eq!(two_decimals(0.375), "0.38");
        assert_eq!(two_decimals(1.005), "1.01");
        assert_eq!(two_decimals(2.675), "2.68");
        assert_eq!(two_decimals(0.124), "0.12");
        assert_eq!(two_decimals(0.995), "1.00");
    }

    #[test]
    fn test_two_decimals_beyond_decimal_range() {
        assert_eq!(two_decimals(1e30), format!("{:.2}", 1e30));
        assert_eq!(two_decimals(0.0), "0.00");
    }

    #[test]
    fn test_suffix_symbol_uses_no_break_space() {
        let rendered = render_amount(1.0, CurrencyCode::Eur, NumberLocale::De);
        assert_eq!(rendered, "1,00\u{a0}€");
        assert!(!rendered.contains(' '));
    }

    #[test]
    fn test_negative_zero_is_unsigned() {
        assert_eq!(render_amount(-0.001, CurrencyCode::Usd, NumberLocale::En), "$0.00");
        assert_eq!(render_amount(-0.0, CurrencyCode::Eur, NumberLocale::De), "0,00\u{a0}€");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(render_amount(-5.0, CurrencyCode::Usd, NumberLocale::En), "-$5.00");
        assert_eq!(render_amount(-5.0, CurrencyCode::Eur, NumberLocale::De), "-5,00\u{a0}€");
    }

    #[test]
    fn test_euro_with_english_locale() {
        assert_eq!(
            render_amount(1_234_567.89, CurrencyCode::Eur, NumberLocale::En),
            "€1,234,567.89"
        );
    }
}
