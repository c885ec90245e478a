//! Strict decimal literal recognition for numeric strings.

use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::one_of;

/// Parse `input` as a plain decimal literal denoting a finite number.
///
/// Surrounding whitespace is ignored. Accepted forms are `[+-]digits`,
/// `[+-]digits.digits?` and `[+-].digits`. Exponents, `inf`, `NaN`, digit
/// grouping and anything else are rejected.
pub fn parse_decimal(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    let mut remaining = trimmed;
    decimal_literal.parse_next(&mut remaining).ok()?;
    if !remaining.is_empty() {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    value.is_finite().then_some(value)
}

fn decimal_literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        opt(one_of(['+', '-'])),
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
    )
        .take()
        .parse_next(input)
}
