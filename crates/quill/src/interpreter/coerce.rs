//! Rendering of directive values.

use quill_semantics::DirectiveKind;

use crate::types::{Value, parse_decimal};

/// Token rendered by `%d` when the value is not a number.
const NOT_A_NUMBER: &str = "NaN";

/// Render `value` for a directive of the given kind.
///
/// `%s` renders the value's plain text. `%d` renders the value truncated to
/// an integer, or `NaN` when the value has no numeric interpretation.
///
/// # Example
///
/// ```
/// use quill::Value;
/// use quill::interpreter::render_value;
/// use quill::parser::DirectiveKind;
///
/// assert_eq!(render_value(&Value::from("9.7"), DirectiveKind::String), "9.7");
/// assert_eq!(render_value(&Value::from("9.7"), DirectiveKind::Integer), "9");
/// assert_eq!(render_value(&Value::from("nine"), DirectiveKind::Integer), "NaN");
/// ```
pub fn render_value(value: &Value, kind: DirectiveKind) -> String {
    match kind {
        DirectiveKind::String => value.to_string(),
        DirectiveKind::Integer => integer_text(value),
    }
}

fn integer_text(value: &Value) -> String {
    let number = match value {
        Value::Number(n) => return n.to_string(),
        Value::Float(f) => Some(*f),
        Value::String(s) => parse_decimal(s),
        Value::Null | Value::Bool(_) | Value::List(_) | Value::Record(_) => None,
    };
    number
        .and_then(truncated_text)
        .unwrap_or_else(|| NOT_A_NUMBER.to_string())
}

/// Truncate toward zero. Non-finite numbers have no integer form.
fn truncated_text(number: f64) -> Option<String> {
    if !number.is_finite() {
        return None;
    }
    let truncated = number.trunc();
    if truncated == 0.0 {
        // Avoid rendering `-0`.
        return Some("0".to_string());
    }
    if truncated > i64::MIN as f64 && truncated < i64::MAX as f64 {
        Some((truncated as i64).to_string())
    } else {
        Some(format!("{truncated}"))
    }
}
