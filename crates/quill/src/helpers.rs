//! String and list helpers.
//!
//! Helpers that receive a value of the wrong type hand it back unchanged
//! instead of failing, so a template with a stray number still renders.

use icu_casemap::CaseMapper;
use icu_locale_core::langid;
use unicode_segmentation::UnicodeSegmentation;

use crate::types::{Value, parse_decimal};

/// Length used by [`excerpt`] when none is given.
pub const DEFAULT_EXCERPT_LENGTH: usize = 50;

const ELLIPSIS: &str = "...";

/// Shorten `text` to `length` characters, appending `...` when cut.
///
/// Characters are grapheme clusters. A `length` with no numeric
/// interpretation returns the text unchanged.
///
/// ```
/// use quill::Value;
/// use quill::helpers::excerpt;
///
/// assert_eq!(excerpt("Just wow", Some(&Value::from(4))), "Just...");
/// assert_eq!(excerpt("wow", Some(&Value::from(10))), "wow");
/// assert_eq!(excerpt("just wow", Some(&Value::from("random"))), "just wow");
/// ```
pub fn excerpt(text: &str, length: Option<&Value>) -> String {
    let limit = match length {
        None => DEFAULT_EXCERPT_LENGTH,
        Some(value) => match excerpt_length(value) {
            Some(limit) => limit,
            None => return text.to_string(),
        },
    };

    let mut graphemes = text.graphemes(true);
    let kept: String = graphemes.by_ref().take(limit).collect();
    if graphemes.next().is_some() {
        format!("{kept}{ELLIPSIS}")
    } else {
        kept
    }
}

/// Negative lengths keep nothing.
fn excerpt_length(value: &Value) -> Option<usize> {
    let number = match value {
        Value::Number(n) => return Some(usize::try_from(*n).unwrap_or(0)),
        Value::Float(f) => Some(*f),
        Value::String(s) => parse_decimal(s),
        Value::Null | Value::Bool(_) | Value::List(_) | Value::Record(_) => None,
    }
    .filter(|f| f.is_finite())?;
    Some(if number <= 0.0 { 0 } else { number.trunc() as usize })
}

/// Turn `text` into a lowercase, dash-separated slug.
///
/// Every run of characters that are not letters or digits becomes a single
/// `-`, and dashes at either end are dropped.
///
/// ```
/// use quill::helpers::sanitize;
///
/// assert_eq!(sanitize("Just    wow"), "just-wow");
/// assert_eq!(sanitize("*JuST *#wow#"), "just-wow");
/// ```
pub fn sanitize(text: &str) -> String {
    let lowered = lowercase_str(text);
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_dash = false;
    for c in lowered.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Uppercase the first character of a string. Other values pass through.
pub fn capitalize_first(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(capitalize_str(s)),
        other => other.clone(),
    }
}

/// Uppercase the first character of every word of a string. Other values
/// pass through.
///
/// ```
/// use quill::Value;
/// use quill::helpers::capitalize_each;
///
/// assert_eq!(capitalize_each(&Value::from("just wow")), Value::from("Just Wow"));
/// assert_eq!(capitalize_each(&Value::from(1)), Value::from(1));
/// ```
pub fn capitalize_each(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.split_word_bounds().map(capitalize_str).collect()),
        other => other.clone(),
    }
}

/// Lowercase a string. Other values pass through.
pub fn lowercase(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(lowercase_str(s)),
        other => other.clone(),
    }
}

/// Uppercase a string. Other values pass through.
pub fn uppercase(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(uppercase_str(s)),
        other => other.clone(),
    }
}

/// The first element of a list.
pub fn first(value: &Value) -> Option<&Value> {
    value.as_list().and_then(<[Value]>::first)
}

/// The last element of a list.
pub fn last(value: &Value) -> Option<&Value> {
    value.as_list().and_then(<[Value]>::last)
}

/// Concatenate the text of every value.
///
/// ```
/// use quill::Value;
/// use quill::helpers::concat;
///
/// let values = [Value::from("I have got "), Value::from(4), Value::from(" apples.")];
/// assert_eq!(concat(&values), "I have got 4 apples.");
/// assert_eq!(concat(&[Value::Null, Value::from("abc")]), "nullabc");
/// ```
pub fn concat(values: &[Value]) -> String {
    values.iter().map(ToString::to_string).collect()
}

/// Join the elements of a list with the text of `delimiter`.
///
/// A missing or non-list value joins to an empty string. A missing
/// delimiter joins with nothing in between.
///
/// ```
/// use quill::Value;
/// use quill::helpers::join;
///
/// let limbs = Value::List(vec!["Hands".into(), "legs".into(), "feet".into()]);
/// assert_eq!(join(Some(&limbs), Some(&Value::from(" & "))), "Hands & legs & feet");
/// assert_eq!(join(Some(&limbs), Some(&Value::Null)), "Handsnulllegsnullfeet");
/// assert_eq!(join(Some(&Value::Null), Some(&Value::from(" & "))), "");
/// ```
pub fn join(list: Option<&Value>, delimiter: Option<&Value>) -> String {
    let Some(items) = list.and_then(Value::as_list) else {
        return String::new();
    };
    let delimiter = delimiter.map(ToString::to_string).unwrap_or_default();
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&delimiter)
}

fn capitalize_str(text: &str) -> String {
    let mut graphemes = text.graphemes(true);
    match graphemes.next() {
        Some(head) => format!("{}{}", uppercase_str(head), graphemes.as_str()),
        None => String::new(),
    }
}

fn lowercase_str(text: &str) -> String {
    String::from(CaseMapper::new().lowercase_to_string(text, &langid!("und")))
}

fn uppercase_str(text: &str) -> String {
    String::from(CaseMapper::new().uppercase_to_string(text, &langid!("und")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipisicing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

    #[test]
    fn test_excerpt_default_length() {
        assert_eq!(excerpt("just wow", None), "just wow");
        assert_eq!(
            excerpt(LOREM, None),
            "Lorem ipsum dolor sit amet, consectetur adipisicin..."
        );
    }

    #[test]
    fn test_excerpt_exact_length_is_not_cut() {
        assert_eq!(excerpt("wow", Some(&Value::from(3))), "wow");
    }

    #[test]
    fn test_excerpt_numeric_string_and_float_lengths() {
        assert_eq!(excerpt("Just wow", Some(&Value::from("4"))), "Just...");
        assert_eq!(excerpt("Just wow", Some(&Value::from(4.9))), "Just...");
    }

    #[test]
    fn test_excerpt_negative_length() {
        assert_eq!(excerpt("wow", Some(&Value::from(-1))), "...");
    }

    #[test]
    fn test_excerpt_counts_graphemes() {
        assert_eq!(excerpt("e\u{301}tude", Some(&Value::from(2))), "e\u{301}t...");
    }

    #[test]
    fn test_sanitize_edges() {
        assert_eq!(sanitize("--Hello, World!--"), "hello-world");
        assert_eq!(sanitize("***"), "");
        assert_eq!(sanitize("Crème Brûlée"), "crème-brûlée");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first(&Value::from("just wow")), Value::from("Just wow"));
        assert_eq!(capitalize_first(&Value::from("")), Value::from(""));
        assert_eq!(capitalize_first(&Value::from(1.1)), Value::from(1.1));
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(lowercase(&Value::from("Hello World!")), Value::from("hello world!"));
        assert_eq!(uppercase(&Value::from("hello world!")), Value::from("HELLO WORLD!"));
        assert_eq!(lowercase(&Value::from("1234")), Value::from("1234"));
        assert_eq!(uppercase(&Value::from("straße")), Value::from("STRASSE"));
        assert_eq!(uppercase(&Value::from(7)), Value::from(7));
    }

    #[test]
    fn test_first_and_last() {
        let names = Value::List(vec!["David".into(), "Miller".into(), "Jones".into()]);
        assert_eq!(first(&names), Some(&Value::from("David")));
        assert_eq!(last(&names), Some(&Value::from("Jones")));
        assert_eq!(first(&Value::List(vec![])), None);
        assert_eq!(last(&Value::from("David")), None);
    }

    #[test]
    fn test_concat() {
        assert_eq!(concat(&[]), "");
        assert_eq!(concat(&[5.into()]), "5");
        assert_eq!(concat(&[1.into(), 2.into(), 3.into(), 4.into()]), "1234");
        assert_eq!(
            concat(&[true.into(), false.into(), true.into(), false.into()]),
            "truefalsetruefalse"
        );
    }

    #[test]
    fn test_join() {
        let limbs = Value::List(vec!["Hands".into(), "legs".into(), "feet".into()]);
        assert_eq!(join(Some(&limbs), Some(&Value::from(false))), "Handsfalselegsfalsefeet");
        assert_eq!(
            join(Some(&Value::List(vec!["Hands".into()])), Some(&Value::from(" & "))),
            "Hands"
        );
        assert_eq!(join(Some(&Value::List(vec![])), Some(&Value::from(" & "))), "");
        assert_eq!(join(Some(&Value::Null), Some(&Value::Null)), "");
        assert_eq!(join(None, None), "");
        assert_eq!(join(Some(&limbs), None), "Handslegsfeet");
    }
}
