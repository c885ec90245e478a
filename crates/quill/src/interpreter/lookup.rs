//! Value lookup for named directives.
//!
//! A named key can be bound by a keyword argument or by a field of a record
//! passed positionally. Each source is a strategy; strategies are tried in
//! order and the first one that knows the key wins.

use crate::types::{Args, Value};

/// A single source of named values.
pub type LookupStrategy = for<'a> fn(&str, &'a Args) -> Option<&'a Value>;

/// Named value sources, in priority order.
pub const NAMED_LOOKUP: &[LookupStrategy] = &[from_options, from_positional_records];

/// Look up `key` in the options record.
///
/// A key that is present wins even when its value is `Null`.
pub fn from_options<'a>(key: &str, args: &'a Args) -> Option<&'a Value> {
    args.options.get(key)
}

/// Look up `key` in the first positional record that contains it.
pub fn from_positional_records<'a>(key: &str, args: &'a Args) -> Option<&'a Value> {
    args.positional.iter().find_map(|value| value.get(key))
}

/// Resolve a named directive's key against every strategy in turn.
pub fn lookup_named<'a>(key: &str, args: &'a Args) -> Option<&'a Value> {
    NAMED_LOOKUP.iter().find_map(|strategy| strategy(key, args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn test_options_win_over_positional_records() {
        let args = Args::builder()
            .positional(vec![Value::Record(record! { "a" => "positional" })])
            .options(record! { "a" => "option" })
            .build();
        assert_eq!(lookup_named("a", &args), Some(&Value::from("option")));
    }

    #[test]
    fn test_first_matching_record_wins() {
        let args = Args::from_positional(vec![
            Value::from("not a record"),
            Value::Record(record! { "b" => 1 }),
            Value::Record(record! { "a" => 2 }),
            Value::Record(record! { "a" => 3 }),
        ]);
        assert_eq!(lookup_named("a", &args), Some(&Value::Number(2)));
    }

    #[test]
    fn test_null_option_is_a_hit() {
        let args = Args::builder()
            .positional(vec![Value::Record(record! { "a" => "positional" })])
            .options(record! { "a" => Value::Null })
            .build();
        assert_eq!(lookup_named("a", &args), Some(&Value::Null));
    }

    #[test]
    fn test_missing_key() {
        let args = Args::from_positional(vec![Value::Record(record! { "b" => 1 })]);
        assert_eq!(lookup_named("a", &args), None);
    }
}
