use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A keyed collection of values, as passed by a template author either as a
/// plain object argument or as the trailing keyword-argument record.
pub type Record = BTreeMap<String, Value>;

/// A runtime value passed to a helper by the host template.
///
/// A value that is missing altogether is represented by absence
/// (`Option<&Value>`), not by a variant. `Null` is an explicit null.
///
/// Values deserialize from JSON without tags, so `{"a": [1, "x", null]}`
/// becomes a `Record` holding a `List`.
///
/// # Example
///
/// ```
/// use quill::Value;
///
/// let count: Value = 42.into();
/// let name: Value = "Alice".into();
/// assert_eq!(count.to_string(), "42");
/// assert_eq!(name.as_str(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An explicit null.
    Null,

    /// A boolean.
    Bool(bool),

    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string.
    String(String),

    /// An ordered sequence of values.
    List(Vec<Value>),

    /// A keyed record.
    Record(Record),
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is any kind of number.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get this value as a record, if it is one.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Look up `key` when this value is a record.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_record().and_then(|record| record.get(key))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) if n.is_nan() => write!(f, "NaN"),
            Value::Float(n) if n.is_infinite() => {
                write!(f, "{}", if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Float(n) => write_float(f, *n),
            Value::String(s) => write!(f, "{s}"),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Record(_) => write!(f, "[record]"),
        }
    }
}

/// Magnitudes at or above this render in exponent form.
const EXPONENT_ABOVE: f64 = 1e21;

/// Nonzero magnitudes below this render in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;

/// Shortest round-trip digits, switching to `1.5e+21` / `1e-7` outside the
/// positional range.
fn write_float(f: &mut Formatter<'_>, n: f64) -> FmtResult {
    let magnitude = n.abs();
    if magnitude == 0.0 {
        return write!(f, "0");
    }
    if (EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        return write!(f, "{n}");
    }
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => write!(f, "{text}"),
    }
}

// From implementations for common types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Float(n as f64),
        }
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        match i64::try_from(n) {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Float(n as f64),
        }
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
