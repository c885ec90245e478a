//! Tests for `Value` conversions, display, and JSON mapping.

use quill::{Args, Value, interpolate, record};

#[test]
fn test_display() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Number(-7).to_string(), "-7");
    assert_eq!(Value::Float(1.1).to_string(), "1.1");
    assert_eq!(Value::Float(5.0).to_string(), "5");
    assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::Float(-0.0).to_string(), "0");
    assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Value::from("text").to_string(), "text");
    assert_eq!(Value::List(vec![]).to_string(), "");
    assert_eq!(
        Value::List(vec![1.into(), Value::List(vec!["a".into(), "b".into()])]).to_string(),
        "1,a,b"
    );
    assert_eq!(Value::Record(record! { "a" => 1 }).to_string(), "[record]");
}

#[test]
fn test_display_float_exponent_form() {
    assert_eq!(Value::Float(1e20).to_string(), "100000000000000000000");
    assert_eq!(Value::Float(1e21).to_string(), "1e+21");
    assert_eq!(Value::Float(-1.5e21).to_string(), "-1.5e+21");
    assert_eq!(Value::Float(0.000001).to_string(), "0.000001");
    assert_eq!(Value::Float(1e-7).to_string(), "1e-7");
    assert_eq!(
        interpolate("%s", &Args::from_positional(vec![1e21])),
        "1e+21"
    );
}

#[test]
fn test_conversions() {
    assert_eq!(Value::from(3_u64), Value::Number(3));
    assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
    assert_eq!(Value::from(2.5_f32), Value::Float(2.5));
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
}

#[test]
fn test_accessors() {
    let record = Value::Record(record! { "a" => 1 });
    assert_eq!(record.get("a"), Some(&Value::Number(1)));
    assert_eq!(record.get("b"), None);
    assert_eq!(Value::from("a").get("a"), None);
    assert_eq!(Value::Number(2).as_float(), Some(2.0));
    assert_eq!(Value::Float(2.0).as_number(), None);
    assert!(Value::Null.is_null());
}

#[test]
fn test_deserialize_json() {
    let value: Value =
        serde_json::from_str(r#"{"n": 1, "f": 1.5, "s": "x", "b": false, "z": null, "l": [1, "a"]}"#)
            .unwrap();
    let expected = Value::Record(record! {
        "n" => 1,
        "f" => 1.5,
        "s" => "x",
        "b" => false,
        "z" => Value::Null,
        "l" => Value::List(vec![1.into(), "a".into()]),
    });
    assert_eq!(value, expected);
}

#[test]
fn test_serialize_json() {
    let value = Value::Record(record! { "code" => "EUR", "amount" => 2 });
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"amount":2,"code":"EUR"}"#
    );
}
