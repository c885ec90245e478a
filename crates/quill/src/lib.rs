pub mod currency;
pub mod helpers;
pub mod interpreter;
pub mod parser;
pub mod registry;
pub mod types;

pub use currency::{CurrencyError, format_currency, try_format_currency};
pub use interpreter::{interpolate, interpolate_parsed};
pub use parser::parse_format;
pub use registry::{HelperFn, HelperRegistry};
pub use types::{Args, Options, Record, Value};

/// Creates a `Record` (a `BTreeMap<String, Value>`) from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, booleans, or nested `Value`s directly. The
/// result serves both as an options record and as a record value.
///
/// # Example
///
/// ```
/// use quill::{record, Value};
///
/// let r = record! { "code" => "EUR", "amount" => 3 };
/// assert_eq!(r.len(), 2);
/// assert_eq!(r["amount"].as_number(), Some(3));
/// assert_eq!(r["code"].as_str(), Some("EUR"));
/// ```
#[macro_export]
macro_rules! record {
    {} => {
        $crate::Record::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Record::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
