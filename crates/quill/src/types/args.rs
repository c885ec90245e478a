use bon::Builder;

use super::{Record, Value};

/// Keyword arguments supplied by a template author.
pub type Options = Record;

/// The arguments a helper receives from the host template engine.
///
/// Holds the positional values in source order and the options record built
/// from keyword arguments. The options record is always present; it is simply
/// empty when no keyword arguments were written.
///
/// # Example
///
/// ```
/// use quill::{Args, Value, record};
///
/// let args = Args::builder()
///     .positional(vec![Value::from("Foo"), Value::from(9)])
///     .options(record! { "greeting" => "Hello" })
///     .build();
///
/// assert_eq!(args.positional.len(), 2);
/// assert_eq!(args.option("greeting"), Some(&Value::from("Hello")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct Args {
    /// Positional values in the order they were written.
    #[builder(default)]
    pub positional: Vec<Value>,

    /// Keyword arguments, keyed by name.
    #[builder(default)]
    pub options: Options,
}

impl Args {
    /// Creates arguments with no positional values and an empty options record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates arguments from positional values only.
    pub fn from_positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Args::builder()
            .positional(values.into_iter().map(Into::into).collect())
            .build()
    }

    /// Creates arguments from an options record only.
    pub fn from_options(options: Options) -> Self {
        Args::builder().options(options).build()
    }

    /// Splits a raw host call into positional values and options.
    ///
    /// The host appends exactly one options record after the positional
    /// values, so a trailing `Record` is taken as the options. A call without
    /// a trailing record gets an empty options record.
    pub fn from_host_call(mut call: Vec<Value>) -> Self {
        let options = match call.pop() {
            Some(Value::Record(record)) => record,
            Some(other) => {
                call.push(other);
                Options::new()
            }
            None => Options::new(),
        };
        Args {
            positional: call,
            options,
        }
    }

    /// Look up a keyword argument.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}
