//! Helper registry for host template engines.
//!
//! Adapts the host calling convention (positional values plus one trailing
//! options record, see [`Args::from_host_call`]) to the plain inputs each
//! helper expects, and looks helpers up by the name template authors write.

use std::collections::BTreeMap;

use crate::currency::format_currency;
use crate::helpers;
use crate::interpreter::interpolate;
use crate::types::{Args, Value};

/// Helper function signature as seen by a host.
///
/// Takes the call's arguments and returns the value to render. Helpers never
/// fail; bad input degrades the output instead.
pub type HelperFn = fn(&Args) -> Value;

/// Registry of template helpers, keyed by template name.
pub struct HelperRegistry {
    helpers: BTreeMap<String, HelperFn>,
}

impl HelperRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            helpers: BTreeMap::new(),
        }
    }

    /// Create a registry holding every built-in helper.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("sprintf", call_sprintf);
        registry.register("formatCurrency", call_format_currency);
        registry.register("excerpt", call_excerpt);
        registry.register("sanitize", call_sanitize);
        registry.register("capitalizeFirst", |args| {
            map_first(args, helpers::capitalize_first)
        });
        registry.register("capitalizeEach", |args| {
            map_first(args, helpers::capitalize_each)
        });
        registry.register("lowercase", |args| map_first(args, helpers::lowercase));
        registry.register("uppercase", |args| map_first(args, helpers::uppercase));
        registry.register("first", |args| {
            arg(args, 0)
                .and_then(helpers::first)
                .cloned()
                .unwrap_or(Value::Null)
        });
        registry.register("last", |args| {
            arg(args, 0)
                .and_then(helpers::last)
                .cloned()
                .unwrap_or(Value::Null)
        });
        registry.register("concat", |args| {
            Value::String(helpers::concat(&args.positional))
        });
        registry.register("join", |args| {
            Value::String(helpers::join(arg(args, 0), arg(args, 1)))
        });
        registry
    }

    /// Register a helper, replacing any helper with the same name.
    pub fn register(&mut self, name: impl Into<String>, helper: HelperFn) {
        self.helpers.insert(name.into(), helper);
    }

    /// Get a helper by name.
    pub fn get(&self, name: &str) -> Option<HelperFn> {
        self.helpers.get(name).copied()
    }

    /// Names of all registered helpers, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.helpers.keys().map(String::as_str)
    }

    /// Invoke a helper with a raw host call.
    ///
    /// Returns `None` when no helper has that name.
    ///
    /// ```
    /// use quill::{HelperRegistry, Value, record};
    ///
    /// let registry = HelperRegistry::with_builtins();
    /// let call = vec![
    ///     Value::from(1234567.89),
    ///     Value::Record(record! { "code" => "EUR", "locale" => "en" }),
    /// ];
    /// assert_eq!(
    ///     registry.call("formatCurrency", call),
    ///     Some(Value::from("€1,234,567.89"))
    /// );
    /// ```
    pub fn call(&self, name: &str, call: Vec<Value>) -> Option<Value> {
        let helper = self.get(name)?;
        Some(helper(&Args::from_host_call(call)))
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn arg(args: &Args, index: usize) -> Option<&Value> {
    args.positional.get(index)
}

fn map_first(args: &Args, f: fn(&Value) -> Value) -> Value {
    arg(args, 0).map_or(Value::Null, f)
}

/// `sprintf format args...`: the first positional value is the format.
fn call_sprintf(args: &Args) -> Value {
    let Some((format, rest)) = args.positional.split_first() else {
        return Value::String(String::new());
    };
    let remaining = Args::builder()
        .positional(rest.to_vec())
        .options(args.options.clone())
        .build();
    Value::String(interpolate(&format.to_string(), &remaining))
}

fn call_format_currency(args: &Args) -> Value {
    Value::String(format_currency(arg(args, 0), &args.options))
}

fn call_excerpt(args: &Args) -> Value {
    match arg(args, 0) {
        Some(Value::String(text)) => Value::String(helpers::excerpt(text, arg(args, 1))),
        Some(other) => other.clone(),
        None => Value::String(String::new()),
    }
}

fn call_sanitize(args: &Args) -> Value {
    match arg(args, 0) {
        Some(Value::String(text)) => Value::String(helpers::sanitize(text)),
        Some(other) => other.clone(),
        None => Value::String(String::new()),
    }
}
