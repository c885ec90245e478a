//! Format string evaluation.
//!
//! Resolves each directive of a parsed format string against an argument
//! bundle and concatenates the rendered segments.

use std::slice::Iter;

use tracing::debug;

use crate::interpreter::coerce::render_value;
use crate::interpreter::lookup::lookup_named;
use crate::parser::{Directive, FormatString, Mode, Segment, parse_format};
use crate::types::{Args, Value};

/// Interpolate `args` into `format`.
///
/// When the format string contains any `%(key)s` directive, every key is
/// looked up by name (options first, then positional records) and positional
/// directives render as empty text. Otherwise `%s` and `%d` consume the
/// positional values in order. Unresolved directives render as empty text.
///
/// # Example
///
/// ```
/// use quill::{Args, Value, interpolate, record};
///
/// let named = Args::from_options(record! { "greeting" => "Hello", "name" => "Kabir" });
/// assert_eq!(interpolate("%(greeting)s %(name)s!", &named), "Hello Kabir!");
///
/// let positional = Args::from_positional(vec![Value::from("Foo"), Value::from("9.7")]);
/// assert_eq!(interpolate("%s-%d", &positional), "Foo-9");
/// ```
pub fn interpolate(format: &str, args: &Args) -> String {
    interpolate_parsed(&parse_format(format), args)
}

/// Interpolate `args` into an already parsed format string.
pub fn interpolate_parsed(format: &FormatString, args: &Args) -> String {
    let mode = format.mode();
    debug!(?mode, "interpolating format string");

    let mut positional = args.positional.iter();
    let mut output = String::new();
    for segment in &format.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Directive(directive) => {
                match resolve_directive(directive, mode, args, &mut positional) {
                    Some(value) => output.push_str(&render_value(value, directive.kind())),
                    None => debug!(?directive, "directive unresolved, rendering empty"),
                }
            }
        }
    }
    output
}

/// Find the value for one directive.
///
/// Positional directives consume from `positional` only in positional mode,
/// so a named format string never advances the positional cursor.
fn resolve_directive<'a>(
    directive: &Directive,
    mode: Mode,
    args: &'a Args,
    positional: &mut Iter<'a, Value>,
) -> Option<&'a Value> {
    match (mode, directive) {
        (Mode::Named, Directive::Named { key, .. }) => lookup_named(key, args),
        (Mode::Positional, Directive::Positional { .. }) => positional.next(),
        (Mode::Named, Directive::Positional { .. }) | (Mode::Positional, Directive::Named { .. }) => {
            None
        }
    }
}
