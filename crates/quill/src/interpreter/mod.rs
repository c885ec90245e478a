//! Interpolation engine.
//!
//! Takes parsed format strings and an argument bundle and produces the
//! rendered string. Every input renders to some string: directives that
//! cannot be resolved render as empty text.

mod coerce;
mod evaluator;
mod lint;
mod lookup;

pub use coerce::render_value;
pub use evaluator::{interpolate, interpolate_parsed};
pub use lint::{FormatWarning, lint_format};
pub use lookup::{LookupStrategy, NAMED_LOOKUP, from_options, from_positional_records, lookup_named};
