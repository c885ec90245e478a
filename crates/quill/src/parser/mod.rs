//! Format string parser.
//!
//! This module scans format strings into a flat token stream of literal text
//! and substitution directives. The scanner is total: text it does not
//! recognize as a directive is kept as literal text.

pub mod ast;
mod format;

pub use ast::*;
pub use format::parse_format;
