//! Output formatting for CLI commands.

pub mod diagnostic;
pub mod table;

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};

pub use diagnostic::{CurrencyDiagnostic, UnknownHelperDiagnostic};
pub use table::format_currency_table;

/// Print lint warnings to stderr, one per line.
pub fn print_warnings<W: Display>(warnings: &[W]) {
    for warning in warnings {
        eprintln!(
            "{} {}",
            "warning:".if_supports_color(Stream::Stderr, |text| text.yellow()),
            warning
        );
    }
}
