//! Implementation of the `quill currencies` command.

use crate::output::format_currency_table;

/// Run the currencies command.
pub fn run_currencies() -> miette::Result<i32> {
    println!("{}", format_currency_table());
    Ok(exitcode::OK)
}
