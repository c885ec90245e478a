//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use quill::currency::render_amount;
use quill_semantics::{CurrencyCode, NumberLocale};

const SAMPLE_AMOUNT: f64 = 1_234_567.89;

/// Format the supported currencies as a table, with a sample amount rendered
/// in the native locale and under the `en` override.
pub fn format_currency_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Code", "Symbol", "Locale", "Native", "en"]);

    for code in CurrencyCode::ALL {
        let native = code.native_locale();
        table.add_row(vec![
            code.as_str().to_string(),
            code.symbol().to_string(),
            native.as_str().to_string(),
            render_amount(SAMPLE_AMOUNT, code, native),
            render_amount(SAMPLE_AMOUNT, code, NumberLocale::En),
        ]);
    }

    table
}
