//! Implementation of the `quill currency` command.

use quill::currency::lint_currency_options;
use quill::{try_format_currency, Value};
use quill_semantics::{CODE_OPTION, LOCALE_OPTION};

use super::{collect_options, parse_key_val, parse_value};
use crate::output::{print_warnings, CurrencyDiagnostic};

/// Arguments for the currency command.
#[derive(Debug, clap::Args)]
pub struct CurrencyArgs {
    /// Value to format (parsed as JSON when possible)
    #[arg(value_parser = parse_value, allow_hyphen_values = true)]
    pub value: Option<Value>,

    /// Currency code (USD or EUR)
    #[arg(long)]
    pub code: Option<String>,

    /// Locale override (only "en" is recognized)
    #[arg(long)]
    pub locale: Option<String>,

    /// Additional options in key=value format (repeatable)
    #[arg(short = 'o', long = "opt", value_parser = parse_key_val)]
    pub options: Vec<(String, Value)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the currency command.
///
/// The formatted amount goes to stdout. When the gate rejects the input the
/// result is empty and the reason is reported on stderr.
pub fn run_currency(args: CurrencyArgs, verbose: bool) -> miette::Result<i32> {
    let mut options = collect_options(args.options);
    if let Some(code) = args.code {
        options.insert(CODE_OPTION.to_string(), Value::from(code));
    }
    if let Some(locale) = args.locale {
        options.insert(LOCALE_OPTION.to_string(), Value::from(locale));
    }

    if verbose {
        print_warnings(&lint_currency_options(&options));
    }

    match try_format_currency(args.value.as_ref(), &options) {
        Ok(result) => {
            if args.json {
                let output = serde_json::json!({ "result": result });
                println!("{output}");
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "result": "",
                    "error": e.to_string()
                });
                println!("{output}");
            } else {
                println!();
                let diagnostic = CurrencyDiagnostic::from_error(&e, &options);
                eprintln!("{:?}", miette::Report::new(diagnostic));
            }
            Ok(exitcode::DATAERR)
        }
    }
}
