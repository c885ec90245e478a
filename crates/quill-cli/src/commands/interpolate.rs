//! Implementation of the `quill interpolate` command.

use quill::interpreter::{interpolate_parsed, lint_format};
use quill::{parse_format, Args, Value};
use serde::Serialize;

use super::{collect_options, parse_key_val, parse_value};
use crate::output::print_warnings;

/// Arguments for the interpolate command.
#[derive(Debug, clap::Args)]
pub struct InterpolateArgs {
    /// Format string, e.g. "%(greeting)s %(name)s!" or "%s scored %d"
    pub format: String,

    /// Positional values (parsed as JSON when possible)
    #[arg(value_parser = parse_value, allow_hyphen_values = true)]
    pub values: Vec<Value>,

    /// Keyword options in key=value format (repeatable)
    #[arg(short = 'o', long = "opt", value_parser = parse_key_val)]
    pub options: Vec<(String, Value)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for interpolate results.
#[derive(Serialize)]
pub struct InterpolateResult {
    pub result: String,
}

/// Run the interpolate command.
pub fn run_interpolate(args: InterpolateArgs, verbose: bool) -> miette::Result<i32> {
    let format = parse_format(&args.format);
    if verbose {
        print_warnings(&lint_format(&format));
    }

    let bundle = Args::builder()
        .positional(args.values)
        .options(collect_options(args.options))
        .build();
    let result = interpolate_parsed(&format, &bundle);

    if args.json {
        let output = InterpolateResult { result };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).map_err(|e| miette::miette!("{e}"))?
        );
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
