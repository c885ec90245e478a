//! Implementation of the `quill helper` command.

use quill::{HelperRegistry, Value};

use super::{collect_options, parse_key_val, parse_value};
use crate::output::UnknownHelperDiagnostic;

/// Arguments for the helper command.
#[derive(Debug, clap::Args)]
pub struct HelperArgs {
    /// Helper name as written in templates (e.g. excerpt, capitalizeEach)
    pub name: String,

    /// Positional values (parsed as JSON when possible)
    #[arg(value_parser = parse_value, allow_hyphen_values = true)]
    pub values: Vec<Value>,

    /// Keyword options in key=value format (repeatable)
    #[arg(short = 'o', long = "opt", value_parser = parse_key_val)]
    pub options: Vec<(String, Value)>,

    /// Output the returned value as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the helper command.
pub fn run_helper(args: HelperArgs) -> miette::Result<i32> {
    let registry = HelperRegistry::with_builtins();

    let mut call = args.values;
    call.push(Value::Record(collect_options(args.options)));

    let Some(result) = registry.call(&args.name, call) else {
        let diagnostic = UnknownHelperDiagnostic::new(&args.name, &registry);
        eprintln!("{:?}", miette::Report::new(diagnostic));
        return Ok(exitcode::USAGE);
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string(&result).map_err(|e| miette::miette!("{e}"))?
        );
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
