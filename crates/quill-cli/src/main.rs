//! Quill CLI entry point.
//!
//! Provides command-line access to the Quill template helpers:
//! - `quill interpolate` - Render a format string
//! - `quill currency` - Format a value as currency
//! - `quill currencies` - List supported currencies
//! - `quill helper` - Run any registered helper by name

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_currencies, run_currency, run_helper, run_interpolate, CurrencyArgs, HelperArgs,
    InterpolateArgs,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Quill template helper tools.
#[derive(Debug, Parser)]
#[command(name = "quill")]
#[command(about = "Quill template helper tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true, env = "QUILL_COLOR")]
    pub color: ColorWhen,

    /// Enable verbose output (lint warnings and debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a format string with positional or named values
    Interpolate(InterpolateArgs),
    /// Format a value as currency
    Currency(CurrencyArgs),
    /// List supported currencies
    Currencies,
    /// Run a template helper by name
    Helper(HelperArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Route library logging to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_filter = if verbose { "quill=debug" } else { "quill=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(stderr))
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Interpolate(args) => run_interpolate(args, cli.verbose),
        Commands::Currency(args) => run_currency(args, cli.verbose),
        Commands::Currencies => run_currencies(),
        Commands::Helper(args) => run_helper(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
