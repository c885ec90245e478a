//! Miette diagnostics for currency and helper failures.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::Diagnostic;
use quill::currency::{compute_suggestions, lint_currency_options, OptionWarning};
use quill::{CurrencyError, HelperRegistry, Options};
use thiserror::Error;

/// Why `formatCurrency` rendered nothing.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(quill::currency))]
pub struct CurrencyDiagnostic {
    message: String,

    #[help]
    help: Option<String>,
}

impl CurrencyDiagnostic {
    /// Build a diagnostic from a gate failure, borrowing hints from the option lint.
    pub fn from_error(err: &CurrencyError, options: &Options) -> Self {
        let help = match err {
            CurrencyError::MissingValue => Some("pass a number or a numeric string".to_string()),
            CurrencyError::InvalidValue { .. } => {
                Some("numeric strings look like 1234.5 or -0.25".to_string())
            }
            CurrencyError::UnknownCode { .. } => lint_currency_options(options)
                .into_iter()
                .find_map(|warning| match warning {
                    OptionWarning::UnknownCode { suggestions, .. } if !suggestions.is_empty() => {
                        Some(format!("did you mean: {}?", suggestions.join(", ")))
                    }
                    _ => None,
                }),
        };
        CurrencyDiagnostic {
            message: err.to_string(),
            help,
        }
    }
}

/// A helper name that is not registered.
#[derive(Debug, Error, Diagnostic)]
#[error("unknown helper '{name}'")]
#[diagnostic(code(quill::unknown_helper))]
pub struct UnknownHelperDiagnostic {
    name: String,

    #[help]
    help: Option<String>,
}

impl UnknownHelperDiagnostic {
    pub fn new(name: &str, registry: &HelperRegistry) -> Self {
        let available: Vec<&str> = registry.names().collect();
        let suggestions = compute_suggestions(name, &available);
        let help = if suggestions.is_empty() {
            Some(format!("available helpers: {}", available.join(", ")))
        } else {
            Some(format!("did you mean: {}?", suggestions.join(", ")))
        };
        UnknownHelperDiagnostic {
            name: name.to_string(),
            help,
        }
    }
}
