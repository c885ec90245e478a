//! Static lint rules for format strings.

use thiserror::Error;

use crate::parser::{Directive, FormatString, Mode};

/// A problem found in a format string that does not stop it from rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatWarning {
    /// Named and positional directives are mixed; the positional ones are
    /// ignored and render as empty text.
    #[error(
        "format string mixes named and positional directives; {ignored} positional directive(s) will render empty"
    )]
    MixedDirectives { ignored: usize },
}

/// Runs lint rules over a parsed format string, returning warnings.
///
/// Operates purely on the parsed tokens without evaluating anything.
pub fn lint_format(format: &FormatString) -> Vec<FormatWarning> {
    let mut warnings = Vec::new();
    lint_mixed_directives(format, &mut warnings);
    warnings
}

fn lint_mixed_directives(format: &FormatString, warnings: &mut Vec<FormatWarning>) {
    if format.mode() != Mode::Named {
        return;
    }
    let ignored = format
        .directives()
        .filter(|directive| matches!(directive, Directive::Positional { .. }))
        .count();
    if ignored > 0 {
        warnings.push(FormatWarning::MixedDirectives { ignored });
    }
}
