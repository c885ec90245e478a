//! Format string scanner using winnow.
//!
//! Scans a format string into segments. Handles:
//! - Literal text runs
//! - Named directives: `%(key)s`, `%(key)d`
//! - Positional directives: `%s`, `%d`
//! - The escape sequence `%%` -> `%`
//! - Any other `%` sequence, which is kept as literal text

use quill_semantics::resolve_directive_kind;
use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_while};

use super::ast::*;

/// Parse a format string into segments.
///
/// Never fails. Adjacent literal text is merged into a single segment.
///
/// # Example
///
/// ```
/// use quill::parser::{Directive, DirectiveKind, Segment, parse_format};
///
/// let format = parse_format("%s scored %d%%");
/// assert_eq!(
///     format.segments,
///     vec![
///         Segment::Directive(Directive::Positional { kind: DirectiveKind::String }),
///         Segment::Literal(" scored ".into()),
///         Segment::Directive(Directive::Positional { kind: DirectiveKind::Integer }),
///         Segment::Literal("%".into()),
///     ]
/// );
/// ```
pub fn parse_format(input: &str) -> FormatString {
    let mut remaining = input;
    let segments = match format_segments(&mut remaining) {
        Ok(segments) if remaining.is_empty() => merge_literals(segments),
        // The literal fallback accepts every character, so the scan always
        // reaches the end; keep the input verbatim if it ever does not.
        _ => vec![Segment::Literal(input.to_string())],
    };
    FormatString { segments }
}

fn format_segments(input: &mut &str) -> ModalResult<Vec<Segment>> {
    repeat(0.., segment).parse_next(input)
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment.
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((
        escaped_percent,
        named_directive,
        positional_directive,
        literal_run,
        stray_percent,
    ))
    .parse_next(input)
}

/// Parse the escape sequence `%%`.
fn escaped_percent(input: &mut &str) -> ModalResult<Segment> {
    "%%".value(Segment::Literal("%".to_string()))
        .parse_next(input)
}

/// Parse `%(key)s` or `%(key)d`.
fn named_directive(input: &mut &str) -> ModalResult<Segment> {
    preceded('%', (delimited('(', identifier, ')'), directive_kind))
        .map(|(key, kind)| {
            Segment::Directive(Directive::Named {
                key: key.to_string(),
                kind,
            })
        })
        .parse_next(input)
}

/// Parse `%s` or `%d`.
fn positional_directive(input: &mut &str) -> ModalResult<Segment> {
    preceded('%', directive_kind)
        .map(|kind| Segment::Directive(Directive::Positional { kind }))
        .parse_next(input)
}

/// Parse a run of text containing no `%`.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '%')
        .map(|text: &str| Segment::Literal(text.to_string()))
        .parse_next(input)
}

/// A `%` that does not start a directive is literal text.
fn stray_percent(input: &mut &str) -> ModalResult<Segment> {
    '%'.value(Segment::Literal("%".to_string()))
        .parse_next(input)
}

/// Parse a directive type character.
fn directive_kind(input: &mut &str) -> ModalResult<DirectiveKind> {
    any.verify_map(resolve_directive_kind).parse_next(input)
}

/// Parse an identifier.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (one_of(is_ident_start), take_while(0.., is_ident_cont))
        .take()
        .parse_next(input)
}

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
