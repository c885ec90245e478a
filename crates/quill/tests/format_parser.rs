//! Integration tests for format string parsing.

use quill::parser::{Directive, DirectiveKind, FormatString, Mode, Segment, parse_format};

fn named(key: &str) -> Segment {
    Segment::Directive(Directive::Named {
        key: key.into(),
        kind: DirectiveKind::String,
    })
}

fn positional(kind: DirectiveKind) -> Segment {
    Segment::Directive(Directive::Positional { kind })
}

fn literal(text: &str) -> Segment {
    Segment::Literal(text.into())
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn test_pure_literal() {
    let f = parse_format("Hello, world!");
    assert_eq!(f.segments, vec![literal("Hello, world!")]);
}

#[test]
fn test_empty_string() {
    let f = parse_format("");
    assert_eq!(f.segments, vec![]);
    assert_eq!(f.mode(), Mode::Positional);
}

#[test]
fn test_multiline_literal() {
    let f = parse_format("Line 1\nLine 2");
    assert_eq!(f.segments, vec![literal("Line 1\nLine 2")]);
}

// =============================================================================
// Directives
// =============================================================================

#[test]
fn test_named_directives() {
    let f = parse_format("%(greeting)s %(name)s!");
    assert_eq!(
        f.segments,
        vec![named("greeting"), literal(" "), named("name"), literal("!")]
    );
    assert_eq!(f.mode(), Mode::Named);
}

#[test]
fn test_named_integer_directive() {
    let f = parse_format("%(count)d");
    assert_eq!(
        f.segments,
        vec![Segment::Directive(Directive::Named {
            key: "count".into(),
            kind: DirectiveKind::Integer,
        })]
    );
}

#[test]
fn test_identifier_characters() {
    let f = parse_format("%(_first_name2)s");
    assert_eq!(f.segments, vec![named("_first_name2")]);
}

#[test]
fn test_positional_directives() {
    let f = parse_format("This is a test: %s %d");
    assert_eq!(
        f.segments,
        vec![
            literal("This is a test: "),
            positional(DirectiveKind::String),
            literal(" "),
            positional(DirectiveKind::Integer),
        ]
    );
    assert_eq!(f.mode(), Mode::Positional);
}

#[test]
fn test_adjacent_directives() {
    let f = parse_format("%s%s");
    assert_eq!(
        f.segments,
        vec![
            positional(DirectiveKind::String),
            positional(DirectiveKind::String)
        ]
    );
}

// =============================================================================
// Escapes and unrecognized sequences
// =============================================================================

#[test]
fn test_escaped_percent() {
    let f = parse_format("100%% sure");
    assert_eq!(f.segments, vec![literal("100% sure")]);
}

#[test]
fn test_escaped_percent_before_directive_character() {
    let f = parse_format("%%s");
    assert_eq!(f.segments, vec![literal("%s")]);
}

#[test]
fn test_unknown_type_is_literal() {
    let f = parse_format("%x and %f");
    assert_eq!(f.segments, vec![literal("%x and %f")]);
}

#[test]
fn test_trailing_percent_is_literal() {
    let f = parse_format("50%");
    assert_eq!(f.segments, vec![literal("50%")]);
}

#[test]
fn test_malformed_named_directives_are_literal() {
    for input in ["%(name", "%()s", "%(1abc)s", "%(name)x", "%(na me)s"] {
        let f = parse_format(input);
        assert_eq!(f.segments, vec![literal(input)], "input: {input:?}");
    }
}

#[test]
fn test_malformed_then_valid() {
    let f = parse_format("%(%(a)s");
    assert_eq!(f.segments, vec![literal("%("), named("a")]);
}

#[test]
fn test_unicode_literals() {
    let f = parse_format("héllo %s ✓");
    assert_eq!(
        f.segments,
        vec![
            literal("héllo "),
            positional(DirectiveKind::String),
            literal(" ✓")
        ]
    );
}

// =============================================================================
// Mode classification
// =============================================================================

#[test]
fn test_mixed_directives_are_named_mode() {
    let f = parse_format("%s %(a)s");
    assert_eq!(f.mode(), Mode::Named);
    assert_eq!(f.directives().count(), 2);
}

#[test]
fn test_directive_order_is_stable() {
    let f: FormatString = parse_format("%(b)s %(a)s %(b)d");
    let keys: Vec<_> = f
        .directives()
        .map(|d| match d {
            Directive::Named { key, kind } => format!("{key}:{}", kind.as_char()),
            Directive::Positional { kind } => kind.as_char().to_string(),
        })
        .collect();
    assert_eq!(keys, vec!["b:s", "a:s", "b:d"]);
}
