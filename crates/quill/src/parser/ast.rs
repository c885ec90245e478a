//! Public token types for parsed format strings.
//!
//! These types are public so that tooling (the format lint, the CLI) can
//! inspect a format string without evaluating it.

pub use quill_semantics::DirectiveKind;

/// A parsed format string: literal text interleaved with directives.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatString {
    pub segments: Vec<Segment>,
}

/// A segment within a format string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, copied to the output unchanged.
    Literal(String),
    /// A placeholder to be replaced by an argument.
    Directive(Directive),
}

/// A substitution directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// `%(key)s` or `%(key)d`: a value looked up by name.
    Named { key: String, kind: DirectiveKind },
    /// `%s` or `%d`: the next positional value.
    Positional { kind: DirectiveKind },
}

/// How the directives of a format string are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// At least one named directive is present; values are looked up by key.
    Named,
    /// Only positional directives (or none); values are consumed in order.
    Positional,
}

impl Directive {
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Directive::Named { kind, .. } | Directive::Positional { kind } => *kind,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Directive::Named { .. })
    }
}

impl FormatString {
    /// Iterate over the directives in source order.
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Directive(directive) => Some(directive),
            Segment::Literal(_) => None,
        })
    }

    /// Classify the format string: any named directive selects named mode.
    pub fn mode(&self) -> Mode {
        if self.directives().any(Directive::is_named) {
            Mode::Named
        } else {
            Mode::Positional
        }
    }
}
