//! Diagnostics for the dialect.
//!
//! There is a single error type, [`DialectError`]: a source location plus an [`ErrorKind`]. Every error is fatal
//! to the translation unit being processed; the pipeline stops at the first one.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::{Mark, Position, Span};

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // ---- lexical --------------------------------------------------------
    #[error("multi-line comment is not closed")]
    UnterminatedComment,

    #[error("string literal has no closing quote")]
    UnterminatedString,

    #[error("string literal crosses a line break")]
    StringCrossesLine,

    #[error("'{0}' is not an opening bracket")]
    NotABracket(char),

    #[error("no matching '{0}' before the end of input")]
    UnclosedBracket(char),

    // ---- syntax ---------------------------------------------------------
    #[error("expected '{expected}' {context}")]
    Expected { expected: char, context: &'static str },

    #[error("identifier expected (must start with A-Za-z_)")]
    ExpectedIdentifier,

    #[error("return type of the pseudo-function expected")]
    MissingReturnType,

    #[error("parameter expected after ','")]
    ExpectedParameter,

    #[error("syntax error or missing ','")]
    MissingComma,

    #[error("assignment target expected before '='")]
    MissingCallTarget,

    #[error("unexpected text after the argument list of the call")]
    TrailingCallText,

    #[error("empty argument (dangling ',')")]
    EmptyArgument,

    #[error("duplicate parameter `{0}`")]
    DuplicateParameter(String),

    #[error("return used outside a pseudo-function")]
    ReturnOutsideFunction,

    #[error("pseudo-functions cannot be defined inside another pseudo-function")]
    NestedFunction,

    // ---- semantic -------------------------------------------------------
    #[error("duplicate pseudo-function `{0}`")]
    DuplicateFunction(String),

    #[error("call to undefined pseudo-function `{0}`")]
    UndefinedFunction(String),

    #[error("pseudo-function `{0}` calls itself")]
    SelfCall(String),

    #[error("`{callee}` takes {expected} argument(s) but the call supplies {found}")]
    ArgumentCount {
        callee: String,
        expected: usize,
        found: usize,
    },

    #[error("the call assigns a result but `{0}` does not return a value")]
    VoidTarget(String),

    #[error("returns are inconsistent: some return a value and some do not")]
    InconsistentReturns,

    #[error("recursive calls between pseudo-functions: {}", .0.join(" "))]
    RecursiveCalls(Vec<String>),
}

/// A fatal error at a source location.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(code(flatco::dialect))]
pub struct DialectError {
    pub row: usize,
    pub column: usize,
    pub kind: ErrorKind,
    #[label("here")]
    pub span: SourceSpan,
}

impl DialectError {
    /// Error at a single character.
    pub fn new(kind: ErrorKind, offset: usize, position: Position) -> Self {
        Self {
            row: position.row,
            column: position.column,
            kind,
            span: SourceSpan::from((offset, 0)),
        }
    }

    /// Error at a scanner mark.
    pub fn at_mark(kind: ErrorKind, mark: Mark) -> Self {
        Self::new(kind, mark.offset, mark.position)
    }

    /// Error covering a span (the label underlines the whole span).
    pub fn at_span(kind: ErrorKind, span: &Span) -> Self {
        Self {
            row: span.position.row,
            column: span.position.column,
            kind,
            span: SourceSpan::from((span.start, span.len)),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }

    /// Byte offset of the error in the source buffer.
    pub fn offset(&self) -> usize {
        self.span.offset()
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// One-line `row:column: message` rendering for plain-text consumers.
    pub fn located(&self) -> String {
        format!("{}:{}: {}", self.row, self.column, self.kind)
    }
}
