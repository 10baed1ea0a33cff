//! Data model of a parsed translation unit.
//!
//! All records are built once by the parser, completed by the validator (callee ids, callers, return arity),
//! and then consumed read-only by the expander.
//!
//! ## Notes
//! - Cross-record references are small integer ids into tables ([`FunctionId`], [`CallId`], [`ReturnId`]), not
//!   pointers, so the call graph has no ownership cycles.
//! - Text is referenced by [`Span`] (offset + length + starting [`Position`]) into the source buffer.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};

/// Row/column of a character in the source. Both are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    /// Position of the first character of a buffer.
    pub const START: Position = Position { row: 1, column: 1 };

    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

/// A saved scanner location: byte offset plus the position of the character at that offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub offset: usize,
    pub position: Position,
}

/// Reference into the source buffer (byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub len: usize,
    pub position: Position,
}

impl Span {
    pub fn new(start: usize, len: usize, position: Position) -> Self {
        Self { start, len, position }
    }

    /// Span from `start` up to (excluding) byte offset `end`.
    pub fn between(start: Mark, end: usize) -> Self {
        Self {
            start: start.offset,
            len: end.saturating_sub(start.offset),
            position: start.position,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow the spanned text.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end()]
    }
}

/// Parameter name → declaration index of one pseudo-function.
pub type ParamIndex = HashMap<String, usize>;

/// A span plus the offsets (relative to the span, strictly increasing) of parameter references that must be
/// renamed when the text is emitted inside an expansion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubstitutableText {
    pub span: Span,
    pub refs: Vec<usize>,
}

impl SubstitutableText {
    /// Text with no parameter references.
    pub fn plain(span: Span) -> Self {
        Self { span, refs: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn position(&self) -> Position {
        self.span.position
    }

    /// Borrow the original, unsubstituted text.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.text(source)
    }

    /// Render the text with `prefix` inserted in front of every recorded parameter reference.
    ///
    /// ## Examples
    /// ```rust
    /// use flatco_syntax::ast::{Position, Span, SubstitutableText};
    ///
    /// let source = "a + obj.a * b";
    /// let text = SubstitutableText { span: Span::new(0, source.len(), Position::START), refs: vec![0, 12] };
    /// assert_eq!(text.render(source, "_t0_"), "_t0_a + obj.a * _t0_b");
    /// ```
    pub fn render<'s>(&self, source: &'s str, prefix: &str) -> Cow<'s, str> {
        let text = self.text(source);
        if self.refs.is_empty() {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len() + prefix.len() * self.refs.len());
        let mut last = 0;
        for &at in &self.refs {
            out.push_str(&text[last..at]);
            out.push_str(prefix);
            last = at;
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

/// One declared parameter of a pseudo-function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: Span,
    pub name: Span,
}

/// Index into [`TranslationUnit::functions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionId(pub usize);

/// Index into the [`Block::calls`] table of the block that owns the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallId(pub usize);

/// Index into the [`Block::returns`] table of the block that owns the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReturnId(pub usize);

/// A call of a pseudo-function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Callee name as written; errors about the call are reported here.
    pub name: Span,
    /// Assignment target; `None` discards the result.
    pub target: Option<SubstitutableText>,
    pub args: Vec<SubstitutableText>,
    /// Filled in by the validator.
    pub callee: Option<FunctionId>,
}

impl CallSite {
    pub fn position(&self) -> Position {
        self.name.position
    }
}

/// A return from a pseudo-function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnSite {
    pub keyword: Span,
    /// Returned expression; `None` is a void return.
    pub value: Option<SubstitutableText>,
}

impl ReturnSite {
    pub fn position(&self) -> Position {
        self.keyword.position
    }

    pub fn arity(&self) -> ReturnArity {
        if self.value.is_some() {
            ReturnArity::Value
        } else {
            ReturnArity::Void
        }
    }
}

/// The sequencing unit of both the file scope and function bodies. Item order is program order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Code(SubstitutableText),
    Function(FunctionId),
    Call(CallId),
    Return(ReturnId),
}

/// An ordered item sequence with the call/return tables its items refer to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub items: Vec<Item>,
    pub calls: Vec<CallSite>,
    pub returns: Vec<ReturnSite>,
}

impl Block {
    pub fn call(&self, id: CallId) -> &CallSite {
        &self.calls[id.0]
    }

    pub fn return_site(&self, id: ReturnId) -> &ReturnSite {
        &self.returns[id.0]
    }
}

/// Whether a pseudo-function produces a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnArity {
    /// No return sites (yet); behaves as void.
    #[default]
    Unknown,
    Void,
    Value,
}

/// A pseudo-function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    pub keyword: Span,
    pub return_type: Span,
    pub name: Span,
    pub params: Vec<Parameter>,
    pub param_index: ParamIndex,
    pub body: Block,
    /// Reverse call edges, filled in by the validator.
    pub callers: BTreeSet<FunctionId>,
    /// Resolved from the return sites by the validator.
    pub arity: ReturnArity,
}

impl FunctionDef {
    pub fn returns_value(&self) -> bool {
        self.arity == ReturnArity::Value
    }
}

/// Everything parsed from one source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit<'src> {
    pub source: &'src str,
    /// File-scope items and calls. Its return table is always empty.
    pub top: Block,
    /// Definition order.
    pub functions: Vec<FunctionDef>,
    /// Filled in by the validator.
    pub by_name: HashMap<&'src str, FunctionId>,
}

impl<'src> TranslationUnit<'src> {
    pub fn new(source: &'src str, top: Block, functions: Vec<FunctionDef>) -> Self {
        Self {
            source,
            top,
            functions,
            by_name: HashMap::new(),
        }
    }

    pub fn function(&self, id: FunctionId) -> &FunctionDef {
        &self.functions[id.0]
    }

    pub fn function_name(&self, id: FunctionId) -> &'src str {
        self.functions[id.0].name.text(self.source)
    }

    pub fn lookup(&self, name: &str) -> Option<FunctionId> {
        self.by_name.get(name).copied()
    }
}
