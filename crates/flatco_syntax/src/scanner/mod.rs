//! Position-tracking cursor over a byte range of one source buffer.
//!
//! Every higher component (hygiene scanner, call/function parsers, unit builder, include detection) is built only
//! from the primitives here:
//! - trivia skipping (whitespace, `/* */` and `//` comments)
//! - string/character literals
//! - identifiers
//! - balanced bracket regions, type expressions, and expressions up to a delimiter
//!
//! ## Module Structure
//!
//! - `literals` - comments and quoted literals
//! - `regions` - bracketed spans, type expressions, delimited expressions
//!
//! ## Notes
//! - The scanner works on bytes. All dialect syntax is ASCII; other bytes are opaque host text.
//! - Rows start at 1 and advance after each `\n`. Columns are 1-based and count characters: `\r` and UTF-8
//!   continuation bytes do not advance the column.
//! - The position is updated incrementally as the cursor advances, never recomputed from the buffer start.

mod literals;
mod regions;

use std::ops::Range;

use crate::ast::{Mark, Position, Span};
use crate::diagnostics::{DialectError, ErrorKind};

/// Cursor over `[start, end)` of a source buffer.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src str,
    bytes: &'src [u8],
    pos: usize,
    end: usize,
    /// Position of the byte at `pos`.
    position: Position,
}

impl<'src> Scanner<'src> {
    /// Scan the whole buffer.
    pub fn new(source: &'src str) -> Self {
        Self::within(source, 0..source.len(), Position::START)
    }

    /// Scan `range` of `source`; `start` is the position of the byte at `range.start`.
    pub fn within(source: &'src str, range: Range<usize>, start: Position) -> Self {
        debug_assert!(range.start <= range.end && range.end <= source.len());
        Self {
            source,
            bytes: source.as_bytes(),
            pos: range.start,
            end: range.end,
            position: start,
        }
    }

    /// Scan exactly the text of `span`.
    pub fn over(source: &'src str, span: &Span) -> Self {
        Self::within(source, span.start..span.end(), span.position)
    }

    /// Scan the interior of a bracketed span, excluding both delimiters.
    pub fn inside(source: &'src str, span: &Span) -> Self {
        debug_assert!(span.len >= 2, "bracketed span must include both delimiters");
        let start = Position::new(span.position.row, span.position.column + 1);
        Self::within(source, span.start + 1..span.end() - 1, start)
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn mark(&self) -> Mark {
        Mark {
            offset: self.pos,
            position: self.position,
        }
    }

    /// Return the cursor to a previously saved mark.
    pub fn reset(&mut self, mark: Mark) {
        self.pos = mark.offset;
        self.position = mark.position;
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Current byte, if any.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Byte `n` positions ahead, if still inside the range.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        let at = self.pos + n;
        if at < self.end { Some(self.bytes[at]) } else { None }
    }

    /// Consume one byte.
    pub fn bump(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.pos += 1;
        match c {
            b'\n' => {
                self.position.row += 1;
                self.position.column = 1;
            }
            b'\r' => {}
            c if is_utf8_continuation(c) => {}
            _ => self.position.column += 1,
        }
        Some(c)
    }

    /// Span from `start` to the cursor.
    pub fn span_from(&self, start: Mark) -> Span {
        Span::between(start, self.pos)
    }

    pub(crate) fn error(&self, kind: ErrorKind) -> DialectError {
        DialectError::at_mark(kind, self.mark())
    }

    /// Skip whitespace and comments.
    ///
    /// ## Returns
    /// - The first byte that is neither (not consumed), or `None` at the end of the range.
    ///
    /// ## Errors
    /// - [`ErrorKind::UnterminatedComment`] for a `/*` without `*/`.
    pub fn skip_trivia(&mut self) -> Result<Option<u8>, DialectError> {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\n' | b'\r') => {
                    self.bump();
                }
                Some(b'/') => {
                    if !self.skip_comment()? {
                        return Ok(Some(b'/'));
                    }
                }
                other => return Ok(other),
            }
        }
    }

    /// Preview the identifier at the cursor without consuming it.
    pub fn peek_identifier(&self) -> Option<Span> {
        if !self.peek().is_some_and(is_ident_start) {
            return None;
        }
        let len = self.bytes[self.pos..self.end]
            .iter()
            .take_while(|&&c| is_ident_continue(c))
            .count();
        Some(Span::new(self.pos, len, self.position))
    }

    /// Consume the identifier at the cursor.
    ///
    /// ## Errors
    /// - [`ErrorKind::ExpectedIdentifier`] if the cursor is not at `[A-Za-z_]`.
    pub fn read_identifier(&mut self) -> Result<Span, DialectError> {
        let ident = self
            .peek_identifier()
            .ok_or_else(|| self.error(ErrorKind::ExpectedIdentifier))?;
        // Identifiers are ASCII: one column per byte.
        self.pos += ident.len;
        self.position.column += ident.len;
        Ok(ident)
    }

    /// Consume a preprocessing number (`10u`, `0x1fL`, `1.5e3f`) starting at a digit under the cursor, so its
    /// suffix is not taken for an identifier.
    pub fn skip_number(&mut self) {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_' || c == b'.')
        {
            self.bump();
        }
    }

    /// Skip trivia and consume the identifier that follows.
    pub fn skip_to_identifier(&mut self) -> Result<Span, DialectError> {
        self.skip_trivia()?;
        self.read_identifier()
    }
}

/// Check if a byte can start an identifier (ASCII-only).
pub fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Check if a byte can continue an identifier (ASCII-only).
pub fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

fn is_utf8_continuation(c: u8) -> bool {
    c & 0b1100_0000 == 0b1000_0000
}
