//! Comments and quoted literals.

use super::Scanner;
use crate::ast::Span;
use crate::diagnostics::{DialectError, ErrorKind};

impl<'src> Scanner<'src> {
    /// Skip a comment starting at the cursor.
    ///
    /// ## Returns
    /// - `true` if a `/* */` or `//` comment was consumed, `false` if the cursor is not at a comment (e.g. a
    ///   division operator).
    pub(super) fn skip_comment(&mut self) -> Result<bool, DialectError> {
        if self.peek() != Some(b'/') {
            return Ok(false);
        }
        match self.peek_at(1) {
            Some(b'*') => {
                self.bump();
                self.bump();
                self.skip_block_comment_body()?;
                Ok(true)
            }
            Some(b'/') => {
                while self.peek().is_some_and(|c| c != b'\n') {
                    self.bump();
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn skip_block_comment_body(&mut self) -> Result<(), DialectError> {
        while let Some(c) = self.bump() {
            if c == b'*' && self.peek() == Some(b'/') {
                self.bump();
                return Ok(());
            }
        }
        Err(self.error(ErrorKind::UnterminatedComment))
    }

    /// Consume a string or character literal starting at the opening quote under the cursor.
    ///
    /// A backslash escapes exactly the next character. A raw newline inside the literal is an error.
    ///
    /// ## Returns
    /// - The span of the literal, both quotes included.
    ///
    /// ## Errors
    /// - [`ErrorKind::StringCrossesLine`] at the newline.
    /// - [`ErrorKind::UnterminatedString`] at the end of the range.
    pub fn read_string_literal(&mut self) -> Result<Span, DialectError> {
        let start = self.mark();
        let Some(quote) = self.bump() else {
            return Err(self.error(ErrorKind::UnterminatedString));
        };
        loop {
            match self.peek() {
                None => return Err(self.error(ErrorKind::UnterminatedString)),
                Some(b'\n') => return Err(self.error(ErrorKind::StringCrossesLine)),
                Some(b'\\') => {
                    self.bump();
                    self.bump();
                }
                Some(c) => {
                    self.bump();
                    if c == quote {
                        return Ok(self.span_from(start));
                    }
                }
            }
        }
    }
}
