//! Balanced regions, type expressions, and expressions up to a delimiter.

use flatco_core::lang::qualifiers;

use super::Scanner;
use crate::ast::Span;
use crate::diagnostics::{DialectError, ErrorKind};

fn closing_bracket(open: u8) -> Option<u8> {
    match open {
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'{' => Some(b'}'),
        b'<' => Some(b'>'),
        _ => None,
    }
}

impl<'src> Scanner<'src> {
    /// Consume a balanced region starting at the opening bracket under the cursor.
    ///
    /// Only brackets of the same kind are counted. String/character literals and comments inside the region are
    /// skipped, so a bracket inside `")"` or `/* ) */` does not close it.
    ///
    /// ## Returns
    /// - The span of the region, both delimiters included.
    ///
    /// ## Errors
    /// - [`ErrorKind::NotABracket`] if the cursor is not at `(`, `[`, `{` or `<`.
    /// - [`ErrorKind::UnclosedBracket`] at the end of the range if the region is never closed.
    pub fn read_bracketed(&mut self) -> Result<Span, DialectError> {
        let start = self.mark();
        let Some((open, close)) = self.peek().and_then(|c| closing_bracket(c).map(|close| (c, close))) else {
            let found = self.peek().map_or(' ', char::from);
            return Err(self.error(ErrorKind::NotABracket(found)));
        };
        self.bump();
        let mut depth = 1usize;
        loop {
            match self.peek() {
                None => return Err(self.error(ErrorKind::UnclosedBracket(close as char))),
                Some(b'"' | b'\'') => {
                    self.read_string_literal()?;
                }
                Some(b'/') if self.peek_at(1).is_some_and(|c| c == b'*' || c == b'/') => {
                    self.skip_comment()?;
                }
                Some(c) => {
                    self.bump();
                    if c == open {
                        depth += 1;
                    } else if c == close {
                        depth -= 1;
                        if depth == 0 {
                            return Ok(self.span_from(start));
                        }
                    }
                }
            }
        }
    }

    /// Skip trivia and consume a bracketed region that must open with `open`.
    ///
    /// ## Errors
    /// - [`ErrorKind::Expected`] with `context` if the next byte is not `open`.
    pub fn expect_bracketed(&mut self, open: u8, context: &'static str) -> Result<Span, DialectError> {
        if self.skip_trivia()? != Some(open) {
            return Err(self.error(ErrorKind::Expected {
                expected: open as char,
                context,
            }));
        }
        self.read_bracketed()
    }

    /// Consume a type expression such as `const std::vector<int> &`.
    ///
    /// The expression is one base name (optionally scope-qualified with `::`) surrounded by any number of
    /// `const`/`volatile` qualifiers, `*`/`&` markers and template-argument brackets. Scanning stops before the
    /// first identifier that would be a second base name, which is the declared name that follows the type.
    ///
    /// ## Returns
    /// - The span of the type (trailing whitespace excluded), or `None` if no base name is present. In both cases
    ///   the cursor is left in front of the stopping token so it can be read again.
    pub fn read_type_expression(&mut self) -> Result<Option<Span>, DialectError> {
        self.skip_trivia()?;
        let start = self.mark();
        let mut last = start.offset;
        let mut got_name = false;
        loop {
            let resume = self.mark();
            let Some(c) = self.skip_trivia()? else {
                break;
            };
            if let Some(ident) = self.peek_identifier() {
                let qualifier = qualifiers::is_type_qualifier(ident.text(self.source));
                if got_name && !qualifier {
                    self.reset(resume);
                    break;
                }
                self.read_identifier()?;
                got_name |= !qualifier;
            } else if c == b':' && self.peek_at(1) == Some(b':') {
                self.bump();
                self.bump();
                self.skip_trivia()?;
                self.read_identifier()?;
                got_name = true;
            } else if got_name && c == b'<' {
                self.read_bracketed()?;
            } else if got_name && matches!(c, b'*' | b'&') {
                self.bump();
            } else {
                self.reset(resume);
                break;
            }
            last = self.offset();
        }
        if !got_name {
            self.reset(start);
            return Ok(None);
        }
        Ok(Some(Span::between(start, last)))
    }

    /// Consume an expression up to an unnested `end` byte.
    ///
    /// Brackets `()`, `[]`, `{}` and literals are consumed as opaque units, so an `end` inside them does not
    /// terminate the expression. Leading and trailing whitespace and comments are not part of the span.
    ///
    /// ## Returns
    /// - The expression span and whether `end` was found (and consumed). `false` means the range ran out first.
    pub fn read_expression(&mut self, end: u8) -> Result<(Span, bool), DialectError> {
        self.read_until(Some(end))
    }

    /// Consume the rest of the range as one expression, trailing whitespace excluded.
    pub fn read_rest(&mut self) -> Result<Span, DialectError> {
        self.read_until(None).map(|(span, _)| span)
    }

    fn read_until(&mut self, end: Option<u8>) -> Result<(Span, bool), DialectError> {
        self.skip_trivia()?;
        let start = self.mark();
        let mut last = start.offset;
        loop {
            let Some(c) = self.skip_trivia()? else {
                return Ok((Span::between(start, last), false));
            };
            if Some(c) == end {
                let span = Span::between(start, last);
                self.bump();
                return Ok((span, true));
            }
            match c {
                b'"' | b'\'' => {
                    self.read_string_literal()?;
                }
                b'(' | b'[' | b'{' => {
                    self.read_bracketed()?;
                }
                _ => {
                    self.bump();
                }
            }
            last = self.offset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Position;

    #[test]
    fn test_bracketed_counts_same_kind_only() {
        let source = "(a[(b)] { ) } c) tail";
        let mut s = Scanner::new(source);
        let span = s.read_bracketed().unwrap();
        // `{ ) }` closes the outer parenthesis early: only parentheses are counted.
        assert_eq!(span.text(source), "(a[(b)] { )");
    }

    #[test]
    fn test_bracketed_skips_literals_and_comments() {
        let source = r#"(")" ')' /* ) */ x) y"#;
        let mut s = Scanner::new(source);
        assert_eq!(s.read_bracketed().unwrap().text(source), r#"(")" ')' /* ) */ x)"#);
        assert_eq!(s.peek(), Some(b' '));
    }

    #[test]
    fn test_template_brackets() {
        let source = "<int, std::vector<char>> v";
        let mut s = Scanner::new(source);
        assert_eq!(s.read_bracketed().unwrap().text(source), "<int, std::vector<char>>");
    }

    #[test]
    fn test_unclosed_bracket() {
        let err = Scanner::new("{ a (\n b").read_bracketed().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnclosedBracket('}'));
        assert_eq!(err.position(), Position::new(2, 3));
    }

    #[test]
    fn test_not_a_bracket() {
        let err = Scanner::new("x").read_bracketed().unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotABracket('x'));
    }

    #[test]
    fn test_expect_bracketed_reports_context() {
        let err = Scanner::new("  x").expect_bracketed(b'(', "after the call keyword").unwrap_err();
        assert_eq!(
            err.kind,
            ErrorKind::Expected {
                expected: '(',
                context: "after the call keyword"
            }
        );
        assert_eq!(err.position(), Position::new(1, 3));
    }

    fn type_and_rest(source: &str) -> (Option<&str>, &str) {
        let mut s = Scanner::new(source);
        let ty = s.read_type_expression().unwrap().map(|span| span.text(source));
        (ty, &source[s.offset()..])
    }

    #[test]
    fn test_type_expressions() {
        assert_eq!(type_and_rest("int a"), (Some("int"), " a"));
        assert_eq!(type_and_rest("const char *p"), (Some("const char *"), "p"));
        assert_eq!(type_and_rest("char const * const p"), (Some("char const * const"), " p"));
        assert_eq!(type_and_rest("Map<K, V>& m"), (Some("Map<K, V>&"), " m"));
        assert_eq!(type_and_rest("std::string s"), (Some("std::string"), " s"));
        assert_eq!(type_and_rest("  volatile int x,"), (Some("volatile int"), " x,"));
    }

    #[test]
    fn test_type_expression_stops_at_other_text() {
        assert_eq!(type_and_rest("int)"), (Some("int"), ")"));
        assert_eq!(type_and_rest("int ("), (Some("int"), " ("));
    }

    #[test]
    fn test_missing_type() {
        assert_eq!(type_and_rest("  *p"), (None, "*p"));
        assert_eq!(type_and_rest("const"), (None, "const"));
        assert_eq!(type_and_rest(""), (None, ""));
    }

    #[test]
    fn test_expression_up_to_delimiter() {
        let source = " f(a, b) + \"x,y\" , next";
        let mut s = Scanner::new(source);
        let (span, found) = s.read_expression(b',').unwrap();
        assert!(found);
        assert_eq!(span.text(source), "f(a, b) + \"x,y\"");
        assert_eq!(span.position, Position::new(1, 2));
        let (span, found) = s.read_expression(b',').unwrap();
        assert!(!found);
        assert_eq!(span.text(source), "next");
    }

    #[test]
    fn test_expression_excludes_trailing_whitespace_and_comments() {
        let source = "a + b /* note */  ";
        let (span, found) = Scanner::new(source).read_expression(b',').unwrap();
        assert!(!found);
        assert_eq!(span.text(source), "a + b");
    }

    #[test]
    fn test_empty_expression() {
        let source = "   ,";
        let mut s = Scanner::new(source);
        let (span, found) = s.read_expression(b',').unwrap();
        assert!(found);
        assert!(span.is_empty());
        assert!(s.is_at_end());
        assert!(Scanner::new("  \n ").read_rest().unwrap().is_empty());
    }
}
