//! Parameter reference finder.
//!
//! Inside a pseudo-function every plain use of a parameter name must be renamed when the body is inlined, so that
//! two expansions of the same function never share variables. This module finds those uses and records their
//! offsets; the renaming itself happens at emission time ([`SubstitutableText::render`]).
//!
//! ## Notes
//! - A name directly preceded by a member or scope qualifier (`obj.x`, `p->x`, `ns::x`, `.*`, `->*`) is not a
//!   parameter use and is left alone. The check looks back at most three characters past whitespace (see
//!   [`flatco_core::lang::qualifiers`]).
//! - String/character literals, comments and numeric literals (`0x1f`, `1e5f`) are skipped.

use flatco_core::lang::qualifiers;

use crate::ast::{ParamIndex, Span, SubstitutableText};
use crate::diagnostics::DialectError;
use crate::scanner::Scanner;

/// Find every plain use of a parameter in `span`.
///
/// ## Parameters
/// - `params`: the enclosing pseudo-function's parameters, or `None` at file scope.
///
/// ## Returns
/// - The span with the offsets (relative to `span.start`, in scan order) of each parameter use.
pub fn find_param_refs(
    source: &str,
    span: Span,
    params: Option<&ParamIndex>,
) -> Result<SubstitutableText, DialectError> {
    let Some(params) = params.filter(|p| !p.is_empty()) else {
        return Ok(SubstitutableText::plain(span));
    };
    let bytes = source.as_bytes();
    let mut refs = Vec::new();
    let mut scanner = Scanner::over(source, &span);
    while let Some(c) = scanner.skip_trivia()? {
        match c {
            b'"' | b'\'' => {
                scanner.read_string_literal()?;
            }
            c if c.is_ascii_digit() => scanner.skip_number(),
            _ => match scanner.peek_identifier() {
                Some(ident) => {
                    scanner.read_identifier()?;
                    if params.contains_key(ident.text(source))
                        && !qualifiers::ends_with_qualifier(&bytes[span.start..ident.start])
                    {
                        refs.push(ident.start - span.start);
                    }
                }
                None => {
                    scanner.bump();
                }
            },
        }
    }
    Ok(SubstitutableText { span, refs })
}
