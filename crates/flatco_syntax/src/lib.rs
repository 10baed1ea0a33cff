//! Shared syntax frontend for the flatco dialect: scanner, hygiene scanner, parser, AST, diagnostics.
//!
//! The dialect lives inside arbitrary host-language text. This crate never parses the host language: it only
//! recognizes the pseudo-keywords, skips host strings/comments/brackets opaquely, and records where parameter
//! references must later be renamed.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": call resolution and cycle detection live in the compiler crate.
//! - Vocabulary identity (keywords/qualifiers/generated names) comes from `flatco_core::lang` registries.
//! - Spans never copy source text; every record borrows from the one source buffer by offset.
//!
//! ## Examples
//! ```rust
//! use flatco_syntax::parser;
//!
//! let unit = parser::parse("BL_func(x) int One() { BL_return(1); }\n").unwrap();
//! assert_eq!(unit.functions.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod hygiene;
pub mod parser;
pub mod scanner;
