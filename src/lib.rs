#![forbid(unsafe_code)]
//! flatco: a source-to-source expander for the `BL_func` / `BL_call` / `BL_return` pseudo-function dialect
//!
//! Pseudo-functions are written with call/return syntax inside ordinary host-language (C/C++) text. flatco
//! inlines every call, recursively and hygienically, so the output contains no pseudo-functions at all, only
//! plain blocks, temporaries and `goto`s, with `#line` markers pointing back at the original source.
//! This crate provides the frontend (parser from `flatco_syntax` plus the validator), the backend (the expander),
//! and the command-line tool.
//!
//! ## Examples
//!
//! ```rust
//! let source = "BL_func(x) int Add(int a, int b) { BL_return(a + b); }\nBL_call(r = Add(1, 2));\n";
//! let config = flatco::ExpandConfig::new().with_line_markers(false);
//! let out = flatco::expand_source(source, &config).unwrap();
//! assert!(out.contains("int _BLparam0_a = 1;"));
//! assert!(out.contains("r = _BLparam0_a + _BLparam0_b;"));
//! ```
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (e.g. an unresolved call after validation), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod backend;
pub mod cli;
pub mod frontend;
pub mod version;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::parser;
pub use frontend::validator;

pub use backend::{ExpandConfig, generate};
pub use diagnostics::DialectError;
pub use validator::{ValidatedUnit, validate};

/// Parse and validate a source buffer without generating code.
///
/// ## Errors
/// Returns the first lexical, syntactic or semantic [`DialectError`].
pub fn check_source(source: &str) -> Result<ValidatedUnit<'_>, DialectError> {
    validate(parser::parse(source)?)
}

/// Run the whole pipeline (parse, validate, expand) over a source buffer.
///
/// ## Errors
/// Returns the first [`DialectError`]; no partial output is produced.
pub fn expand_source(source: &str, config: &ExpandConfig) -> Result<String, DialectError> {
    let unit = check_source(source)?;
    Ok(generate(&unit, config))
}
