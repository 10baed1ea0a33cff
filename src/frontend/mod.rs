//! flatco frontend
//!
//! This module contains all frontend components:
//! - `scanner`: position-tracking cursor over the source buffer
//! - `hygiene`: parameter reference finder
//! - `parser`: building the translation unit from host-language text
//! - `ast`: data model of a parsed unit
//! - `diagnostics`: the dialect error type
//! - `validator`: name resolution, arity checks, and call-graph acyclicity

// Syntax components are provided by the shared flatco_syntax crate.
pub use flatco_syntax::{ast, diagnostics, hygiene, parser, scanner};

// Semantic validation lives with the tool.
pub mod validator;
