//! Parser for the flatco pseudo-function dialect.
//!
//! Scans host-language text top to bottom, treating everything that is not a pseudo-keyword as opaque code, and
//! builds a [`TranslationUnit`]: the file-scope item sequence plus one [`FunctionDef`] per `BL_func`.
//!
//! ## Examples
//!
//! ```rust
//! use flatco_syntax::ast::Item;
//! use flatco_syntax::parser;
//!
//! let source = "int r;\nBL_call(r = Get());\n";
//! let unit = parser::parse(source).unwrap();
//! assert_eq!(unit.top.calls.len(), 1);
//! assert!(matches!(unit.top.items[1], Item::Call(_)));
//! ```

use crate::ast::*;
use crate::diagnostics::{DialectError, ErrorKind};
use crate::hygiene::find_param_refs;
use crate::scanner::Scanner;
use flatco_core::lang::keywords::{self, KeywordId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/block.rs");
include!("parser/call.rs");
include!("parser/func.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
