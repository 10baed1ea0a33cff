//! flatco dialect vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. [`keywords::KeywordId`], [`qualifiers::QualifierId`]) and look up
//! spellings/metadata via registry tables, instead of scattering string comparisons across the frontend.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The scanner/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   hygiene, code generation).
//!
//! ## Examples
//! ```rust
//! use flatco_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("BL_call"), Some(KeywordId::Call));
//! assert_eq!(keywords::as_str(KeywordId::Call), "BL_call");
//! ```

pub mod conventions;
pub mod keywords;
pub mod qualifiers;
