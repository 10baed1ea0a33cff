//! Provide the canonical vocabulary of the flatco pseudo-function dialect.
//!
//! This crate is intentionally small and dependency-free. It is shared by the syntax frontend (which recognizes
//! the dialect inside host-language text) and by the expander (which synthesizes hygienic names for inlined code).
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no AST types.
//! - Current scope: reserved pseudo-keywords, member-access qualifiers recognized by the hygiene scanner, and the
//!   naming conventions of generated temporaries, labels, and line markers.

pub mod lang;
