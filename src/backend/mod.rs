//! flatco backend
//!
//! This module turns a validated translation unit back into plain host-language text.
//!
//! The pipeline is:
//! 1. Validated unit from the frontend → expander walks the file-scope items
//! 2. Every call is replaced by the inlined body of its callee (recursively, hygienically renamed)
//! 3. Opaque code is copied through, re-anchored with line markers
//!
//! ## Module Organization
//!
//! - `config.rs` - Expansion options (file identifier, header name, line markers)
//! - `expand.rs` - The recursive inliner and its sequence counter
//! - `include.rs` - Detection of the dialect header `#include`
//! - `writer.rs` - Output buffer with line-marker tracking

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod expand;
pub mod include;
pub mod writer;

pub use config::ExpandConfig;
pub use expand::generate;
