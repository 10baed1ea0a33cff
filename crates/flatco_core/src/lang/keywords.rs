//! Define the reserved pseudo-keyword vocabulary of the dialect.
//!
//! This module is the single source of truth for the three pseudo-keywords: a stable identifier ([`KeywordId`])
//! plus a const metadata table ([`KEYWORDS`]) that records canonical spellings and where each keyword may appear.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **exact and case-sensitive** against the whole identifier. Any other identifier is
//!   ordinary host-language code.
//! - Scope rules recorded here are metadata; the parser is the one that reports violations.
//!
//! ## Examples
//! ```rust
//! use flatco_core::lang::keywords::{self, KeywordId, KeywordScope};
//!
//! assert_eq!(keywords::from_str("BL_func"), Some(KeywordId::Func));
//! assert_eq!(keywords::from_str("bl_func"), None);
//! assert_eq!(keywords::scope(KeywordId::Return), KeywordScope::FunctionBody);
//! ```

/// Stable identifier for every reserved pseudo-keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    /// Introduces a pseudo-function definition.
    Func,
    /// Inlines a pseudo-function at the call site.
    Call,
    /// Leaves the innermost expansion, optionally producing a value.
    Return,
}

/// Where a keyword is allowed to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordScope {
    /// Only outside any pseudo-function.
    FileScope,
    /// Only inside a pseudo-function body.
    FunctionBody,
    /// At file scope and inside bodies.
    Anywhere,
}

impl KeywordScope {
    /// Return `true` if a keyword with this scope may appear at file scope.
    pub fn allows_file_scope(self) -> bool {
        matches!(self, KeywordScope::FileScope | KeywordScope::Anywhere)
    }

    /// Return `true` if a keyword with this scope may appear inside a pseudo-function body.
    pub fn allows_function_body(self) -> bool {
        matches!(self, KeywordScope::FunctionBody | KeywordScope::Anywhere)
    }
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub scope: KeywordScope,
    /// One-line usage form, for diagnostics and `--help` style output.
    pub form: &'static str,
}

/// Registry of all pseudo-keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    KeywordInfo {
        id: KeywordId::Func,
        canonical: "BL_func",
        scope: KeywordScope::FileScope,
        form: "BL_func(<marker>) <type> <name>(<type> <name>, ...) { <body> }",
    },
    KeywordInfo {
        id: KeywordId::Call,
        canonical: "BL_call",
        scope: KeywordScope::Anywhere,
        form: "BL_call(<target> = <name>(<args>)) or BL_call(<name>(<args>))",
    },
    KeywordInfo {
        id: KeywordId::Return,
        canonical: "BL_return",
        scope: KeywordScope::FunctionBody,
        form: "BL_return(<expr>) or BL_return()",
    },
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Allowed scope.
pub fn scope(id: KeywordId) -> KeywordScope {
    info_for(id).scope
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Classify an identifier spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly one of the reserved spellings.
/// - `None` for ordinary identifiers.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        assert_eq!(from_str("BL_call"), Some(KeywordId::Call));
        assert_eq!(from_str("BL_cal"), None);
        assert_eq!(from_str("BL_calls"), None);
        assert_eq!(from_str("MyBL_call"), None);
        assert_eq!(from_str("BL_"), None);
    }

    #[test]
    fn test_scopes() {
        assert!(scope(KeywordId::Func).allows_file_scope());
        assert!(!scope(KeywordId::Func).allows_function_body());
        assert!(scope(KeywordId::Call).allows_file_scope());
        assert!(scope(KeywordId::Call).allows_function_body());
        assert!(!scope(KeywordId::Return).allows_file_scope());
    }
}
