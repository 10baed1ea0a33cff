//! Member-access and scope qualifiers.
//!
//! An identifier that directly follows one of these spellings names a field, method, or scoped entity, not a
//! plain value. The hygiene scanner uses this to leave `obj.x` alone while renaming a bare `x`.
//!
//! ## Notes
//! - The check is a fixed lookback of at most three characters after skipping whitespace. It does not understand
//!   multi-token qualifiers, macros, or comments between the qualifier and the identifier.
//!
//! ## Examples
//! ```rust
//! use flatco_core::lang::qualifiers;
//!
//! assert!(qualifiers::ends_with_qualifier(b"obj."));
//! assert!(qualifiers::ends_with_qualifier(b"p -> "));
//! assert!(!qualifiers::ends_with_qualifier(b"a + "));
//! ```

/// Stable identifier for qualifier spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualifierId {
    Dot,
    ColonColon,
    Arrow,
    DotStar,
    ArrowStar,
}

/// Metadata for a qualifier.
#[derive(Debug, Clone, Copy)]
pub struct QualifierInfo {
    pub id: QualifierId,
    pub canonical: &'static str,
}

/// Registry of all qualifiers, longest spelling last.
pub const QUALIFIERS: &[QualifierInfo] = &[
    QualifierInfo { id: QualifierId::Dot, canonical: "." },
    QualifierInfo { id: QualifierId::ColonColon, canonical: "::" },
    QualifierInfo { id: QualifierId::Arrow, canonical: "->" },
    QualifierInfo { id: QualifierId::DotStar, canonical: ".*" },
    QualifierInfo { id: QualifierId::ArrowStar, canonical: "->*" },
];

/// Longest qualifier spelling, i.e. the lookback window.
pub const MAX_LOOKBACK: usize = 3;

/// cv-qualifiers, which may precede or follow the base name inside a type expression.
pub const TYPE_QUALIFIERS: &[&str] = &["const", "volatile"];

/// Return `true` if `word` is a cv-qualifier rather than a type or parameter name.
pub fn is_type_qualifier(word: &str) -> bool {
    TYPE_QUALIFIERS.contains(&word)
}

/// Canonical spelling.
pub fn as_str(id: QualifierId) -> &'static str {
    QUALIFIERS
        .iter()
        .find(|q| q.id == id)
        .map(|q| q.canonical)
        .expect("qualifier info missing")
}

/// Find the qualifier that `preceding` ends with, ignoring trailing whitespace.
///
/// ## Parameters
/// - `preceding`: the text before an identifier, up to the start of the scanned span.
///
/// ## Returns
/// - The longest matching qualifier, or `None` if the identifier is a plain value use.
pub fn trailing_qualifier(preceding: &[u8]) -> Option<QualifierId> {
    let end = preceding
        .iter()
        .rposition(|c| !matches!(c, b' ' | b'\t' | b'\n' | b'\r'))
        .map(|i| i + 1)?;
    let window = &preceding[end.saturating_sub(MAX_LOOKBACK)..end];
    QUALIFIERS
        .iter()
        .rev()
        .find(|q| window.ends_with(q.canonical.as_bytes()))
        .map(|q| q.id)
}

/// Return `true` if `preceding` ends with a qualifier (after skipping whitespace).
pub fn ends_with_qualifier(preceding: &[u8]) -> bool {
    trailing_qualifier(preceding).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_spelling_is_detected() {
        for q in QUALIFIERS {
            let text = format!("value{}", q.canonical);
            assert_eq!(trailing_qualifier(text.as_bytes()), Some(q.id), "{}", q.canonical);
        }
    }

    #[test]
    fn test_whitespace_before_identifier_is_skipped() {
        assert_eq!(trailing_qualifier(b"obj .  \n\t"), Some(QualifierId::Dot));
        assert_eq!(trailing_qualifier(b"std ::  "), Some(QualifierId::ColonColon));
    }

    #[test]
    fn test_plain_uses() {
        assert_eq!(trailing_qualifier(b""), None);
        assert_eq!(trailing_qualifier(b"   "), None);
        assert_eq!(trailing_qualifier(b"a * "), None);
        assert_eq!(trailing_qualifier(b"x > "), None);
        assert_eq!(trailing_qualifier(b"f("), None);
    }

    #[test]
    fn test_type_qualifiers() {
        assert!(is_type_qualifier("const"));
        assert!(is_type_qualifier("volatile"));
        assert!(!is_type_qualifier("constant"));
        assert!(!is_type_qualifier("int"));
    }

    #[test]
    fn test_whitespace_inside_qualifier_is_not_a_qualifier() {
        // Only the gap between qualifier and identifier is skipped.
        assert_eq!(trailing_qualifier(b"p - > "), None);
    }
}
