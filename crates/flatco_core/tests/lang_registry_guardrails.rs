use std::collections::HashMap;

use flatco_core::lang::conventions;
use flatco_core::lang::keywords;
use flatco_core::lang::qualifiers;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );
        assert!(
            info.form.starts_with(info.canonical),
            "usage form of {:?} should start with its spelling",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keywords_are_valid_identifiers() {
    for info in keywords::KEYWORDS {
        let mut chars = info.canonical.chars();
        let first = chars.next().expect("empty keyword spelling");
        assert!(first.is_ascii_alphabetic() || first == '_', "{}", info.canonical);
        assert!(
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "{}",
            info.canonical
        );
    }
}

#[test]
fn qualifiers_fit_the_lookback_window() {
    for info in qualifiers::QUALIFIERS {
        assert!(info.canonical.len() <= qualifiers::MAX_LOOKBACK, "{}", info.canonical);
        assert_eq!(qualifiers::as_str(info.id), info.canonical);
    }
}

#[test]
fn generated_names_cannot_be_keywords() {
    for seq in [0usize, 1, 15, 4096] {
        assert_eq!(keywords::from_str(&conventions::exit_label(seq)), None);
        assert_eq!(keywords::from_str(&conventions::param_temp(seq, "x")), None);
    }
}
