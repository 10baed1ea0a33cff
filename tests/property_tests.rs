//! Property-based tests for the expander
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use flatco::{ExpandConfig, expand_source};
use proptest::prelude::*;

fn plain() -> ExpandConfig {
    ExpandConfig::new().with_line_markers(false)
}

// =============================================================================
// Strategies
// =============================================================================

/// One lexical piece of host-language text that contains no pseudo-keyword.
fn host_piece() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,8}",
        "[0-9][0-9a-fx.]{0,4}",
        "[;{}()\\[\\]+=<>,.&|!*-]",
        "[ \t\n]{1,3}",
        "\"[a-zA-Z ]{0,8}\"",
        "// [a-z ]{0,10}\n",
        "/\\* [a-z ]{0,10} \\*/",
    ]
}

fn host_text() -> impl Strategy<Value = String> {
    prop::collection::vec(host_piece(), 0..40).prop_map(|pieces| pieces.concat())
}

const HELPERS: &str = "BL_func(x) int Inc(int v) { BL_return(v + 1); }\n\
                       BL_func(x) int Twice(int v) { int t; BL_call(t = Inc(v)); BL_call(t = Inc(t)); BL_return(t); }\n\
                       int r;\n";

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: text without pseudo-keywords passes through unchanged
    #[test]
    fn keyword_free_text_is_preserved(text in host_text()) {
        let out = expand_source(&text, &plain()).expect("keyword-free text should expand");
        prop_assert_eq!(out, text);
    }

    /// Property: every expansion gets its own exit label, however often a function is inlined
    #[test]
    fn repeated_expansions_never_collide(calls in prop::collection::vec(any::<bool>(), 1..24)) {
        let mut source = HELPERS.to_string();
        let mut expansions = 0usize;
        for twice in &calls {
            if *twice {
                source.push_str("BL_call(r = Twice(r));\n");
                expansions += 3;
            } else {
                source.push_str("BL_call(r = Inc(r));\n");
                expansions += 1;
            }
        }

        let out = expand_source(&source, &plain()).expect("helpers should expand");
        for seq in 0..expansions {
            let label = format!("_BLexit{seq:x}:");
            prop_assert_eq!(out.matches(&label).count(), 1, "{} in {}", label, out);
            let temp = format!("int _BLparam{seq:x}_v = ");
            prop_assert_eq!(out.matches(&temp).count(), 1, "{} in {}", temp, out);
        }
        let next = format!("_BLexit{expansions:x}:");
        prop_assert!(!out.contains(&next));
    }

    /// Property: line markers only add lines, they never change the code around them
    #[test]
    fn line_markers_only_add_lines(calls in 0usize..6) {
        let mut source = HELPERS.to_string();
        for _ in 0..calls {
            source.push_str("BL_call(r = Twice(r));\n");
        }
        let with = expand_source(&source, &ExpandConfig::new()).expect("helpers should expand");
        let without = expand_source(&source, &plain()).expect("helpers should expand");
        let stripped: String = with
            .split_inclusive('\n')
            .filter(|line| !line.starts_with("#line "))
            .collect();
        prop_assert_eq!(stripped.replace('\n', ""), without.replace('\n', ""));
    }
}
