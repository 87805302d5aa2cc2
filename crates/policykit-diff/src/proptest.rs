//! Property-based tests for both differs.

use crate::lcs::diff_policies;
use crate::redline::{RedlineOptions, apply_redline_changes, generate_redline_changes};
use crate::token::tokenize;
use policykit_types::{DiffKind, DiffOptions, Granularity};
use proptest::prelude::*;
use time::macros::datetime;

/// Small vocabulary so generated documents share plenty of words.
fn arb_word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("students".to_string()),
        Just("may".to_string()),
        Just("use".to_string()),
        Just("AI".to_string()),
        Just("tools.".to_string()),
        Just("data".to_string()),
        Just("must".to_string()),
        Just("not!".to_string()),
        "[a-z]{1,6}",
    ]
}

fn arb_paragraph() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_word(), 0..10).prop_map(|words| words.join(" "))
}

fn arb_document() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_paragraph(), 0..4).prop_map(|ps| ps.join("\n\n"))
}

fn arb_granularity() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Word),
        Just(Granularity::Sentence),
        Just(Granularity::Paragraph),
    ]
}

fn token_texts(text: &str) -> Vec<String> {
    tokenize(text).iter().map(|t| t.text.to_string()).collect()
}

fn redline_opts() -> RedlineOptions {
    RedlineOptions {
        ignore_case: false,
        timestamp: Some(datetime!(2026-01-01 00:00 UTC)),
    }
}

proptest! {
    #[test]
    fn diffing_a_text_against_itself_is_empty(doc in arb_document(), g in arb_granularity()) {
        prop_assert!(diff_policies(&doc, &doc, &DiffOptions::with_granularity(g)).is_empty());
        prop_assert!(generate_redline_changes(&doc, &doc, "a", &redline_opts()).is_empty());
    }

    /// Swapping the inputs swaps additions and deletions one for one.
    #[test]
    fn swapped_inputs_mirror(a in arb_document(), b in arb_document(), g in arb_granularity()) {
        let opts = DiffOptions::with_granularity(g);
        let forward = diff_policies(&a, &b, &opts);
        let backward = diff_policies(&b, &a, &opts);
        prop_assert_eq!(forward.len(), backward.len());
        for (f, r) in forward.iter().zip(&backward) {
            let mirrored = match f.kind {
                DiffKind::Addition => DiffKind::Deletion,
                DiffKind::Deletion => DiffKind::Addition,
                DiffKind::Modification => DiffKind::Modification,
            };
            prop_assert_eq!(r.kind, mirrored);
            prop_assert_eq!(&f.old_text, &r.new_text);
            prop_assert_eq!(&f.new_text, &r.old_text);
            prop_assert_eq!(f.position, r.position);
        }
    }

    /// Applying a generated redline to its base reproduces the new text's tokens.
    #[test]
    fn redline_reconstructs_the_new_text(a in arb_document(), b in arb_document()) {
        let changes = generate_redline_changes(&a, &b, "a", &redline_opts());
        let rebuilt = apply_redline_changes(&a, &changes);
        prop_assert_eq!(token_texts(&rebuilt), token_texts(&b));
    }

    #[test]
    fn arbitrary_text_never_panics(a in "\\PC{0,80}", b in "\\PC{0,80}") {
        let _ = diff_policies(&a, &b, &DiffOptions::default());
        let changes = generate_redline_changes(&a, &b, "a", &redline_opts());
        let _ = apply_redline_changes(&a, &changes);
        let _ = crate::html::render_redline_html(&a, &changes, Some("t"));
    }
}
