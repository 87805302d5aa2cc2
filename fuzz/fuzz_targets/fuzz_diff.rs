//! Fuzz target for the segment-level differ.
//!
//! Goal: `diff_with_summary` **never panics**, and identical inputs never produce
//! changes.
//!
//! ```bash
//! cargo +nightly fuzz run fuzz_diff
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use policykit_diff::diff_with_summary;
use policykit_types::{DiffOptions, Granularity};

#[derive(Arbitrary, Debug)]
struct Input {
    base: String,
    new: String,
    granularity: u8,
    ignore_case: bool,
    pair_modifications: bool,
}

fuzz_target!(|input: Input| {
    let options = DiffOptions {
        granularity: match input.granularity % 4 {
            0 => Granularity::Word,
            1 => Granularity::Sentence,
            2 => Granularity::Paragraph,
            _ => Granularity::Unrecognized,
        },
        ignore_case: input.ignore_case,
        pair_modifications: input.pair_modifications,
    };

    let (_, summary) = diff_with_summary(&input.base, &input.new, &options);
    assert!((0.0..=1.0).contains(&summary.similarity));

    let (same, _) = diff_with_summary(&input.base, &input.base, &options);
    assert!(same.is_empty());
});
