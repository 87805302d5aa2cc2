//! Fuzz target for redline generation, application, and HTML rendering.
//!
//! Goal: none of them panic, and applying a redline reproduces the new text's words.
//!
//! ```bash
//! cargo +nightly fuzz run fuzz_redline
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use policykit_diff::{
    RedlineOptions, apply_redline_changes, generate_redline_changes, render_redline_html,
};

#[derive(Arbitrary, Debug)]
struct Input {
    base: String,
    new: String,
}

fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

fuzz_target!(|input: Input| {
    let options = RedlineOptions {
        ignore_case: false,
        timestamp: Some(time::OffsetDateTime::UNIX_EPOCH),
    };
    let changes = generate_redline_changes(&input.base, &input.new, "fuzz", &options);
    let rebuilt = apply_redline_changes(&input.base, &changes);
    assert_eq!(words(&rebuilt), words(&input.new));
    let _ = render_redline_html(&input.base, &changes, Some("fuzz"));
});
