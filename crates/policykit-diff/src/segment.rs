//! Text segmentation for the LCS differ.

use policykit_types::Granularity;
use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence pattern compiles"));

pub(crate) static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern compiles"));

/// Split `text` into trimmed, non-empty segments.
///
/// Sentence terminators are consumed by the split, so reassembled sentences use
/// [`joiner`] rather than the original punctuation.
pub fn segment(text: &str, granularity: Granularity) -> Vec<String> {
    let pieces: Vec<&str> = match granularity.effective() {
        Granularity::Word => text.split_whitespace().collect(),
        Granularity::Paragraph => PARAGRAPH_BREAK.split(text).collect(),
        _ => SENTENCE_END.split(text).collect(),
    };
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Separator used when a run of segments is reported as one string.
pub fn joiner(granularity: Granularity) -> &'static str {
    match granularity.effective() {
        Granularity::Word => " ",
        Granularity::Paragraph => "\n\n",
        _ => ". ",
    }
}
