//! Policy document differ (no IO).
//!
//! Two strategies that are deliberately kept apart:
//! - [`LcsDiffer`]: optimal segment-level diff (word, sentence, or paragraph) producing
//!   `PolicyDiff` records.
//! - [`PositionalWordDiffer`]: single-pass word comparison producing author-attributed
//!   `RedlineChange` records addressed by paragraph, sentence, and word.
//!
//! Redlines can be applied back onto the base text or rendered as standalone HTML.

#![forbid(unsafe_code)]

pub mod html;
pub mod lcs;
pub mod position;
pub mod redline;
pub mod segment;

mod fingerprint;
mod token;

pub use html::render_redline_html;
pub use lcs::{LcsDiffer, diff_policies, diff_with_summary, pair_modifications, summarize};
pub use position::{PositionIndex, find_text_position};
pub use redline::{
    PositionalWordDiffer, RedlineOptions, apply_redline_changes, generate_redline_changes,
};

#[cfg(test)]
mod proptest;
