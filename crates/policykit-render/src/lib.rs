//! Rendering for people: policy documents built from templates, and Markdown summaries
//! of selection, diff, and redline reports.

#![forbid(unsafe_code)]

mod document;
mod markdown;

pub use document::{RenderError, render_policy_document};
pub use markdown::{render_diff_markdown, render_redline_markdown, render_selection_markdown};
