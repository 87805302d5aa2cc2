//! Use case orchestration for policykit.
//!
//! The application layer coordinates corpus, settings, selector, differ, and renderers.
//! It holds no business rules of its own; the CLI depends on this and only handles
//! argument parsing, file I/O, and exit codes.

#![forbid(unsafe_code)]

mod config;
mod diff;
mod explain;
mod lint;
mod redline;
mod render;
mod report;
mod select;

pub use config::{load_corpus, resolve_settings};
pub use diff::{DiffInput, DiffOutput, run_diff};
pub use explain::{ExplainOutput, format_clause, format_not_found, format_template, run_explain};
pub use lint::{LintOutput, format_lint, lint_exit_code, run_lint};
pub use redline::{RedlineInput, RedlineOutput, run_redline};
pub use render::{RenderInput, RenderOutput, render_report_markdown, run_render};
pub use report::{ReportVariant, parse_report_json, serialize_report};
pub use select::{SelectInput, SelectOutput, run_select};
