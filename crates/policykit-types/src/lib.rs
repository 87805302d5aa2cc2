//! Stable DTOs and IDs used across the policykit workspace.
//!
//! This crate is intentionally boring:
//! - clause, template, and selection shapes
//! - diff and redline change records
//! - report envelopes with stable schema ids
//! - reason strings shared by the selector and the renderers

#![forbid(unsafe_code)]

pub mod clause;
pub mod diff;
pub mod ids;
pub mod receipt;
pub mod selection;

pub use clause::{Audience, ClauseMetadata, PolicyClause, PolicyTemplate, RiskLevel, ToolUseMode};
pub use diff::{
    DiffKind, DiffOptions, DiffSummary, Granularity, PolicyDiff, RedlineChange, RedlineKind,
    RedlinePosition,
};
pub use receipt::{
    DiffReport, RedlineReport, SelectionData, SelectionReport, ToolMeta, SCHEMA_DIFF_V1,
    SCHEMA_REDLINE_V1, SCHEMA_SELECTION_V1,
};
pub use selection::{ClauseSelectionInput, DependencyMode, SelectedClause};
