use crate::{ClauseSelectionInput, DiffOptions, DiffSummary, PolicyDiff, RedlineChange, SelectedClause};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifiers for policykit reports.
pub const SCHEMA_SELECTION_V1: &str = "policykit.selection.v1";
pub const SCHEMA_DIFF_V1: &str = "policykit.diff.v1";
pub const SCHEMA_REDLINE_V1: &str = "policykit.redline.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Selection-specific summary payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectionData {
    /// Clauses that survived filtering.
    pub candidates_considered: u32,
    pub clauses_selected: u32,
    /// Skipped during resolution because they conflicted with a higher-ranked clause.
    #[serde(default)]
    pub conflicts_skipped: Vec<String>,
    pub dependencies_added: u32,
    pub manually_included: u32,
    pub excluded: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectionReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub corpus_version: String,
    pub input: ClauseSelectionInput,
    pub clauses: Vec<SelectedClause>,
    pub data: SelectionData,
}

impl SelectionReport {
    /// Clause ids in priority order, the shape a document renderer consumes.
    pub fn clause_ids(&self) -> Vec<String> {
        self.clauses.iter().map(|c| c.clause.id.clone()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiffReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub options: DiffOptions,
    pub diffs: Vec<PolicyDiff>,
    pub summary: DiffSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedlineReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub author: String,
    pub changes: Vec<RedlineChange>,
}
