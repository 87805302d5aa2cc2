use crate::clause::{Audience, PolicyClause, RiskLevel, ToolUseMode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How far dependency edges are followed when a clause is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DependencyMode {
    /// Only the selected clause's direct dependencies are pulled in.
    #[default]
    Shallow,
    /// Dependencies of dependencies are pulled in as well.
    Transitive,
}

/// Selection context. Constructed per call; carries no identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClauseSelectionInput {
    pub audience: Audience,
    pub risk_profile: RiskLevel,
    pub tool_use_mode: ToolUseMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default)]
    pub custom_tags: Vec<String>,
    #[serde(default)]
    pub include_clauses: Vec<String>,
    #[serde(default)]
    pub exclude_clauses: Vec<String>,

    #[serde(default)]
    pub dependency_mode: DependencyMode,
}

impl ClauseSelectionInput {
    pub fn new(audience: Audience, risk_profile: RiskLevel, tool_use_mode: ToolUseMode) -> Self {
        Self {
            audience,
            risk_profile,
            tool_use_mode,
            jurisdiction: None,
            state: None,
            custom_tags: Vec::new(),
            include_clauses: Vec::new(),
            exclude_clauses: Vec::new(),
            dependency_mode: DependencyMode::Shallow,
        }
    }
}

/// A corpus clause chosen by the selector, with its rank and justification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelectedClause {
    #[serde(flatten)]
    pub clause: PolicyClause,
    pub selected: bool,
    pub reason: String,
    /// 1-based position in the final ordering; lower is more important.
    pub priority: u32,
    pub score: f64,
}

impl SelectedClause {
    pub fn id(&self) -> &str {
        &self.clause.id
    }
}
