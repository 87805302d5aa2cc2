use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `policykit.toml` schema v1.
///
/// User-facing and permissive: enum-like values are plain strings so an unknown value
/// degrades to a warning instead of a parse error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicykitConfigV1 {
    /// Optional schema string for tooling (`policykit.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset profile the rest of the file is layered on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub diff: DiffConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SelectionConfig {
    /// `k12` or `highered`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    /// `low`, `medium`, `high`, or `critical`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_profile: Option<String>,

    /// `prohibited`, `restricted`, `permitted`, or `encouraged`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_use_mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default)]
    pub custom_tags: Vec<String>,

    /// Clause ids always appended to the selection.
    #[serde(default)]
    pub include: Vec<String>,

    /// Clause ids always removed from the selection.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// `shallow` (default) or `transitive`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_mode: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DiffConfig {
    /// `word`, `sentence` (default), or `paragraph`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_case: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pair_modifications: Option<bool>,
}
