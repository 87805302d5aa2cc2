use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Institutional category a clause or selection applies to.
///
/// Unknown strings deserialize to `Unrecognized`, which never matches any clause
/// constraint. Selection degrades instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    K12,
    #[serde(rename = "highered")]
    HigherEd,
    #[serde(other)]
    Unrecognized,
}

impl Audience {
    /// Lossy parse: anything that is not a known audience becomes `Unrecognized`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "k12" | "k-12" => Audience::K12,
            "highered" | "higher-ed" | "higher_ed" => Audience::HigherEd,
            _ => Audience::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::K12 => "k12",
            Audience::HigherEd => "highered",
            Audience::Unrecognized => "unrecognized",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Audience::Unrecognized)
    }

    /// Equality that never holds for `Unrecognized`, on either side.
    pub fn matches(&self, other: &Audience) -> bool {
        self.is_recognized() && self == other
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered severity band: low < medium < high < critical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unrecognized,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "medium" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            "critical" => RiskLevel::Critical,
            _ => RiskLevel::Unrecognized,
        }
    }

    /// Position in the ordered band, `None` for unrecognized values.
    pub fn rank(&self) -> Option<u8> {
        match self {
            RiskLevel::Low => Some(0),
            RiskLevel::Medium => Some(1),
            RiskLevel::High => Some(2),
            RiskLevel::Critical => Some(3),
            RiskLevel::Unrecognized => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
            RiskLevel::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Institutional stance on AI tool usage, ordered from most to least restrictive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToolUseMode {
    Prohibited,
    Restricted,
    Permitted,
    Encouraged,
    #[serde(other)]
    Unrecognized,
}

impl ToolUseMode {
    pub const ALL: [ToolUseMode; 4] = [
        ToolUseMode::Prohibited,
        ToolUseMode::Restricted,
        ToolUseMode::Permitted,
        ToolUseMode::Encouraged,
    ];

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prohibited" => ToolUseMode::Prohibited,
            "restricted" => ToolUseMode::Restricted,
            "permitted" => ToolUseMode::Permitted,
            "encouraged" => ToolUseMode::Encouraged,
            _ => ToolUseMode::Unrecognized,
        }
    }

    pub fn rank(&self) -> Option<u8> {
        match self {
            ToolUseMode::Prohibited => Some(0),
            ToolUseMode::Restricted => Some(1),
            ToolUseMode::Permitted => Some(2),
            ToolUseMode::Encouraged => Some(3),
            ToolUseMode::Unrecognized => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolUseMode::Prohibited => "prohibited",
            ToolUseMode::Restricted => "restricted",
            ToolUseMode::Permitted => "permitted",
            ToolUseMode::Encouraged => "encouraged",
            ToolUseMode::Unrecognized => "unrecognized",
        }
    }

    pub fn matches(&self, other: &ToolUseMode) -> bool {
        self.rank().is_some() && self == other
    }
}

impl fmt::Display for ToolUseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClauseMetadata {
    /// Bumped whenever the clause body changes meaning.
    pub version: String,
    /// Statutes or guidance documents the clause is derived from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

/// An atomic, independently selectable unit of policy text.
///
/// Constraint fields (`audience`, `jurisdictions`, `tool_use_modes`) use `None` for
/// "applies to everything". An empty list is a constraint nothing satisfies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyClause {
    pub id: String,
    pub title: String,
    pub body: String,

    #[serde(default)]
    pub tags: Vec<String>,
    pub risk_level: RiskLevel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<Vec<Audience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdictions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_use_modes: Option<Vec<ToolUseMode>>,

    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub conflicts: Vec<String>,

    #[serde(default)]
    pub metadata: ClauseMetadata,
}

impl PolicyClause {
    /// True when the clause explicitly lists `audience` (not merely "applies to all").
    pub fn lists_audience(&self, audience: &Audience) -> bool {
        self.audience
            .as_ref()
            .is_some_and(|list| list.iter().any(|a| a.matches(audience)))
    }

    pub fn lists_jurisdiction(&self, code: &str) -> bool {
        self.jurisdictions
            .as_ref()
            .is_some_and(|list| list.iter().any(|j| j == code))
    }

    pub fn lists_tool_use_mode(&self, mode: &ToolUseMode) -> bool {
        self.tool_use_modes
            .as_ref()
            .is_some_and(|list| list.iter().any(|m| m.matches(mode)))
    }

    pub fn conflicts_with(&self, other_id: &str) -> bool {
        self.conflicts.iter().any(|c| c == other_id)
    }
}

/// Named, ordered clause list used to shape a rendered document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<Vec<Audience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdictions: Option<Vec<String>>,
    pub clause_ids: Vec<String>,
}
