//! Relevance scoring.
//!
//! The score is additive with a 0.5 base and is clamped to 1.0 afterwards; it is not
//! normalized. The unclamped sum is kept alongside so the engine can order clauses that
//! all saturate.

use policykit_types::{ClauseSelectionInput, PolicyClause, RiskLevel, ToolUseMode};

const BASE: f64 = 0.5;
const RISK_WEIGHT: f64 = 0.30;
const TOOL_WEIGHT: f64 = 0.25;
const TAG_WEIGHT: f64 = 0.15;
const AUDIENCE_BONUS: f64 = 0.2;
const JURISDICTION_BONUS: f64 = 0.1;

/// Per-factor breakdown of a clause's relevance for one input.
#[derive(Clone, Debug, PartialEq)]
pub struct ClauseScore {
    pub risk: f64,
    pub tool: f64,
    pub tags: f64,
    /// Clause tags that matched a custom tag, in clause order.
    pub matched_tags: Vec<String>,
    pub audience_bonus: f64,
    pub jurisdiction_bonus: f64,
    /// Unclamped sum.
    pub raw: f64,
}

impl ClauseScore {
    /// Score used for ranking and reported on the selected clause.
    pub fn value(&self) -> f64 {
        self.raw.min(1.0)
    }
}

pub fn score_clause(clause: &PolicyClause, input: &ClauseSelectionInput) -> ClauseScore {
    let risk = risk_factor(clause.risk_level, input.risk_profile);
    let tool = tool_factor(clause.tool_use_modes.as_deref(), input.tool_use_mode);
    let (tags, matched_tags) = tag_factor(&clause.tags, &input.custom_tags);

    let audience_bonus = if clause.lists_audience(&input.audience) {
        AUDIENCE_BONUS
    } else {
        0.0
    };
    let jurisdiction_bonus = match &input.state {
        Some(state) if clause.lists_jurisdiction(state) => JURISDICTION_BONUS,
        _ => 0.0,
    };

    let raw = BASE
        + RISK_WEIGHT * risk
        + TOOL_WEIGHT * tool
        + audience_bonus
        + TAG_WEIGHT * tags
        + jurisdiction_bonus;

    ClauseScore {
        risk,
        tool,
        tags,
        matched_tags,
        audience_bonus,
        jurisdiction_bonus,
        raw,
    }
}

/// Closeness of the clause's risk level to the requested profile.
///
/// Clauses at or below the profile lose 0.2 per step; clauses above it lose 0.3 per step
/// with a floor of 0.3.
pub fn risk_factor(clause: RiskLevel, profile: RiskLevel) -> f64 {
    let (Some(c), Some(p)) = (clause.rank(), profile.rank()) else {
        return 0.0;
    };
    if c <= p {
        1.0 - 0.2 * f64::from(p - c)
    } else {
        (1.0 - 0.3 * f64::from(c - p)).max(0.3)
    }
}

/// Distance from the requested mode to the closest mode the clause lists.
pub fn tool_factor(clause_modes: Option<&[ToolUseMode]>, mode: ToolUseMode) -> f64 {
    let Some(modes) = clause_modes else {
        return 1.0;
    };
    let Some(wanted) = mode.rank() else {
        return 0.2;
    };
    modes
        .iter()
        .filter_map(|m| m.rank())
        .map(|r| r.abs_diff(wanted))
        .min()
        .map_or(0.2, |d| (1.0 - 0.3 * f64::from(d)).max(0.2))
}

/// Fraction of clause tags that overlap the custom tags.
///
/// A clause tag matches when it contains a custom tag or is contained in one, ignoring
/// case. Blank custom tags are ignored.
pub fn tag_factor(clause_tags: &[String], custom_tags: &[String]) -> (f64, Vec<String>) {
    let wanted: Vec<String> = custom_tags
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();
    if clause_tags.is_empty() || wanted.is_empty() {
        return (0.0, Vec::new());
    }

    let matched: Vec<String> = clause_tags
        .iter()
        .filter(|tag| {
            let tag = tag.to_lowercase();
            wanted
                .iter()
                .any(|w| tag.contains(w.as_str()) || w.contains(tag.as_str()))
        })
        .cloned()
        .collect();

    let denom = clause_tags.len().max(wanted.len()) as f64;
    (matched.len() as f64 / denom, matched)
}
