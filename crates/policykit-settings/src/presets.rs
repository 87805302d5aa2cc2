use policykit_types::{Audience, ClauseSelectionInput, RiskLevel, ToolUseMode};

pub const DEFAULT_PROFILE: &str = "k12-standard";

/// Known preset names, default first.
pub const PROFILES: &[&str] = &[
    "k12-standard",
    "k12-strict",
    "highered-standard",
    "highered-open",
];

/// Preset profiles are opinionated starting points for the selection context.
///
/// Unknown names get the default profile. Returns the name actually used.
pub fn preset(profile: &str) -> (&'static str, ClauseSelectionInput) {
    match profile {
        "k12-strict" => (
            "k12-strict",
            ClauseSelectionInput::new(Audience::K12, RiskLevel::Critical, ToolUseMode::Prohibited),
        ),
        "highered-standard" => (
            "highered-standard",
            ClauseSelectionInput::new(
                Audience::HigherEd,
                RiskLevel::Medium,
                ToolUseMode::Permitted,
            ),
        ),
        "highered-open" => (
            "highered-open",
            ClauseSelectionInput::new(Audience::HigherEd, RiskLevel::Low, ToolUseMode::Encouraged),
        ),
        // default
        _ => (
            DEFAULT_PROFILE,
            ClauseSelectionInput::new(Audience::K12, RiskLevel::High, ToolUseMode::Restricted),
        ),
    }
}
