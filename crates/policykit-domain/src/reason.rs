use crate::score::ClauseScore;
use policykit_types::ids::{REASON_HIGH_RELEVANCE, REASON_SEPARATOR, REASON_STANDARD_COMPONENT};
use policykit_types::{ClauseSelectionInput, PolicyClause};

/// Human-readable justification for a ranked clause.
pub(crate) fn rationale(
    clause: &PolicyClause,
    score: &ClauseScore,
    input: &ClauseSelectionInput,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if score.risk >= 0.8 {
        parts.push(format!("Aligned with {} risk profile", input.risk_profile));
    }
    if clause.lists_audience(&input.audience) {
        parts.push(format!("Specifically designed for {}", input.audience));
    }
    if clause.lists_tool_use_mode(&input.tool_use_mode) {
        parts.push(format!("Applicable to {} tool use", input.tool_use_mode));
    }
    if let Some(state) = &input.state
        && clause.lists_jurisdiction(state)
    {
        parts.push(format!("Required for {state} jurisdiction"));
    }
    if !score.matched_tags.is_empty() {
        parts.push(format!(
            "Matches focus areas: {}",
            score.matched_tags.join(", ")
        ));
    }
    if score.value() > 0.8 {
        parts.push(REASON_HIGH_RELEVANCE.to_string());
    }

    if parts.is_empty() {
        REASON_STANDARD_COMPONENT.to_string()
    } else {
        parts.join(REASON_SEPARATOR)
    }
}

pub(crate) fn dependency_reason(required_by: &str) -> String {
    format!("Required dependency for {required_by}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::score_clause;
    use crate::test_support::{clause, input};
    use policykit_types::{Audience, RiskLevel, ToolUseMode};

    #[test]
    fn fully_aligned_clause_lists_every_rationale() {
        let mut c = clause("c", RiskLevel::High);
        c.audience = Some(vec![Audience::K12]);
        c.tool_use_modes = Some(vec![ToolUseMode::Restricted]);
        c.jurisdictions = Some(vec!["CA".to_string()]);
        c.tags = vec!["privacy".to_string(), "data".to_string()];

        let mut i = input(Audience::K12, RiskLevel::High, ToolUseMode::Restricted);
        i.state = Some("CA".to_string());
        i.custom_tags = vec!["privacy".to_string()];

        let reason = rationale(&c, &score_clause(&c, &i), &i);
        assert_eq!(
            reason,
            "Aligned with high risk profile; Specifically designed for k12; \
             Applicable to restricted tool use; Required for CA jurisdiction; \
             Matches focus areas: privacy; High relevance score"
        );
    }

    #[test]
    fn weak_match_falls_back_to_standard_component() {
        let mut c = clause("c", RiskLevel::Critical);
        c.tool_use_modes = Some(vec![ToolUseMode::Prohibited]);
        let i = input(Audience::HigherEd, RiskLevel::Low, ToolUseMode::Encouraged);

        // risk 0.3, tool 0.2: 0.5 + 0.09 + 0.05 = 0.64
        let reason = rationale(&c, &score_clause(&c, &i), &i);
        assert_eq!(reason, REASON_STANDARD_COMPONENT);
    }

    #[test]
    fn dependency_reason_names_the_dependent() {
        assert_eq!(
            dependency_reason("Children's Online Privacy (COPPA)"),
            "Required dependency for Children's Online Privacy (COPPA)"
        );
    }
}
