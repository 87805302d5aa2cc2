use policykit_corpus::Corpus;
use policykit_types::{
    Audience, ClauseMetadata, ClauseSelectionInput, PolicyClause, RiskLevel, ToolUseMode,
};

/// Unconstrained clause whose title equals its id.
pub fn clause(id: &str, risk: RiskLevel) -> PolicyClause {
    PolicyClause {
        id: id.to_string(),
        title: id.to_string(),
        body: format!("Body of {id}."),
        tags: Vec::new(),
        risk_level: risk,
        audience: None,
        jurisdictions: None,
        tool_use_modes: None,
        dependencies: Vec::new(),
        conflicts: Vec::new(),
        metadata: ClauseMetadata {
            version: "1.0".to_string(),
            references: Vec::new(),
        },
    }
}

pub fn corpus(clauses: Vec<PolicyClause>) -> Corpus {
    Corpus::new("test", clauses, Vec::new()).expect("test corpus has unique ids")
}

pub fn input(audience: Audience, risk: RiskLevel, mode: ToolUseMode) -> ClauseSelectionInput {
    ClauseSelectionInput::new(audience, risk, mode)
}
