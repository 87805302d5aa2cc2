//! Applicability filter.

use policykit_types::{ClauseSelectionInput, PolicyClause};

/// A clause survives when every constraint it declares admits the input.
///
/// Absent constraints admit everything. A jurisdiction constraint is also ignored when
/// the input names no jurisdiction.
pub fn is_applicable(clause: &PolicyClause, input: &ClauseSelectionInput) -> bool {
    audience_admits(clause, input) && jurisdiction_admits(clause, input) && mode_admits(clause, input)
}

fn audience_admits(clause: &PolicyClause, input: &ClauseSelectionInput) -> bool {
    clause.audience.is_none() || clause.lists_audience(&input.audience)
}

fn jurisdiction_admits(clause: &PolicyClause, input: &ClauseSelectionInput) -> bool {
    match (&clause.jurisdictions, &input.jurisdiction) {
        (None, _) | (_, None) => true,
        (Some(_), Some(code)) => clause.lists_jurisdiction(code),
    }
}

fn mode_admits(clause: &PolicyClause, input: &ClauseSelectionInput) -> bool {
    clause.tool_use_modes.is_none() || clause.lists_tool_use_mode(&input.tool_use_mode)
}
