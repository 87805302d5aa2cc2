//! Clause selection and policy diffing for education AI-use policies.
//!
//! ```
//! use policykit::{Audience, ClauseSelectionInput, ClauseSelector, Corpus, RiskLevel, ToolUseMode};
//!
//! let corpus = Corpus::builtin();
//! let input = ClauseSelectionInput::new(Audience::K12, RiskLevel::High, ToolUseMode::Restricted);
//! let clauses = ClauseSelector::new(&corpus).select(&input);
//! assert!(clauses.iter().all(|c| c.selected));
//! ```

#![forbid(unsafe_code)]

pub use policykit_corpus::{Corpus, CorpusError, CorpusIssue, IssueCode};
pub use policykit_diff::{
    LcsDiffer, PositionIndex, PositionalWordDiffer, RedlineOptions, apply_redline_changes,
    diff_policies, diff_with_summary, find_text_position, generate_redline_changes,
    render_redline_html,
};
pub use policykit_domain::{ClauseScore, ClauseSelector, Selection, select_clauses};
pub use policykit_types::{
    Audience, ClauseSelectionInput, DependencyMode, DiffKind, DiffOptions, DiffSummary,
    Granularity, PolicyClause, PolicyDiff, PolicyTemplate, RedlineChange, RedlineKind,
    RedlinePosition, RiskLevel, SelectedClause, ToolUseMode,
};
