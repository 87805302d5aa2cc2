//! The `select` use case: resolve the selection context and rank clauses.

use crate::config::{resolve_settings, tool_meta};
use policykit_corpus::Corpus;
use policykit_domain::ClauseSelector;
use policykit_settings::{Overrides, ResolvedConfig};
use policykit_types::{SCHEMA_SELECTION_V1, SelectionReport};
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct SelectInput<'a> {
    pub corpus: &'a Corpus,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct SelectOutput {
    pub report: SelectionReport,
    pub resolved_config: ResolvedConfig,
}

pub fn run_select(input: SelectInput<'_>) -> anyhow::Result<SelectOutput> {
    let resolved = resolve_settings(input.config_text, input.overrides)?;
    let selection = ClauseSelector::new(input.corpus).select_with_stats(&resolved.selection);

    tracing::info!(
        profile = %resolved.profile,
        candidates = selection.data.candidates_considered,
        selected = selection.data.clauses_selected,
        conflicts = selection.data.conflicts_skipped.len(),
        "selection complete"
    );

    let report = SelectionReport {
        schema: SCHEMA_SELECTION_V1.to_string(),
        tool: tool_meta(),
        generated_at: OffsetDateTime::now_utc(),
        corpus_version: input.corpus.version().to_string(),
        input: resolved.selection.clone(),
        clauses: selection.clauses,
        data: selection.data,
    };

    Ok(SelectOutput {
        report,
        resolved_config: resolved,
    })
}
