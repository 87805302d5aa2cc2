//! The `diff` use case: segment-level comparison of two policy documents.

use crate::config::{resolve_settings, tool_meta};
use policykit_diff::LcsDiffer;
use policykit_settings::{Overrides, ResolvedConfig};
use policykit_types::{DiffReport, SCHEMA_DIFF_V1};
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct DiffInput<'a> {
    pub base: &'a str,
    pub new: &'a str,
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct DiffOutput {
    pub report: DiffReport,
    pub resolved_config: ResolvedConfig,
}

pub fn run_diff(input: DiffInput<'_>) -> anyhow::Result<DiffOutput> {
    let resolved = resolve_settings(input.config_text, input.overrides)?;
    let differ = LcsDiffer::new(resolved.diff.clone());
    let (diffs, summary) = differ.diff_with_summary(input.base, input.new);

    tracing::info!(
        granularity = resolved.diff.granularity.effective().as_str(),
        changes = diffs.len(),
        similarity = summary.similarity,
        "diff complete"
    );

    Ok(DiffOutput {
        report: DiffReport {
            schema: SCHEMA_DIFF_V1.to_string(),
            tool: tool_meta(),
            generated_at: OffsetDateTime::now_utc(),
            options: resolved.diff.clone(),
            diffs,
            summary,
        },
        resolved_config: resolved,
    })
}
