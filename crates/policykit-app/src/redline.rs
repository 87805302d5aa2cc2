//! The `redline` use case: author-attributed tracked changes plus an HTML view.

use crate::config::{resolve_settings, tool_meta};
use anyhow::bail;
use policykit_diff::{PositionalWordDiffer, RedlineOptions, render_redline_html};
use policykit_settings::Overrides;
use policykit_types::{RedlineReport, SCHEMA_REDLINE_V1};
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct RedlineInput<'a> {
    pub base: &'a str,
    pub new: &'a str,
    pub author: &'a str,
    /// Heading for the HTML page.
    pub title: Option<&'a str>,
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct RedlineOutput {
    pub report: RedlineReport,
    /// Standalone page showing the changes over the base document.
    pub html: String,
}

pub fn run_redline(input: RedlineInput<'_>) -> anyhow::Result<RedlineOutput> {
    let author = input.author.trim();
    if author.is_empty() {
        bail!("redline author must not be empty");
    }

    let resolved = resolve_settings(input.config_text, input.overrides)?;
    let generated_at = OffsetDateTime::now_utc();
    let differ = PositionalWordDiffer::new(RedlineOptions {
        ignore_case: resolved.diff.ignore_case,
        timestamp: Some(generated_at),
    });
    let changes = differ.generate(input.base, input.new, author);
    let html = render_redline_html(input.base, &changes, input.title);

    tracing::info!(author, changes = changes.len(), "redline complete");

    Ok(RedlineOutput {
        report: RedlineReport {
            schema: SCHEMA_REDLINE_V1.to_string(),
            tool: tool_meta(),
            generated_at,
            author: author.to_string(),
            changes,
        },
        html,
    })
}
