//! Render use cases: a policy document from a template plus a fresh selection, and
//! Markdown views of stored reports.

use crate::report::ReportVariant;
use crate::select::{SelectInput, run_select};
use anyhow::Context;
use policykit_corpus::Corpus;
use policykit_render::{
    render_diff_markdown, render_policy_document, render_redline_markdown,
    render_selection_markdown,
};
use policykit_settings::Overrides;
use policykit_types::SelectionReport;

#[derive(Clone, Debug)]
pub struct RenderInput<'a> {
    pub corpus: &'a Corpus,
    pub template_id: &'a str,
    pub config_text: &'a str,
    pub overrides: Overrides,
}

#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub document: String,
    /// Selected clauses that belong to the template, in priority order.
    pub clause_ids: Vec<String>,
    pub selection: SelectionReport,
}

/// Select for the current context, then render the selected members of the template.
///
/// Selected clauses outside the template's clause list are left out of the document.
pub fn run_render(input: RenderInput<'_>) -> anyhow::Result<RenderOutput> {
    let Some(template) = input.corpus.template(input.template_id) else {
        let known: Vec<&str> = input.corpus.template_ids().collect();
        anyhow::bail!(
            "Template not found: {} (available: {})",
            input.template_id,
            known.join(", ")
        );
    };

    let output = run_select(SelectInput {
        corpus: input.corpus,
        config_text: input.config_text,
        overrides: input.overrides,
    })?;

    let audience = output.resolved_config.selection.audience;
    if let Some(audiences) = &template.audience
        && !audiences.iter().any(|a| a.matches(&audience))
    {
        tracing::warn!(
            template = %template.id,
            audience = %audience,
            "template is not written for the selected audience"
        );
    }

    let selection = output.report;
    let clause_ids: Vec<String> = selection
        .clause_ids()
        .into_iter()
        .filter(|id| template.clause_ids.iter().any(|member| member == id))
        .collect();

    let document = render_policy_document(input.corpus, &template.id, &clause_ids)
        .context("render policy document")?;

    tracing::info!(
        template = %template.id,
        selected = selection.clauses.len(),
        sections = clause_ids.len(),
        "policy document rendered"
    );

    Ok(RenderOutput {
        document,
        clause_ids,
        selection,
    })
}

pub fn render_report_markdown(report: &ReportVariant) -> String {
    match report {
        ReportVariant::Selection(r) => render_selection_markdown(r),
        ReportVariant::Diff(r) => render_diff_markdown(r),
        ReportVariant::Redline(r) => render_redline_markdown(r),
    }
}
