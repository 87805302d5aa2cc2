use policykit_types::{
    DiffKind, DiffReport, PolicyDiff, RedlineKind, RedlineReport, SelectionReport,
};

pub fn render_selection_markdown(report: &SelectionReport) -> String {
    let mut out = String::new();
    let input = &report.input;
    let data = &report.data;

    out.push_str("# Clause selection\n\n");
    out.push_str(&format!(
        "- Context: audience `{}`, risk `{}`, tool use `{}`\n",
        input.audience, input.risk_profile, input.tool_use_mode
    ));
    if let Some(j) = &input.jurisdiction {
        match &input.state {
            Some(s) => out.push_str(&format!("- Jurisdiction: `{j}` / `{s}`\n")),
            None => out.push_str(&format!("- Jurisdiction: `{j}`\n")),
        }
    }
    out.push_str(&format!(
        "- Selected: {} of {} candidates ({} dependencies, {} manual, {} excluded)\n",
        data.clauses_selected,
        data.candidates_considered,
        data.dependencies_added,
        data.manually_included,
        data.excluded
    ));
    out.push_str(&format!("- Corpus: `{}`\n\n", report.corpus_version));

    if !data.conflicts_skipped.is_empty() {
        let ids: Vec<String> = data
            .conflicts_skipped
            .iter()
            .map(|id| format!("`{id}`"))
            .collect();
        out.push_str(&format!("> Skipped for conflicts: {}\n\n", ids.join(", ")));
    }

    if report.clauses.is_empty() {
        out.push_str("No clauses selected.\n");
        return out;
    }

    out.push_str("| # | Clause | Risk | Score | Reason |\n");
    out.push_str("|---|---|---|---|---|\n");
    for c in &report.clauses {
        out.push_str(&format!(
            "| {} | `{}` {} | {} | {:.2} | {} |\n",
            c.priority,
            c.clause.id,
            cell(&c.clause.title),
            c.clause.risk_level,
            c.score,
            cell(&c.reason)
        ));
    }
    out
}

pub fn render_diff_markdown(report: &DiffReport) -> String {
    let mut out = String::new();
    let s = &report.summary;

    out.push_str("# Policy diff\n\n");
    out.push_str(&format!(
        "- Granularity: {}\n",
        report.options.granularity.effective().as_str()
    ));
    out.push_str(&format!(
        "- Changes: {} added, {} removed, {} modified\n",
        s.additions, s.deletions, s.modifications
    ));
    out.push_str(&format!(
        "- Similarity: {:.1}% ({} unchanged; {} segments before, {} after)\n\n",
        s.similarity * 100.0,
        s.unchanged,
        s.segments_base,
        s.segments_new
    ));

    if report.diffs.is_empty() {
        out.push_str("No differences.\n");
        return out;
    }

    out.push_str("## Changes\n\n");
    for d in &report.diffs {
        out.push_str(&diff_line(d));
    }
    out
}

fn diff_line(d: &PolicyDiff) -> String {
    let old = d.old_text.as_deref().unwrap_or("");
    let new = d.new_text.as_deref().unwrap_or("");
    match d.kind {
        DiffKind::Addition => format!("- [+] @{}: {}\n", d.position, quote(new)),
        DiffKind::Deletion => format!("- [-] @{}: {}\n", d.position, quote(old)),
        DiffKind::Modification => {
            format!("- [~] @{}: {} -> {}\n", d.position, quote(old), quote(new))
        }
    }
}

pub fn render_redline_markdown(report: &RedlineReport) -> String {
    let mut out = String::new();

    out.push_str("# Redline\n\n");
    out.push_str(&format!("- Author: {}\n", report.author));
    let inserts = report
        .changes
        .iter()
        .filter(|c| c.kind == RedlineKind::Insert)
        .count();
    let deletes = report
        .changes
        .iter()
        .filter(|c| c.kind == RedlineKind::Delete)
        .count();
    out.push_str(&format!(
        "- Changes: {} ({} insertions, {} deletions)\n\n",
        report.changes.len(),
        inserts,
        deletes
    ));

    if report.changes.is_empty() {
        out.push_str("No changes.\n");
        return out;
    }

    for c in &report.changes {
        let (mark, verb) = match c.kind {
            RedlineKind::Insert => ("+", "insert"),
            RedlineKind::Delete => ("-", "delete"),
            RedlineKind::Format => ("*", "format"),
        };
        let p = &c.position;
        out.push_str(&format!(
            "- [{mark}] {verb} at {}.{}.{}: {}\n",
            p.paragraph,
            p.sentence,
            p.word,
            quote(&c.text)
        ));
        if let Some(comment) = &c.comment {
            out.push_str(&format!("  - {comment}\n"));
        }
    }
    out
}

/// Table cells cannot contain raw pipes or newlines.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Inline code span; paragraph breaks are shown as a pilcrow so each change stays on
/// one line.
fn quote(text: &str) -> String {
    let flat = text.replace("\n\n", " ¶ ").replace('\n', " ");
    if flat.contains('`') {
        format!("`` {flat} ``")
    } else {
        format!("`{flat}`")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use policykit_types::{
        Audience, ClauseSelectionInput, DiffOptions, DiffSummary, Granularity, PolicyClause,
        RedlineChange, RedlinePosition, RiskLevel, SelectedClause, SelectionData, ToolMeta,
        ToolUseMode,
    };
    use time::macros::datetime;

    fn tool() -> ToolMeta {
        ToolMeta {
            name: "policykit".to_string(),
            version: "0.1.0".to_string(),
        }
    }

    fn selected(id: &str, title: &str, priority: u32, score: f64, reason: &str) -> SelectedClause {
        SelectedClause {
            clause: PolicyClause {
                id: id.to_string(),
                title: title.to_string(),
                body: String::new(),
                tags: Vec::new(),
                risk_level: RiskLevel::Critical,
                audience: None,
                jurisdictions: None,
                tool_use_modes: None,
                dependencies: Vec::new(),
                conflicts: Vec::new(),
                metadata: Default::default(),
            },
            selected: true,
            reason: reason.to_string(),
            priority,
            score,
        }
    }

    fn selection_report(clauses: Vec<SelectedClause>, conflicts: Vec<String>) -> SelectionReport {
        let mut input =
            ClauseSelectionInput::new(Audience::K12, RiskLevel::Critical, ToolUseMode::Prohibited);
        input.jurisdiction = Some("US".to_string());
        SelectionReport {
            schema: "policykit.selection.v1".to_string(),
            tool: tool(),
            generated_at: datetime!(2026-01-01 00:00 UTC),
            corpus_version: "2026.10".to_string(),
            input,
            data: SelectionData {
                candidates_considered: 9,
                clauses_selected: clauses.len() as u32,
                conflicts_skipped: conflicts,
                dependencies_added: 1,
                manually_included: 0,
                excluded: 0,
            },
            clauses,
        }
    }

    #[test]
    fn selection_report_renders_a_ranked_table() {
        let report = selection_report(
            vec![
                selected("coppa", "Children's Privacy", 1, 1.0, "Aligned with critical risk profile"),
                selected("consent", "Consent | Notice", 2, 0.9, "Required by Children's Privacy"),
            ],
            vec!["ai-use-permitted".to_string()],
        );
        insta::assert_snapshot!(render_selection_markdown(&report), @r"
        # Clause selection

        - Context: audience `k12`, risk `critical`, tool use `prohibited`
        - Jurisdiction: `US`
        - Selected: 2 of 9 candidates (1 dependencies, 0 manual, 0 excluded)
        - Corpus: `2026.10`

        > Skipped for conflicts: `ai-use-permitted`

        | # | Clause | Risk | Score | Reason |
        |---|---|---|---|---|
        | 1 | `coppa` Children's Privacy | critical | 1.00 | Aligned with critical risk profile |
        | 2 | `consent` Consent \| Notice | critical | 0.90 | Required by Children's Privacy |
        ");
    }

    #[test]
    fn empty_selection_says_so() {
        let md = render_selection_markdown(&selection_report(Vec::new(), Vec::new()));
        assert!(md.contains("No clauses selected."));
        assert!(!md.contains("Skipped for conflicts"));
        assert!(!md.contains("| # |"));
    }

    fn diff_report(diffs: Vec<PolicyDiff>, summary: DiffSummary) -> DiffReport {
        DiffReport {
            schema: "policykit.diff.v1".to_string(),
            tool: tool(),
            generated_at: datetime!(2026-01-01 00:00 UTC),
            options: DiffOptions::with_granularity(Granularity::Word),
            diffs,
            summary,
        }
    }

    fn diff(kind: DiffKind, old: Option<&str>, new: Option<&str>, position: usize) -> PolicyDiff {
        PolicyDiff {
            id: format!("diff-{position}"),
            kind,
            old_text: old.map(str::to_string),
            new_text: new.map(str::to_string),
            position,
            description: String::new(),
        }
    }

    #[test]
    fn diff_report_lists_each_change() {
        let report = diff_report(
            vec![
                diff(DiffKind::Deletion, Some("cat"), None, 1),
                diff(DiffKind::Addition, None, Some("dog"), 1),
                diff(DiffKind::Modification, Some("old\n\nrule"), Some("new rule"), 2),
            ],
            DiffSummary {
                additions: 1,
                deletions: 1,
                modifications: 1,
                segments_base: 4,
                segments_new: 4,
                unchanged: 2,
                similarity: 0.5,
            },
        );
        insta::assert_snapshot!(render_diff_markdown(&report), @r"
        # Policy diff

        - Granularity: word
        - Changes: 1 added, 1 removed, 1 modified
        - Similarity: 50.0% (2 unchanged; 4 segments before, 4 after)

        ## Changes

        - [-] @1: `cat`
        - [+] @1: `dog`
        - [~] @2: `old ¶ rule` -> `new rule`
        ");
    }

    #[test]
    fn identical_documents_have_no_changes_section() {
        let report = diff_report(
            Vec::new(),
            DiffSummary {
                segments_base: 3,
                segments_new: 3,
                unchanged: 3,
                similarity: 1.0,
                ..DiffSummary::default()
            },
        );
        let md = render_diff_markdown(&report);
        assert!(md.contains("Similarity: 100.0%"));
        assert!(md.ends_with("No differences.\n"));
    }

    #[test]
    fn redline_report_lists_changes_with_comments() {
        let change = |kind, text: &str, word| RedlineChange {
            id: format!("change-{word}"),
            kind,
            text: text.to_string(),
            position: RedlinePosition {
                paragraph: 0,
                sentence: 0,
                word,
            },
            author: "Reviewer".to_string(),
            timestamp: datetime!(2026-01-01 00:00 UTC),
            comment: Some(format!("note {word}")),
        };
        let report = RedlineReport {
            schema: "policykit.redline.v1".to_string(),
            tool: tool(),
            generated_at: datetime!(2026-01-01 00:00 UTC),
            author: "Reviewer".to_string(),
            changes: vec![
                change(RedlineKind::Delete, "cat", 1),
                change(RedlineKind::Insert, "use `code`", 2),
            ],
        };
        insta::assert_snapshot!(render_redline_markdown(&report), @r"
        # Redline

        - Author: Reviewer
        - Changes: 2 (1 insertions, 1 deletions)

        - [-] delete at 0.0.1: `cat`
          - note 1
        - [+] insert at 0.0.2: `` use `code` ``
          - note 2
        ");
    }
}
