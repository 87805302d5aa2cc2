//! The `explain` use case: describe a clause or template from the corpus.

use policykit_corpus::Corpus;
use policykit_types::{PolicyClause, PolicyTemplate};

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Clause(PolicyClause),
    Template(PolicyTemplate),
    /// Unknown identifier; carries what the corpus does know.
    NotFound {
        identifier: String,
        clause_ids: Vec<String>,
        template_ids: Vec<String>,
    },
}

/// Clause ids are checked before template ids.
pub fn run_explain(corpus: &Corpus, identifier: &str) -> ExplainOutput {
    if let Some(clause) = corpus.clause(identifier) {
        return ExplainOutput::Clause(clause.clone());
    }
    if let Some(template) = corpus.template(identifier) {
        return ExplainOutput::Template(template.clone());
    }
    ExplainOutput::NotFound {
        identifier: identifier.to_string(),
        clause_ids: corpus.clause_ids().map(str::to_string).collect(),
        template_ids: corpus.template_ids().map(str::to_string).collect(),
    }
}

pub fn format_clause(clause: &PolicyClause) -> String {
    let mut out = String::new();
    underline(&mut out, &clause.title, '=');
    out.push_str(&format!("id: {}\n", clause.id));
    out.push_str(&format!("risk: {}\n", clause.risk_level));
    if !clause.tags.is_empty() {
        out.push_str(&format!("tags: {}\n", clause.tags.join(", ")));
    }
    if let Some(audience) = &clause.audience {
        let names: Vec<&str> = audience.iter().map(|a| a.as_str()).collect();
        out.push_str(&format!("audience: {}\n", names.join(", ")));
    }
    if let Some(jurisdictions) = &clause.jurisdictions {
        out.push_str(&format!("jurisdictions: {}\n", jurisdictions.join(", ")));
    }
    if let Some(modes) = &clause.tool_use_modes {
        let names: Vec<&str> = modes.iter().map(|m| m.as_str()).collect();
        out.push_str(&format!("tool use: {}\n", names.join(", ")));
    }
    if !clause.dependencies.is_empty() {
        out.push_str(&format!("requires: {}\n", clause.dependencies.join(", ")));
    }
    if !clause.conflicts.is_empty() {
        out.push_str(&format!("conflicts with: {}\n", clause.conflicts.join(", ")));
    }
    out.push('\n');
    out.push_str(clause.body.trim());
    out.push('\n');
    if !clause.metadata.references.is_empty() {
        out.push('\n');
        underline(&mut out, "References", '-');
        for r in &clause.metadata.references {
            out.push_str(&format!("  - {r}\n"));
        }
    }
    out
}

pub fn format_template(corpus: &Corpus, template: &PolicyTemplate) -> String {
    let mut out = String::new();
    underline(&mut out, &template.name, '=');
    out.push_str(&format!("id: {}\n", template.id));
    if !template.description.is_empty() {
        out.push('\n');
        out.push_str(template.description.trim());
        out.push('\n');
    }
    out.push('\n');
    underline(&mut out, "Clauses", '-');
    for (n, id) in template.clause_ids.iter().enumerate() {
        match corpus.clause(id) {
            Some(clause) => out.push_str(&format!("  {}. {} ({})\n", n + 1, clause.title, id)),
            None => out.push_str(&format!("  {}. {} (missing from corpus)\n", n + 1, id)),
        }
    }
    out
}

pub fn format_not_found(identifier: &str, clause_ids: &[String], template_ids: &[String]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown clause or template id: {identifier}\n\n"));
    out.push_str("Available clauses:\n");
    for id in clause_ids {
        out.push_str(&format!("  - {id}\n"));
    }
    out.push_str("\nAvailable templates:\n");
    for id in template_ids {
        out.push_str(&format!("  - {id}\n"));
    }

    out
}

fn underline(out: &mut String, heading: &str, ch: char) {
    out.push_str(heading);
    out.push('\n');
    out.extend(std::iter::repeat_n(ch, heading.chars().count()));
    out.push('\n');
}
