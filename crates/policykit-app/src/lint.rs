//! The `lint` use case: static validation of the corpus graph.

use policykit_corpus::{Corpus, CorpusIssue};

#[derive(Clone, Debug)]
pub struct LintOutput {
    pub corpus_version: String,
    pub clauses: usize,
    pub templates: usize,
    pub issues: Vec<CorpusIssue>,
}

pub fn run_lint(corpus: &Corpus) -> LintOutput {
    let issues = corpus.validate();
    if issues.is_empty() {
        tracing::info!(version = corpus.version(), "corpus lint clean");
    } else {
        tracing::warn!(version = corpus.version(), issues = issues.len(), "corpus lint found issues");
    }
    LintOutput {
        corpus_version: corpus.version().to_string(),
        clauses: corpus.clauses().len(),
        templates: corpus.templates().len(),
        issues,
    }
}

/// 0 when clean, 2 when issues were found.
pub fn lint_exit_code(output: &LintOutput) -> u8 {
    if output.issues.is_empty() { 0 } else { 2 }
}

pub fn format_lint(output: &LintOutput) -> String {
    let mut out = format!(
        "corpus {}: {} clauses, {} templates\n",
        output.corpus_version, output.clauses, output.templates
    );
    if output.issues.is_empty() {
        out.push_str("no issues\n");
        return out;
    }
    for issue in &output.issues {
        out.push_str(&format!("{issue}\n"));
    }
    out.push_str(&format!("{} issue(s)\n", output.issues.len()));
    out
}
