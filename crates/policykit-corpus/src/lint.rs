use crate::Corpus;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    DanglingDependency,
    DanglingConflict,
    DependencyConflictOverlap,
    AsymmetricConflict,
    SelfReference,
    DependenciesConflict,
    UnknownTemplateClause,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::DanglingDependency => "dangling_dependency",
            IssueCode::DanglingConflict => "dangling_conflict",
            IssueCode::DependencyConflictOverlap => "dependency_conflict_overlap",
            IssueCode::AsymmetricConflict => "asymmetric_conflict",
            IssueCode::SelfReference => "self_reference",
            IssueCode::DependenciesConflict => "dependencies_conflict",
            IssueCode::UnknownTemplateClause => "unknown_template_clause",
        }
    }
}

/// One problem found in the corpus graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CorpusIssue {
    pub code: IssueCode,
    /// Clause or template the issue was found on.
    pub subject: String,
    pub message: String,
}

impl fmt::Display for CorpusIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.as_str(), self.subject, self.message)
    }
}

pub(crate) fn validate(corpus: &Corpus) -> Vec<CorpusIssue> {
    let mut out = Vec::new();

    for clause in corpus.clauses() {
        let id = clause.id.as_str();
        let mut issue = |code: IssueCode, message: String| {
            out.push(CorpusIssue {
                code,
                subject: id.to_string(),
                message,
            })
        };

        for dep in &clause.dependencies {
            if dep == id {
                issue(IssueCode::SelfReference, "clause depends on itself".to_string());
            } else if corpus.clause(dep).is_none() {
                issue(
                    IssueCode::DanglingDependency,
                    format!("dependency '{dep}' is not in the corpus"),
                );
            }
            if clause.conflicts_with(dep) {
                issue(
                    IssueCode::DependencyConflictOverlap,
                    format!("'{dep}' is listed as both a dependency and a conflict"),
                );
            }
        }

        for other in &clause.conflicts {
            if other == id {
                issue(IssueCode::SelfReference, "clause conflicts with itself".to_string());
                continue;
            }
            match corpus.clause(other) {
                None => issue(
                    IssueCode::DanglingConflict,
                    format!("conflict '{other}' is not in the corpus"),
                ),
                Some(o) if !o.conflicts_with(id) => issue(
                    IssueCode::AsymmetricConflict,
                    format!("'{other}' does not declare the reverse conflict"),
                ),
                Some(_) => {}
            }
        }

        // Dependencies are pulled in without conflict checks, so two of them must
        // never conflict with each other or with the dependent.
        for (i, a) in clause.dependencies.iter().enumerate() {
            let Some(dep_a) = corpus.clause(a) else {
                continue;
            };
            if dep_a.conflicts_with(id) {
                issue(
                    IssueCode::DependenciesConflict,
                    format!("dependency '{a}' conflicts with its dependent"),
                );
            }
            for b in &clause.dependencies[i + 1..] {
                let b_conflicts = corpus.clause(b).is_some_and(|dep_b| dep_b.conflicts_with(a));
                if dep_a.conflicts_with(b) || b_conflicts {
                    issue(
                        IssueCode::DependenciesConflict,
                        format!("dependencies '{a}' and '{b}' conflict"),
                    );
                }
            }
        }
    }

    for template in corpus.templates() {
        for id in &template.clause_ids {
            if corpus.clause(id).is_none() {
                out.push(CorpusIssue {
                    code: IssueCode::UnknownTemplateClause,
                    subject: template.id.clone(),
                    message: format!("template references unknown clause '{id}'"),
                });
            }
        }
    }

    out.sort_by(|a, b| {
        a.subject
            .cmp(&b.subject)
            .then(a.code.cmp(&b.code))
            .then(a.message.cmp(&b.message))
    });
    out
}
