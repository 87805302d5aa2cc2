//! The clause corpus: an immutable catalog of policy clauses and templates.
//!
//! A `Corpus` is plain data. It is built once (from the shipped catalog or from JSON)
//! and passed by reference into the selector and the renderer; nothing here holds
//! global state.

#![forbid(unsafe_code)]

mod builtin;
mod lint;

pub use lint::{CorpusIssue, IssueCode};

use policykit_types::{PolicyClause, PolicyTemplate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate clause id: {0}")]
    DuplicateClause(String),

    #[error("duplicate template id: {0}")]
    DuplicateTemplate(String),
}

/// On-disk shape of a corpus file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CorpusDocument {
    pub version: String,
    #[serde(default)]
    pub clauses: Vec<PolicyClause>,
    #[serde(default)]
    pub templates: Vec<PolicyTemplate>,
}

#[derive(Clone, Debug)]
pub struct Corpus {
    version: String,
    clauses: Vec<PolicyClause>,
    templates: Vec<PolicyTemplate>,
    clause_index: BTreeMap<String, usize>,
    template_index: BTreeMap<String, usize>,
}

impl Corpus {
    pub fn new(
        version: impl Into<String>,
        clauses: Vec<PolicyClause>,
        templates: Vec<PolicyTemplate>,
    ) -> Result<Self, CorpusError> {
        let mut clause_index = BTreeMap::new();
        for (i, clause) in clauses.iter().enumerate() {
            if clause_index.insert(clause.id.clone(), i).is_some() {
                return Err(CorpusError::DuplicateClause(clause.id.clone()));
            }
        }

        let mut template_index = BTreeMap::new();
        for (i, template) in templates.iter().enumerate() {
            if template_index.insert(template.id.clone(), i).is_some() {
                return Err(CorpusError::DuplicateTemplate(template.id.clone()));
            }
        }

        Ok(Self {
            version: version.into(),
            clauses,
            templates,
            clause_index,
            template_index,
        })
    }

    /// The education catalog shipped with policykit.
    pub fn builtin() -> Self {
        let (clauses, templates) = builtin::catalog();
        Self::new(builtin::CATALOG_VERSION, clauses, templates)
            .expect("built-in catalog has unique ids")
    }

    pub fn from_json(input: &str) -> Result<Self, CorpusError> {
        let doc: CorpusDocument = serde_json::from_str(input)?;
        Self::new(doc.version, doc.clauses, doc.templates)
    }

    pub fn to_document(&self) -> CorpusDocument {
        CorpusDocument {
            version: self.version.clone(),
            clauses: self.clauses.clone(),
            templates: self.templates.clone(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Clauses in catalog order. Selection tie-breaks fall back to this order.
    pub fn clauses(&self) -> &[PolicyClause] {
        &self.clauses
    }

    pub fn templates(&self) -> &[PolicyTemplate] {
        &self.templates
    }

    pub fn clause(&self, id: &str) -> Option<&PolicyClause> {
        self.clause_index.get(id).map(|&i| &self.clauses[i])
    }

    pub fn template(&self, id: &str) -> Option<&PolicyTemplate> {
        self.template_index.get(id).map(|&i| &self.templates[i])
    }

    pub fn clause_ids(&self) -> impl Iterator<Item = &str> {
        self.clauses.iter().map(|c| c.id.as_str())
    }

    pub fn template_ids(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.id.as_str())
    }

    /// Static validation of dependency and conflict edges. Empty means clean.
    pub fn validate(&self) -> Vec<CorpusIssue> {
        lint::validate(self)
    }
}
