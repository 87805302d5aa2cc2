//! Greedy conflict/dependency resolution and manual overrides.

use crate::score::ClauseScore;
use policykit_corpus::Corpus;
use policykit_types::{DependencyMode, PolicyClause};
use std::collections::{BTreeSet, VecDeque};

/// Why a clause ended up in the selection.
#[derive(Clone, Debug)]
pub(crate) enum Origin {
    Ranked(ClauseScore),
    /// Pulled in by the clause with this title.
    Dependency(String),
    Manual,
}

#[derive(Clone, Debug)]
pub(crate) struct Entry<'c> {
    pub clause: &'c PolicyClause,
    pub origin: Origin,
}

#[derive(Debug, Default)]
pub(crate) struct Resolution<'c> {
    pub entries: Vec<Entry<'c>>,
    pub conflicts_skipped: Vec<String>,
    pub excluded: u32,
}

struct Selected<'c> {
    entries: Vec<Entry<'c>>,
    ids: BTreeSet<&'c str>,
}

impl<'c> Selected<'c> {
    fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    fn push(&mut self, clause: &'c PolicyClause, origin: Origin) {
        self.ids.insert(clause.id.as_str());
        self.entries.push(Entry { clause, origin });
    }

    fn conflicts_with(&self, candidate: &PolicyClause) -> bool {
        self.entries
            .iter()
            .any(|e| e.clause.conflicts_with(&candidate.id) || candidate.conflicts_with(&e.clause.id))
    }
}

/// Walk ranked candidates, skipping conflicts and appending dependencies right after
/// the clause that needs them. A candidate already pulled in as a dependency keeps its
/// place but still brings its own dependencies.
pub(crate) fn resolve<'c>(
    corpus: &'c Corpus,
    ranked: Vec<(&'c PolicyClause, ClauseScore)>,
    mode: DependencyMode,
) -> Resolution<'c> {
    let mut selected = Selected {
        entries: Vec::new(),
        ids: BTreeSet::new(),
    };
    let mut conflicts_skipped = Vec::new();

    for (clause, score) in ranked {
        if selected.contains(&clause.id) {
            add_dependencies(corpus, clause, mode, &mut selected);
            continue;
        }
        if selected.conflicts_with(clause) {
            conflicts_skipped.push(clause.id.clone());
            continue;
        }
        selected.push(clause, Origin::Ranked(score));
        add_dependencies(corpus, clause, mode, &mut selected);
    }

    Resolution {
        entries: selected.entries,
        conflicts_skipped,
        excluded: 0,
    }
}

fn add_dependencies<'c>(
    corpus: &'c Corpus,
    root: &'c PolicyClause,
    mode: DependencyMode,
    selected: &mut Selected<'c>,
) {
    let mut queue = VecDeque::from([root]);
    while let Some(current) = queue.pop_front() {
        for dep_id in &current.dependencies {
            let Some(dep) = corpus.clause(dep_id) else {
                continue;
            };
            if selected.contains(&dep.id) {
                continue;
            }
            selected.push(dep, Origin::Dependency(current.title.clone()));
            if mode == DependencyMode::Transitive {
                queue.push_back(dep);
            }
        }
    }
}

/// Exclusions first, then manual inclusions at the tail. An id in both lists ends up
/// included.
pub(crate) fn apply_overrides<'c>(
    corpus: &'c Corpus,
    resolution: &mut Resolution<'c>,
    include: &[String],
    exclude: &[String],
) {
    let before = resolution.entries.len();
    resolution
        .entries
        .retain(|e| !exclude.iter().any(|x| *x == e.clause.id));
    resolution.excluded = (before - resolution.entries.len()) as u32;

    for id in include {
        let Some(clause) = corpus.clause(id) else {
            continue;
        };
        if resolution.entries.iter().any(|e| e.clause.id == clause.id) {
            continue;
        }
        resolution.entries.push(Entry {
            clause,
            origin: Origin::Manual,
        });
    }
}
