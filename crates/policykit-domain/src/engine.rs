use crate::filter::is_applicable;
use crate::reason::{dependency_reason, rationale};
use crate::resolve::{Origin, apply_overrides, resolve};
use crate::score::{ClauseScore, score_clause};
use policykit_corpus::Corpus;
use policykit_types::ids::REASON_MANUALLY_INCLUDED;
use policykit_types::{ClauseSelectionInput, PolicyClause, SelectedClause, SelectionData};
use std::cmp::Ordering;

const DEPENDENCY_SCORE: f64 = 0.9;
const MANUAL_SCORE: f64 = 1.0;

/// Final ordering plus the counters a selection report carries.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub clauses: Vec<SelectedClause>,
    pub data: SelectionData,
}

/// Selector bound to one corpus.
#[derive(Clone, Copy, Debug)]
pub struct ClauseSelector<'c> {
    corpus: &'c Corpus,
}

impl<'c> ClauseSelector<'c> {
    pub fn new(corpus: &'c Corpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &'c Corpus {
        self.corpus
    }

    pub fn select(&self, input: &ClauseSelectionInput) -> Vec<SelectedClause> {
        self.select_with_stats(input).clauses
    }

    pub fn select_with_stats(&self, input: &ClauseSelectionInput) -> Selection {
        let ranked = self.rank(input);
        let candidates_considered = ranked.len() as u32;

        let mut resolution = resolve(self.corpus, ranked, input.dependency_mode);
        apply_overrides(
            self.corpus,
            &mut resolution,
            &input.include_clauses,
            &input.exclude_clauses,
        );

        let mut dependencies_added = 0u32;
        let mut manually_included = 0u32;
        let clauses: Vec<SelectedClause> = resolution
            .entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let (score, reason) = match &entry.origin {
                    Origin::Ranked(score) => (score.value(), rationale(entry.clause, score, input)),
                    Origin::Dependency(title) => {
                        dependencies_added += 1;
                        (DEPENDENCY_SCORE, dependency_reason(title))
                    }
                    Origin::Manual => {
                        manually_included += 1;
                        (MANUAL_SCORE, REASON_MANUALLY_INCLUDED.to_string())
                    }
                };
                SelectedClause {
                    clause: entry.clause.clone(),
                    selected: true,
                    reason,
                    priority: i as u32 + 1,
                    score,
                }
            })
            .collect();

        tracing::debug!(
            corpus_version = self.corpus.version(),
            candidates = candidates_considered,
            selected = clauses.len(),
            conflicts_skipped = resolution.conflicts_skipped.len(),
            dependencies_added,
            manually_included,
            excluded = resolution.excluded,
            "clause selection complete"
        );

        let data = SelectionData {
            candidates_considered,
            clauses_selected: clauses.len() as u32,
            conflicts_skipped: resolution.conflicts_skipped,
            dependencies_added,
            manually_included,
            excluded: resolution.excluded,
        };

        Selection { clauses, data }
    }

    /// Applicable clauses, best first.
    fn rank(&self, input: &ClauseSelectionInput) -> Vec<(&'c PolicyClause, ClauseScore)> {
        let mut ranked: Vec<(&'c PolicyClause, ClauseScore)> = self
            .corpus
            .clauses()
            .iter()
            .filter(|c| is_applicable(c, input))
            .map(|c| (c, score_clause(c, input)))
            .collect();

        // Stable sort: equal scores keep corpus order.
        ranked.sort_by(|(_, a), (_, b)| compare_scores(a, b));
        ranked
    }
}

/// Convenience wrapper for one-off selections.
pub fn select_clauses(corpus: &Corpus, input: &ClauseSelectionInput) -> Vec<SelectedClause> {
    ClauseSelector::new(corpus).select(input)
}

fn compare_scores(a: &ClauseScore, b: &ClauseScore) -> Ordering {
    b.value()
        .total_cmp(&a.value())
        .then_with(|| b.raw.total_cmp(&a.raw))
}
