//! Property-based tests for the selector.
//!
//! Generated corpora are lint-clean by construction:
//! - conflicts are declared symmetrically between clauses in different posture groups
//! - dependencies only ever point at clauses outside every posture group
//!
//! That is the shape the resolver relies on for conflict exclusivity.

use crate::engine::{ClauseSelector, select_clauses};
use crate::filter::is_applicable;
use policykit_corpus::Corpus;
use policykit_types::ids::REASON_MANUALLY_INCLUDED;
use policykit_types::{
    Audience, ClauseMetadata, ClauseSelectionInput, DependencyMode, PolicyClause, RiskLevel,
    SelectedClause, ToolUseMode,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

const TAG_POOL: &[&str] = &["privacy", "research", "ai-use", "integrity", "security", "equity"];
const JURISDICTIONS: &[&str] = &["US", "CA", "EU"];

fn arb_risk() -> impl Strategy<Value = RiskLevel> {
    prop::sample::select(RiskLevel::ALL.to_vec())
}

fn arb_mode() -> impl Strategy<Value = ToolUseMode> {
    prop::sample::select(ToolUseMode::ALL.to_vec())
}

fn arb_audience() -> impl Strategy<Value = Audience> {
    prop_oneof![Just(Audience::K12), Just(Audience::HigherEd)]
}

fn arb_subset<T: Clone + std::fmt::Debug + 'static>(pool: Vec<T>) -> impl Strategy<Value = Vec<T>> {
    let len = pool.len();
    prop::sample::subsequence(pool, 0..=len)
}

#[derive(Clone, Debug)]
struct ClauseShape {
    risk: RiskLevel,
    audience: Option<Vec<Audience>>,
    jurisdictions: Option<Vec<String>>,
    modes: Option<Vec<ToolUseMode>>,
    tags: Vec<String>,
    /// Posture group; `None` means the clause never conflicts.
    group: Option<u8>,
    dependency_picks: Vec<usize>,
}

fn arb_shape() -> impl Strategy<Value = ClauseShape> {
    (
        arb_risk(),
        prop::option::of(arb_subset(vec![Audience::K12, Audience::HigherEd])),
        prop::option::of(arb_subset(JURISDICTIONS.iter().map(|s| s.to_string()).collect())),
        prop::option::of(arb_subset(ToolUseMode::ALL.to_vec())),
        arb_subset(TAG_POOL.iter().map(|s| s.to_string()).collect()),
        prop::option::of(0u8..3),
        prop::collection::vec(any::<usize>(), 0..3),
    )
        .prop_map(
            |(risk, audience, jurisdictions, modes, tags, group, dependency_picks)| ClauseShape {
                risk,
                audience,
                jurisdictions,
                modes,
                tags,
                group,
                dependency_picks,
            },
        )
}

fn build_corpus(shapes: &[ClauseShape]) -> Corpus {
    let id = |i: usize| format!("c{i}");
    let free: Vec<usize> = (0..shapes.len())
        .filter(|&i| shapes[i].group.is_none())
        .collect();

    let clauses = shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            let conflicts = match shape.group {
                Some(g) => shapes
                    .iter()
                    .enumerate()
                    .filter(|(j, other)| *j != i && other.group.is_some_and(|h| h != g))
                    .map(|(j, _)| id(j))
                    .collect(),
                None => Vec::new(),
            };
            let mut dependencies: Vec<String> = Vec::new();
            if !free.is_empty() {
                for pick in &shape.dependency_picks {
                    let dep = free[pick % free.len()];
                    if dep != i && !dependencies.contains(&id(dep)) {
                        dependencies.push(id(dep));
                    }
                }
            }
            PolicyClause {
                id: id(i),
                title: format!("Clause {i}"),
                body: format!("Body {i}."),
                tags: shape.tags.clone(),
                risk_level: shape.risk,
                audience: shape.audience.clone(),
                jurisdictions: shape.jurisdictions.clone(),
                tool_use_modes: shape.modes.clone(),
                dependencies,
                conflicts,
                metadata: ClauseMetadata::default(),
            }
        })
        .collect();

    Corpus::new("prop", clauses, Vec::new()).expect("generated ids are unique")
}

fn arb_corpus() -> impl Strategy<Value = Corpus> {
    prop::collection::vec(arb_shape(), 1..12).prop_map(|shapes| build_corpus(&shapes))
}

fn arb_input() -> impl Strategy<Value = ClauseSelectionInput> {
    (
        arb_audience(),
        arb_risk(),
        arb_mode(),
        prop::option::of(prop::sample::select(JURISDICTIONS.to_vec())),
        prop::option::of(prop::sample::select(JURISDICTIONS.to_vec())),
        arb_subset(TAG_POOL.iter().map(|s| s.to_string()).collect()),
        prop_oneof![Just(DependencyMode::Shallow), Just(DependencyMode::Transitive)],
    )
        .prop_map(|(audience, risk, mode, jurisdiction, state, tags, dependency_mode)| {
            let mut input = ClauseSelectionInput::new(audience, risk, mode);
            input.jurisdiction = jurisdiction.map(str::to_string);
            input.state = state.map(str::to_string);
            input.custom_tags = tags;
            input.dependency_mode = dependency_mode;
            input
        })
}

fn arb_id_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![(0usize..14).prop_map(|i| format!("c{i}")), Just("ghost".to_string())],
        0..4,
    )
}

/// Conflict-free corpus where every clause depends on the next one, so chains run the
/// full length of the corpus.
fn arb_chain_corpus() -> impl Strategy<Value = Corpus> {
    prop::collection::vec(arb_shape(), 2..8).prop_map(|shapes| {
        let len = shapes.len();
        let shapes: Vec<ClauseShape> = shapes
            .into_iter()
            .enumerate()
            .map(|(i, mut shape)| {
                shape.group = None;
                shape.dependency_picks = if i + 1 < len { vec![i + 1] } else { Vec::new() };
                shape
            })
            .collect();
        build_corpus(&shapes)
    })
}

fn assert_direct_dependencies_closed(
    corpus: &Corpus,
    input: &ClauseSelectionInput,
    selected: &[SelectedClause],
) -> Result<(), TestCaseError> {
    let ids: BTreeSet<&str> = selected.iter().map(|s| s.id()).collect();
    let ranked = selected
        .iter()
        .filter(|s| !is_manual(s) && is_applicable(&s.clause, input));
    for s in ranked {
        for dep in &s.clause.dependencies {
            if corpus.clause(dep).is_some() && !input.exclude_clauses.contains(dep) {
                prop_assert!(ids.contains(dep.as_str()), "{} missing dependency {}", s.id(), dep);
            }
        }
    }
    Ok(())
}

fn is_dependency(s: &SelectedClause) -> bool {
    s.reason.starts_with("Required dependency for ")
}

fn is_manual(s: &SelectedClause) -> bool {
    s.reason == REASON_MANUALLY_INCLUDED
}

// ============================================================================
// Selection invariants
// ============================================================================

proptest! {
    /// Ranked clauses all pass the applicability filter.
    #[test]
    fn ranked_clauses_pass_the_filter(corpus in arb_corpus(), input in arb_input()) {
        for s in select_clauses(&corpus, &input) {
            if !is_dependency(&s) {
                prop_assert!(is_applicable(&s.clause, &input), "{} slipped through", s.id());
            }
        }
    }

    /// No two selected clauses conflict when there are no manual includes.
    #[test]
    fn selection_is_conflict_free(corpus in arb_corpus(), input in arb_input()) {
        let selected = select_clauses(&corpus, &input);
        for a in &selected {
            for b in &selected {
                prop_assert!(
                    !a.clause.conflicts_with(b.id()),
                    "{} conflicts with {}", a.id(), b.id()
                );
            }
        }
    }

    /// Each ranked clause brings its direct dependencies, unless they are excluded. A
    /// clause that passes the filter was a ranked candidate even when an earlier clause
    /// already pulled it in.
    #[test]
    fn direct_dependencies_are_closed(
        corpus in prop_oneof![arb_corpus(), arb_chain_corpus()],
        input in arb_input(),
        exclude in arb_id_list(),
    ) {
        let mut input = input;
        input.exclude_clauses = exclude;
        let selected = select_clauses(&corpus, &input);
        assert_direct_dependencies_closed(&corpus, &input, &selected)?;
    }

    /// Chains deeper than one level close at every applicable link in both modes.
    #[test]
    fn dependency_chains_close_at_every_ranked_link(
        corpus in arb_chain_corpus(),
        input in arb_input(),
    ) {
        let selected = select_clauses(&corpus, &input);
        assert_direct_dependencies_closed(&corpus, &input, &selected)?;
        if input.dependency_mode == DependencyMode::Transitive {
            let ids: BTreeSet<&str> = selected.iter().map(|s| s.id()).collect();
            for s in &selected {
                for dep in &s.clause.dependencies {
                    prop_assert!(ids.contains(dep.as_str()), "{} missing dependency {}", s.id(), dep);
                }
            }
        }
    }

    /// Excluded ids never appear unless they are also manually included.
    #[test]
    fn exclusions_win_over_dependencies(
        corpus in arb_corpus(),
        input in arb_input(),
        exclude in arb_id_list(),
    ) {
        let mut input = input;
        input.exclude_clauses = exclude;
        for s in select_clauses(&corpus, &input) {
            prop_assert!(!input.exclude_clauses.iter().any(|x| x == s.id()));
        }
    }

    /// Manual includes form the tail of the list, in input order.
    #[test]
    fn includes_are_appended_at_the_tail(
        corpus in arb_corpus(),
        input in arb_input(),
        include in arb_id_list(),
        exclude in arb_id_list(),
    ) {
        let mut input = input;
        input.include_clauses = include;
        input.exclude_clauses = exclude;
        let selected = select_clauses(&corpus, &input);

        let first_manual = selected.iter().position(is_manual).unwrap_or(selected.len());
        prop_assert!(selected[first_manual..].iter().all(is_manual));

        let head: BTreeSet<&str> = selected[..first_manual].iter().map(|s| s.id()).collect();
        let manual: Vec<&str> = selected[first_manual..].iter().map(|s| s.id()).collect();
        let mut expected: Vec<&str> = Vec::new();
        for id in &input.include_clauses {
            let id = id.as_str();
            if corpus.clause(id).is_some() && !head.contains(id) && !expected.contains(&id) {
                expected.push(id);
            }
        }
        prop_assert_eq!(manual, expected);
    }

    /// Same corpus and input, same output.
    #[test]
    fn selection_is_deterministic(corpus in arb_corpus(), input in arb_input()) {
        let selector = ClauseSelector::new(&corpus);
        prop_assert_eq!(selector.select(&input), selector.select(&input));
    }

    /// Priorities are 1..=n and every score stays in [0, 1].
    #[test]
    fn priorities_and_scores_are_well_formed(corpus in arb_corpus(), input in arb_input()) {
        let selected = select_clauses(&corpus, &input);
        for (i, s) in selected.iter().enumerate() {
            prop_assert_eq!(s.priority as usize, i + 1);
            prop_assert!((0.0..=1.0).contains(&s.score));
            prop_assert!(!s.reason.is_empty());
        }
        let unique: BTreeSet<&str> = selected.iter().map(|s| s.id()).collect();
        prop_assert_eq!(unique.len(), selected.len());
    }

    /// Arbitrary enum strings degrade instead of failing.
    #[test]
    fn malformed_input_never_panics(
        audience in ".{0,12}",
        risk in ".{0,12}",
        mode in ".{0,12}",
        tags in prop::collection::vec(".{0,8}", 0..4),
    ) {
        let corpus = Corpus::builtin();
        let mut input = ClauseSelectionInput::new(
            Audience::parse(&audience),
            RiskLevel::parse(&risk),
            ToolUseMode::parse(&mode),
        );
        input.custom_tags = tags;
        let selected = select_clauses(&corpus, &input);
        prop_assert!(selected.iter().all(|s| s.selected));
    }
}
