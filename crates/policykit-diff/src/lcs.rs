//! Segment-level LCS differ.
//!
//! Full O(m·n) table; fine for policy-sized documents, and callers can pick a coarser
//! granularity when it is not.

use crate::fingerprint::short_id;
use crate::segment::{joiner, segment};
use policykit_types::ids::DIFF_ID_PREFIX;
use policykit_types::{DiffKind, DiffOptions, DiffSummary, PolicyDiff};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {
    Equal,
    Delete,
    Insert,
}

/// A maximal run of one op kind, with the segments it covers.
#[derive(Debug)]
struct Run<'a> {
    op: Op,
    segments: Vec<&'a str>,
}

#[derive(Clone, Debug, Default)]
pub struct LcsDiffer {
    options: DiffOptions,
}

impl LcsDiffer {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn diff(&self, base: &str, new: &str) -> Vec<PolicyDiff> {
        self.diff_with_summary(base, new).0
    }

    pub fn diff_with_summary(&self, base: &str, new: &str) -> (Vec<PolicyDiff>, DiffSummary) {
        let granularity = self.options.granularity;
        let a = segment(base, granularity);
        let b = segment(new, granularity);

        let ops = lcs_ops(&a, &b, self.options.ignore_case);
        let unchanged = ops.iter().filter(|op| **op == Op::Equal).count();
        let runs = consolidate(&ops, &a, &b);

        let sep = joiner(granularity);
        let mut diffs = Vec::new();
        let mut position = 0usize;
        for run in &runs {
            let text = run.segments.join(sep);
            match run.op {
                Op::Equal => {}
                Op::Delete => diffs.push(change(DiffKind::Deletion, Some(text), None, position)),
                Op::Insert => diffs.push(change(DiffKind::Addition, None, Some(text), position)),
            }
            position += run.segments.len();
        }

        if self.options.pair_modifications {
            diffs = pair_modifications(diffs);
        }

        let summary = summarize(&diffs, a.len(), b.len(), unchanged);
        tracing::debug!(
            granularity = granularity.effective().as_str(),
            segments_base = a.len(),
            segments_new = b.len(),
            changes = diffs.len(),
            "lcs diff complete"
        );
        (diffs, summary)
    }
}

/// Structural diff between two policy texts.
pub fn diff_policies(base: &str, new: &str, options: &DiffOptions) -> Vec<PolicyDiff> {
    LcsDiffer::new(options.clone()).diff(base, new)
}

pub fn diff_with_summary(
    base: &str,
    new: &str,
    options: &DiffOptions,
) -> (Vec<PolicyDiff>, DiffSummary) {
    LcsDiffer::new(options.clone()).diff_with_summary(base, new)
}

/// Change counts plus similarity (`unchanged / max(segments_base, segments_new)`, 1.0 when
/// both sides are empty).
pub fn summarize(
    diffs: &[PolicyDiff],
    segments_base: usize,
    segments_new: usize,
    unchanged: usize,
) -> DiffSummary {
    let count = |kind: DiffKind| diffs.iter().filter(|d| d.kind == kind).count() as u32;
    let longest = segments_base.max(segments_new);
    let similarity = if longest == 0 {
        1.0
    } else {
        unchanged as f64 / longest as f64
    };

    DiffSummary {
        additions: count(DiffKind::Addition),
        deletions: count(DiffKind::Deletion),
        modifications: count(DiffKind::Modification),
        segments_base: segments_base as u32,
        segments_new: segments_new as u32,
        unchanged: unchanged as u32,
        similarity,
    }
}

/// Merge each deletion that is directly followed by an addition in the change list into
/// a single modification at the deletion's position.
pub fn pair_modifications(diffs: Vec<PolicyDiff>) -> Vec<PolicyDiff> {
    let mut out: Vec<PolicyDiff> = Vec::with_capacity(diffs.len());
    let mut iter = diffs.into_iter().peekable();
    while let Some(diff) = iter.next() {
        let pairs = diff.kind == DiffKind::Deletion
            && iter.peek().is_some_and(|next| next.kind == DiffKind::Addition);
        if pairs && let Some(addition) = iter.next() {
            out.push(change(
                DiffKind::Modification,
                diff.old_text,
                addition.new_text,
                diff.position,
            ));
        } else {
            out.push(diff);
        }
    }
    out
}

fn change(
    kind: DiffKind,
    old_text: Option<String>,
    new_text: Option<String>,
    position: usize,
) -> PolicyDiff {
    let old = old_text.as_deref().unwrap_or_default();
    let new = new_text.as_deref().unwrap_or_default();
    let (kind_str, description) = match kind {
        DiffKind::Addition => ("addition", format!("Added: \"{new}\"")),
        DiffKind::Deletion => ("deletion", format!("Removed: \"{old}\"")),
        DiffKind::Modification => (
            "modification",
            format!("Changed \"{old}\" to \"{new}\""),
        ),
    };
    let pos = position.to_string();
    let id = short_id(DIFF_ID_PREFIX, &[kind_str, pos.as_str(), old, new]);

    PolicyDiff {
        id,
        kind,
        old_text,
        new_text,
        position,
        description,
    }
}

/// Edit script from `a` to `b`, in forward order.
fn lcs_ops(a: &[String], b: &[String], ignore_case: bool) -> Vec<Op> {
    let norm = |s: &String| {
        if ignore_case {
            s.to_lowercase()
        } else {
            s.clone()
        }
    };
    let na: Vec<String> = a.iter().map(norm).collect();
    let nb: Vec<String> = b.iter().map(norm).collect();

    let (m, n) = (na.len(), nb.len());
    let width = n + 1;
    let mut dp = vec![0u32; (m + 1) * width];
    for i in 1..=m {
        for j in 1..=n {
            dp[i * width + j] = if na[i - 1] == nb[j - 1] {
                dp[(i - 1) * width + (j - 1)] + 1
            } else {
                dp[(i - 1) * width + j].max(dp[i * width + (j - 1)])
            };
        }
    }

    let mut ops = Vec::with_capacity(m + n);
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && na[i - 1] == nb[j - 1] {
            ops.push(Op::Equal);
            i -= 1;
            j -= 1;
            continue;
        }
        let up = if i > 0 { Some(dp[(i - 1) * width + j]) } else { None };
        let left = if j > 0 { Some(dp[i * width + (j - 1)]) } else { None };
        let step_delete = match (up, left) {
            (Some(_), None) => true,
            (None, _) => false,
            (Some(u), Some(l)) if u != l => u > l,
            // Tie: step past the lexicographically greater segment so that swapping the
            // inputs mirrors the script exactly.
            (Some(_), Some(_)) => na[i - 1] > nb[j - 1],
        };
        if step_delete {
            ops.push(Op::Delete);
            i -= 1;
        } else {
            ops.push(Op::Insert);
            j -= 1;
        }
    }
    ops.reverse();
    ops
}

fn consolidate<'a>(ops: &[Op], a: &'a [String], b: &'a [String]) -> Vec<Run<'a>> {
    let mut runs: Vec<Run<'a>> = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    for &op in ops {
        let seg = match op {
            Op::Equal => {
                i += 1;
                j += 1;
                a[i - 1].as_str()
            }
            Op::Delete => {
                i += 1;
                a[i - 1].as_str()
            }
            Op::Insert => {
                j += 1;
                b[j - 1].as_str()
            }
        };
        match runs.last_mut() {
            Some(run) if run.op == op => run.segments.push(seg),
            _ => runs.push(Run {
                op,
                segments: vec![seg],
            }),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use policykit_types::Granularity;

    fn word_opts() -> DiffOptions {
        DiffOptions::with_granularity(Granularity::Word)
    }

    #[test]
    fn single_word_swap_is_one_deletion_and_one_addition() {
        let diffs = diff_policies("The cat sat.", "The dog sat.", &word_opts());
        assert_eq!(diffs.len(), 2);

        let deletion = diffs.iter().find(|d| d.kind == DiffKind::Deletion).expect("deletion");
        let addition = diffs.iter().find(|d| d.kind == DiffKind::Addition).expect("addition");
        assert_eq!(deletion.old_text.as_deref(), Some("cat"));
        assert_eq!(addition.new_text.as_deref(), Some("dog"));
        assert!(deletion.new_text.is_none());
        assert!(addition.old_text.is_none());
    }

    #[test]
    fn identical_and_empty_inputs_produce_nothing() {
        let opts = DiffOptions::default();
        assert!(diff_policies("", "", &opts).is_empty());
        assert!(diff_policies("Same text. Again.", "Same text. Again.", &opts).is_empty());
    }

    #[test]
    fn ignore_case_only_affects_comparison() {
        let mut opts = word_opts();
        assert_eq!(diff_policies("Students MAY", "students may", &opts).len(), 2);
        opts.ignore_case = true;
        assert!(diff_policies("Students MAY", "students may", &opts).is_empty());
    }

    #[test]
    fn position_counts_every_preceding_run() {
        let diffs = diff_policies("a b c d", "a c d e", &word_opts());
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[0].kind, DiffKind::Deletion);
        assert_eq!(diffs[0].old_text.as_deref(), Some("b"));
        assert_eq!(diffs[0].position, 1);
        assert_eq!(diffs[1].kind, DiffKind::Addition);
        assert_eq!(diffs[1].new_text.as_deref(), Some("e"));
        // a(1) + b(1) + c d(2)
        assert_eq!(diffs[1].position, 4);
    }

    #[test]
    fn sentence_runs_are_joined_with_sentence_separator() {
        let diffs = diff_policies(
            "Keep this. Old one. Old two. End.",
            "Keep this. End.",
            &DiffOptions::default(),
        );
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].old_text.as_deref(), Some("Old one. Old two"));
    }

    #[test]
    fn swapping_inputs_mirrors_the_script() {
        let a = "alpha beta gamma delta";
        let b = "beta alpha delta epsilon";
        let forward = diff_policies(a, b, &word_opts());
        let backward = diff_policies(b, a, &word_opts());
        assert_eq!(forward.len(), backward.len());
        for (f, r) in forward.iter().zip(&backward) {
            assert_eq!(f.position, r.position);
            assert_eq!(f.old_text, r.new_text);
            assert_eq!(f.new_text, r.old_text);
        }
    }

    #[test]
    fn pairing_turns_replace_into_modification() {
        let mut opts = word_opts();
        opts.pair_modifications = true;
        let diffs = diff_policies("The cat sat.", "The dog sat.", &opts);
        assert_eq!(diffs.len(), 1);
        let m = &diffs[0];
        assert_eq!(m.kind, DiffKind::Modification);
        assert_eq!(m.old_text.as_deref(), Some("cat"));
        assert_eq!(m.new_text.as_deref(), Some("dog"));
        assert_eq!(m.position, 1);
        assert!(m.id.starts_with(DIFF_ID_PREFIX));
    }

    #[test]
    fn summary_reports_similarity() {
        let (_, summary) = diff_with_summary("a b c d", "a b c e", &word_opts());
        assert_eq!(summary.segments_base, 4);
        assert_eq!(summary.unchanged, 3);
        assert_eq!(summary.additions, 1);
        assert_eq!(summary.deletions, 1);
        assert!((summary.similarity - 0.75).abs() < 1e-9);

        let (_, empty) = diff_with_summary("", "", &word_opts());
        assert_eq!(empty.similarity, 1.0);
    }

    #[test]
    fn ids_are_deterministic() {
        let a = diff_policies("x y", "x z", &word_opts());
        let b = diff_policies("x y", "x z", &word_opts());
        assert_eq!(a, b);
        assert_ne!(a[0].id, a[1].id);
    }
}
