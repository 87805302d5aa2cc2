//! Positional word differ: author-attributed tracked changes.
//!
//! Unlike the LCS differ this makes a single greedy two-pointer pass, which keeps it
//! linear and gives every change a structural address in the base document.

use crate::fingerprint::short_id;
use crate::position::PositionIndex;
use crate::token::{BREAK, join_for_change, positions, render_tokens, split_change_text, tokenize};
use policykit_types::ids::CHANGE_ID_PREFIX;
use policykit_types::{RedlineChange, RedlineKind, RedlinePosition};
use time::OffsetDateTime;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedlineOptions {
    /// Compare tokens case-insensitively. Inserted text keeps the new document's case.
    pub ignore_case: bool,
    /// Stamp for every generated change; `None` means now (UTC).
    pub timestamp: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, Default)]
pub struct PositionalWordDiffer {
    options: RedlineOptions,
}

/// Base-token run pending deletion and new-token run pending insertion.
#[derive(Default)]
struct Pending<'a> {
    delete_from: Option<usize>,
    delete: Vec<&'a str>,
    insert: Vec<&'a str>,
}

struct Emitter<'a> {
    author: &'a str,
    timestamp: OffsetDateTime,
    base_positions: &'a [RedlinePosition],
    base_end: RedlinePosition,
    changes: Vec<RedlineChange>,
}

impl<'a> Emitter<'a> {
    fn position_of(&self, base_index: usize) -> RedlinePosition {
        self.base_positions
            .get(base_index)
            .copied()
            .unwrap_or(self.base_end)
    }

    /// Deletes first, stamped at their first token; inserts at base token `next`, the
    /// one just after the deleted run.
    fn flush(&mut self, pending: &mut Pending<'_>, next: usize) {
        if let Some(from) = pending.delete_from.take() {
            let position = self.position_of(from);
            let words = pending.delete.iter().filter(|t| **t != BREAK).count();
            let comment = format!("Deletion of {words} word(s)");
            let text = join_for_change(&pending.delete);
            self.push(RedlineKind::Delete, text, position, comment);
            pending.delete.clear();
        }
        if !pending.insert.is_empty() {
            let position = self.position_of(next);
            self.push_insert(&pending.insert, position);
            pending.insert.clear();
        }
    }

    fn push_insert(&mut self, tokens: &[&str], position: RedlinePosition) {
        let text = join_for_change(tokens);
        let comment = format!("Addition: \"{}\"", render_tokens(tokens));
        self.push(RedlineKind::Insert, text, position, comment);
    }

    fn push(&mut self, kind: RedlineKind, text: String, position: RedlinePosition, comment: String) {
        let kind_str = match kind {
            RedlineKind::Insert => "insert",
            RedlineKind::Delete => "delete",
            RedlineKind::Format => "format",
        };
        let address = format!(
            "{}.{}.{}",
            position.paragraph, position.sentence, position.word
        );
        let id = short_id(CHANGE_ID_PREFIX, &[kind_str, address.as_str(), text.as_str()]);
        self.changes.push(RedlineChange {
            id,
            kind,
            text,
            position,
            author: self.author.to_string(),
            timestamp: self.timestamp,
            comment: Some(comment),
        });
    }
}

impl PositionalWordDiffer {
    pub fn new(options: RedlineOptions) -> Self {
        Self { options }
    }

    pub fn generate(&self, base: &str, new: &str, author: &str) -> Vec<RedlineChange> {
        let base_tokens: Vec<&str> = tokenize(base).iter().map(|t| t.text).collect();
        let new_tokens: Vec<&str> = tokenize(new).iter().map(|t| t.text).collect();
        let (base_positions, base_end) = positions(&base_tokens);

        let mut emitter = Emitter {
            author,
            timestamp: self.options.timestamp.unwrap_or_else(OffsetDateTime::now_utc),
            base_positions: &base_positions,
            base_end,
            changes: Vec::new(),
        };
        let mut pending = Pending::default();

        let (mut i, mut j) = (0usize, 0usize);
        while i < base_tokens.len() && j < new_tokens.len() {
            if self.same(base_tokens[i], new_tokens[j]) {
                emitter.flush(&mut pending, i);
            } else {
                pending.delete_from.get_or_insert(i);
                pending.delete.push(base_tokens[i]);
                pending.insert.push(new_tokens[j]);
            }
            i += 1;
            j += 1;
        }

        // Leftovers extend the pending runs.
        if i < base_tokens.len() {
            pending.delete_from.get_or_insert(i);
            pending.delete.extend_from_slice(&base_tokens[i..]);
        }
        if j < new_tokens.len() {
            pending.insert.extend_from_slice(&new_tokens[j..]);
        }
        emitter.flush(&mut pending, base_tokens.len());

        tracing::debug!(
            base_tokens = base_tokens.len(),
            new_tokens = new_tokens.len(),
            changes = emitter.changes.len(),
            "redline generated"
        );
        emitter.changes
    }

    fn same(&self, a: &str, b: &str) -> bool {
        if self.options.ignore_case {
            a.to_lowercase() == b.to_lowercase()
        } else {
            a == b
        }
    }
}

pub fn generate_redline_changes(
    base: &str,
    new: &str,
    author: &str,
    options: &RedlineOptions,
) -> Vec<RedlineChange> {
    PositionalWordDiffer::new(options.clone()).generate(base, new, author)
}

/// Apply tracked changes to `base` and return the revised text.
///
/// Changes are applied from the highest position down so earlier indices stay valid.
/// Positions that do not resolve against `base` are applied at the end. `format` changes
/// carry no text edit.
pub fn apply_redline_changes(base: &str, changes: &[RedlineChange]) -> String {
    let index = PositionIndex::build(base);
    let mut tokens: Vec<&str> = tokenize(base).iter().map(|t| t.text).collect();

    let mut ordered: Vec<&RedlineChange> = changes.iter().collect();
    ordered.sort_by(|a, b| b.position.cmp(&a.position));

    for change in ordered {
        let at = index
            .token_index(&change.position)
            .unwrap_or(tokens.len())
            .min(tokens.len());
        let run = split_change_text(&change.text);
        match change.kind {
            RedlineKind::Delete => {
                let end = (at + run.len()).min(tokens.len());
                tokens.drain(at..end);
            }
            RedlineKind::Insert => {
                tokens.splice(at..at, run);
            }
            RedlineKind::Format => {}
        }
    }

    render_tokens(&tokens)
}
