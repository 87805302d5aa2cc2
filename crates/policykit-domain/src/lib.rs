//! Pure clause selection (no IO).
//!
//! Input: a `Corpus` built elsewhere plus a `ClauseSelectionInput`.
//! Output: an ordered, dependency-resolved, conflict-free list of `SelectedClause`.
//!
//! The pipeline is filter -> score -> rank -> resolve -> overrides -> emit. Every stage is
//! deterministic and none of them can fail: unknown enum values and unknown ids degrade
//! to "no match" instead of producing errors.

#![forbid(unsafe_code)]

pub mod filter;
pub mod score;

mod engine;
mod reason;
mod resolve;

pub use engine::{ClauseSelector, Selection, select_clauses};
pub use score::ClauseScore;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
