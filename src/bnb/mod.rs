//! Best-first branch-and-bound for the 0-1 knapsack.
//!
//! Items are decided in descending density order. Each node carries the
//! decisions made so far and an optimistic bound (continuous relaxation of
//! the remaining items); nodes are expanded highest bound first from a
//! max-priority queue.
//!
//! Pruning relies on the bounds from [`BoundEstimator`]:
//!
//! - the incumbent starts as the root's pessimistic completion;
//! - a child is only queued if its optimistic bound beats the incumbent;
//! - a queued exclude child raises the incumbent to its pessimistic
//!   completion when that is better;
//! - when the best queued bound no longer beats the incumbent the whole
//!   search stops.
//!
//! The worst case still explores all `2^n` leaves; the number of expanded
//! nodes is reported in [`BnbResult::nodes_visited`]. Deadlines are left to
//! the caller via [`BnbRunner::run_with_cancel`].
//!
//! # References
//!
//! - Horowitz & Sahni (1974), "Computing Partitions with Applications to the
//!   Knapsack Problem"
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer
//!   Implementations*, ch. 2

mod bound;
mod node;
mod runner;

pub use bound::{BoundEstimator, Bounds};
pub use runner::{BnbResult, BnbRunner};
