//! Search-tree nodes.

use crate::density::DensityEntry;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// A partial decision state in the branch-and-bound tree.
///
/// Only the decisions (one per ranked item, in rank order) are stored; the
/// item-indexed inclusion vector is built on demand for terminal and
/// incumbent states.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub decisions: Vec<bool>,
    pub weight: f64,
    pub value: f64,
    pub optimistic: f64,
}

impl SearchNode {
    pub fn root(optimistic: f64) -> Self {
        Self {
            decisions: Vec::new(),
            weight: 0.0,
            value: 0.0,
            optimistic,
        }
    }

    /// Number of ranks decided so far; also the rank decided next.
    pub fn depth(&self) -> usize {
        self.decisions.len()
    }

    /// Rank of the last decided item, `None` at the root.
    pub fn decision_index(&self) -> Option<usize> {
        self.depth().checked_sub(1)
    }

    /// Item-indexed inclusion vector for the decided prefix.
    pub fn inclusion(&self, ranking: &[DensityEntry]) -> Vec<bool> {
        let mut included = vec![false; ranking.len()];
        for (entry, &taken) in ranking.iter().zip(&self.decisions) {
            included[entry.index] = taken;
        }
        included
    }
}

// Heap order: larger optimistic bound first, deeper node on ties.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.optimistic)
            .cmp(&OrderedFloat(other.optimistic))
            .then_with(|| self.depth().cmp(&other.depth()))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}
