//! Value-per-weight ranking of items.
//!
//! Both the greedy solver and the branch-and-bound bound estimator walk
//! items in this order.

use crate::problem::Item;
use std::cmp::Ordering;

/// One ranked item: its density and position in the original item list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityEntry {
    pub density: f64,
    pub index: usize,
}

/// Ranks items by descending density.
///
/// Ties keep ascending original index, so the ranking is deterministic.
/// Weights must be positive (guaranteed by problem validation).
///
/// # Complexity
/// O(n log n)
pub fn rank_by_density(items: &[Item]) -> Vec<DensityEntry> {
    let mut ranking: Vec<DensityEntry> = items
        .iter()
        .enumerate()
        .map(|(index, item)| DensityEntry {
            density: item.density(),
            index,
        })
        .collect();
    ranking.sort_by(|a, b| {
        b.density
            .partial_cmp(&a.density)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    ranking
}
