//! Optimistic and pessimistic value bounds for a partial decision state.
//!
//! A state has decided the first `next` ranked items and carries their
//! accumulated weight and value. One pass over the remaining ranks yields
//! both bounds:
//!
//! - **optimistic**: greedy continuous relaxation, whole items while they
//!   fit, then the fractional part of the first one that does not;
//! - **pessimistic**: the same walk, except items that do not fit are
//!   skipped and later (lighter) ones are still tried, giving a concrete
//!   feasible completion.
//!
//! `optimistic >= best reachable >= pessimistic >= accumulated` holds for
//! every state; branch-and-bound pruning is only sound under it.

use crate::density::DensityEntry;
use crate::problem::Item;

/// Both bounds of one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub optimistic: f64,
    pub pessimistic: f64,
}

/// Computes bounds over a fixed density ranking.
#[derive(Debug, Clone, Copy)]
pub struct BoundEstimator<'a> {
    items: &'a [Item],
    ranking: &'a [DensityEntry],
    capacity: f64,
}

impl<'a> BoundEstimator<'a> {
    /// `ranking` must be the density ranking of `items`.
    pub fn new(items: &'a [Item], ranking: &'a [DensityEntry], capacity: f64) -> Self {
        debug_assert_eq!(items.len(), ranking.len());
        Self {
            items,
            ranking,
            capacity,
        }
    }

    /// Bounds for a state that decided ranks `0..next`.
    ///
    /// # Complexity
    /// O(n - next)
    pub fn estimate(&self, next: usize, weight: f64, value: f64) -> Bounds {
        self.walk(next, weight, value, |_| {})
    }

    /// Marks in `included` (indexed by item) the items the pessimistic walk
    /// adds from rank `next` on, and returns the bounds.
    ///
    /// The completion's value equals the returned pessimistic bound.
    pub fn complete_pessimistic(
        &self,
        next: usize,
        weight: f64,
        value: f64,
        included: &mut [bool],
    ) -> Bounds {
        self.walk(next, weight, value, |index| included[index] = true)
    }

    fn walk(&self, next: usize, weight: f64, value: f64, mut take: impl FnMut(usize)) -> Bounds {
        let n = self.ranking.len();
        let mut room = self.capacity - weight;
        let mut optimistic = value;
        let mut pessimistic = value;

        let mut rank = next;
        while rank < n {
            let index = self.ranking[rank].index;
            let item = self.items[index];
            if item.weight > room {
                break;
            }
            room -= item.weight;
            optimistic += item.value;
            pessimistic += item.value;
            take(index);
            rank += 1;
        }

        if rank < n {
            let blocked = self.items[self.ranking[rank].index];
            optimistic += room / blocked.weight * blocked.value;

            for entry in &self.ranking[rank + 1..] {
                if room <= 0.0 {
                    break;
                }
                let item = self.items[entry.index];
                if item.weight <= room {
                    room -= item.weight;
                    pessimistic += item.value;
                    take(entry.index);
                }
            }
        }

        Bounds {
            optimistic,
            pessimistic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::rank_by_density;
    use proptest::prelude::*;

    fn scenario() -> Vec<Item> {
        vec![
            Item::new(10.0, 20.0),
            Item::new(20.0, 30.0),
            Item::new(30.0, 66.0),
            Item::new(40.0, 40.0),
            Item::new(50.0, 70.0),
        ]
    }

    #[test]
    fn test_root_bounds() {
        let items = scenario();
        let ranking = rank_by_density(&items);
        let est = BoundEstimator::new(&items, &ranking, 100.0);
        let b = est.estimate(0, 0.0, 0.0);
        // Whole: 66 + 20 + 30 (w 60), then 40/50 of 70 = 56.
        assert!((b.optimistic - 172.0).abs() < 1e-9);
        // Skip item 4 (w 50), item 3 (w 40) fits exactly.
        assert!((b.pessimistic - 156.0).abs() < 1e-9);
    }

    #[test]
    fn test_completion_matches_pessimistic() {
        let items = scenario();
        let ranking = rank_by_density(&items);
        let est = BoundEstimator::new(&items, &ranking, 100.0);
        let mut included = vec![false; items.len()];
        let b = est.complete_pessimistic(0, 0.0, 0.0, &mut included);
        assert_eq!(included, vec![true, true, true, true, false]);
        let v: f64 = items
            .iter()
            .zip(&included)
            .filter(|(_, &inc)| inc)
            .map(|(it, _)| it.value)
            .sum();
        assert!((v - b.pessimistic).abs() < 1e-9);
    }

    #[test]
    fn test_no_room_left() {
        let items = scenario();
        let ranking = rank_by_density(&items);
        let est = BoundEstimator::new(&items, &ranking, 100.0);
        let b = est.estimate(2, 100.0, 90.0);
        assert_eq!(b.optimistic, 90.0);
        assert_eq!(b.pessimistic, 90.0);
    }

    #[test]
    fn test_all_decided() {
        let items = scenario();
        let ranking = rank_by_density(&items);
        let est = BoundEstimator::new(&items, &ranking, 100.0);
        let b = est.estimate(items.len(), 40.0, 50.0);
        assert_eq!(b.optimistic, 50.0);
        assert_eq!(b.pessimistic, 50.0);
    }

    /// Best value reachable by any 0-1 completion of ranks `next..`.
    fn best_completion(
        items: &[Item],
        ranking: &[DensityEntry],
        next: usize,
        room: f64,
    ) -> f64 {
        let rest: Vec<Item> = ranking[next..].iter().map(|e| items[e.index]).collect();
        let mut best: f64 = 0.0;
        for mask in 0u32..(1 << rest.len()) {
            let (w, v) = rest
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .fold((0.0, 0.0), |(w, v), (_, it)| (w + it.weight, v + it.value));
            if w <= room {
                best = best.max(v);
            }
        }
        best
    }

    proptest! {
        #[test]
        fn prop_bounds_are_admissible(
            pairs in prop::collection::vec((1u32..40, 0u32..60), 1..10),
            capacity in 0u32..150,
            prefix in prop::collection::vec(any::<bool>(), 0..10),
        ) {
            let items: Vec<Item> = pairs
                .iter()
                .map(|&(w, v)| Item::new(w as f64, v as f64))
                .collect();
            let ranking = rank_by_density(&items);
            let capacity = capacity as f64;
            let est = BoundEstimator::new(&items, &ranking, capacity);

            // Replay a feasible decision prefix.
            let mut weight = 0.0;
            let mut value = 0.0;
            let mut next = 0;
            for (&take, entry) in prefix.iter().zip(&ranking) {
                let item = items[entry.index];
                if take && weight + item.weight <= capacity {
                    weight += item.weight;
                    value += item.value;
                }
                next += 1;
            }

            let b = est.estimate(next, weight, value);
            let reachable = value + best_completion(&items, &ranking, next, capacity - weight);
            prop_assert!(b.optimistic + 1e-9 >= reachable);
            prop_assert!(reachable + 1e-9 >= b.pessimistic);
            prop_assert!(b.pessimistic + 1e-9 >= value);
        }
    }
}
