//! Greedy solver for the fractional (continuous) knapsack.
//!
//! Takes whole items in descending density order and splits the first item
//! that does not fit. Optimal for the continuous relaxation, and therefore
//! an upper bound on every 0-1 solution of the same instance.
//!
//! # Complexity
//! O(n log n) for the ranking, O(n) for the walk.

use crate::density::rank_by_density;
use crate::error::Result;
use crate::problem::{Allocation, KnapsackProblem, Solution};
use log::debug;

/// Result of a greedy run.
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyResult {
    /// Fraction in `[0, 1]` taken of each item, indexed like the input.
    pub fractions: Vec<f64>,

    /// Total value of the allocation.
    pub value: f64,

    /// Total weight of the allocation.
    pub weight: f64,

    /// Item taken partially, if the walk ended on a split.
    ///
    /// `None` when every item fit whole or the capacity was used up exactly.
    pub split_item: Option<usize>,
}

impl From<GreedyResult> for Solution {
    fn from(result: GreedyResult) -> Self {
        Solution {
            allocation: Allocation::Fractional(result.fractions),
            value: result.value,
            weight: result.weight,
        }
    }
}

/// Fractional greedy solver.
pub struct GreedySolver;

impl GreedySolver {
    /// Solves the continuous relaxation of `problem`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::{greedy::GreedySolver, KnapsackProblem};
    ///
    /// let problem = KnapsackProblem::from_pairs(&[(10.0, 60.0), (20.0, 100.0), (30.0, 120.0)], 50.0).unwrap();
    /// let result = GreedySolver::solve(&problem).unwrap();
    /// assert_eq!(result.value, 240.0);
    /// assert_eq!(result.split_item, Some(2));
    /// ```
    pub fn solve(problem: &KnapsackProblem) -> Result<GreedyResult> {
        problem.validate()?;

        let items = problem.items();
        let mut fractions = vec![0.0; items.len()];
        let mut remaining = problem.capacity();
        let mut value = 0.0;
        let mut split_item = None;

        for entry in rank_by_density(items) {
            let item = items[entry.index];
            if item.weight <= remaining {
                fractions[entry.index] = 1.0;
                value += item.value;
                remaining -= item.weight;
            } else {
                if remaining > 0.0 {
                    let fraction = remaining / item.weight;
                    fractions[entry.index] = fraction;
                    value += fraction * item.value;
                    remaining = 0.0;
                    split_item = Some(entry.index);
                }
                break;
            }
        }

        let weight = problem.capacity() - remaining;
        debug!(
            "greedy: value {value:.4}, weight {weight:.4}/{:.4}, split {split_item:?}",
            problem.capacity()
        );

        Ok(GreedyResult {
            fractions,
            value,
            weight,
            split_item,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> KnapsackProblem {
        KnapsackProblem::from_pairs(
            &[
                (10.0, 20.0),
                (20.0, 30.0),
                (30.0, 66.0),
                (40.0, 40.0),
                (50.0, 70.0),
            ],
            100.0,
        )
        .unwrap()
    }

    #[test]
    fn test_splits_last_item() {
        let result = GreedySolver::solve(&scenario()).unwrap();
        // Ranking 2, 0, 1, 4, 3: items 2, 0, 1 fill 60, then 40/50 of item 4.
        assert_eq!(result.fractions, vec![1.0, 1.0, 1.0, 0.0, 0.8]);
        assert!((result.value - 172.0).abs() < 1e-9);
        assert_eq!(result.split_item, Some(4));
        assert!((result.weight - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_everything_fits() {
        let p = KnapsackProblem::from_pairs(&[(1.0, 5.0), (2.0, 1.0)], 10.0).unwrap();
        let result = GreedySolver::solve(&p).unwrap();
        assert_eq!(result.fractions, vec![1.0, 1.0]);
        assert_eq!(result.value, 6.0);
        assert_eq!(result.weight, 3.0);
        assert_eq!(result.split_item, None);
    }

    #[test]
    fn test_exact_fill_has_no_split() {
        let p = KnapsackProblem::from_pairs(&[(5.0, 10.0), (5.0, 5.0), (5.0, 1.0)], 10.0).unwrap();
        let result = GreedySolver::solve(&p).unwrap();
        assert_eq!(result.fractions, vec![1.0, 1.0, 0.0]);
        assert_eq!(result.split_item, None);
    }

    #[test]
    fn test_single_overweight_item() {
        let p = KnapsackProblem::from_pairs(&[(10.0, 7.0)], 4.0).unwrap();
        let result = GreedySolver::solve(&p).unwrap();
        assert!((result.fractions[0] - 0.4).abs() < 1e-12);
        assert!((result.value - 2.8).abs() < 1e-12);
    }

    #[test]
    fn test_zero_capacity_and_empty() {
        let p = KnapsackProblem::from_pairs(&[(10.0, 7.0), (1.0, 1.0)], 0.0).unwrap();
        let result = GreedySolver::solve(&p).unwrap();
        assert_eq!(result.fractions, vec![0.0, 0.0]);
        assert_eq!(result.value, 0.0);
        assert_eq!(result.split_item, None);

        let p = KnapsackProblem::new(vec![], 5.0).unwrap();
        let result = GreedySolver::solve(&p).unwrap();
        assert!(result.fractions.is_empty());
        assert_eq!(result.value, 0.0);
    }

    #[test]
    fn test_bounded_by_value_sum() {
        let p = scenario();
        let result = GreedySolver::solve(&p).unwrap();
        assert!(result.value <= p.value_sum());
        assert!(result.fractions.iter().all(|&f| (0.0..=1.0).contains(&f)));
    }
}
