//! Best-first search loop.

use super::bound::BoundEstimator;
use super::node::SearchNode;
use crate::density::{rank_by_density, DensityEntry};
use crate::error::Result;
use crate::problem::{Allocation, KnapsackProblem, Solution};
use log::{debug, trace};
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a branch-and-bound run.
#[derive(Debug, Clone, PartialEq)]
pub struct BnbResult {
    /// Whether each item is packed.
    pub included: Vec<bool>,

    /// Value of the packed items.
    pub value: f64,

    /// Total weight of the packed items.
    pub weight: f64,

    /// Number of nodes popped from the queue and expanded.
    pub nodes_visited: u64,

    /// Largest queue length observed during the search.
    pub max_queue_len: usize,

    /// Whether the search ran to completion, proving `value` optimal.
    pub proven_optimal: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl From<BnbResult> for Solution {
    fn from(result: BnbResult) -> Self {
        Solution {
            allocation: Allocation::Binary(result.included),
            value: result.value,
            weight: result.weight,
        }
    }
}

/// Best feasible solution known so far.
struct Incumbent {
    value: f64,
    included: Vec<bool>,
}

/// Executes the branch-and-bound search.
///
/// # Usage
///
/// ```
/// use u_knapsack::{bnb::BnbRunner, KnapsackProblem};
///
/// let problem = KnapsackProblem::from_pairs(
///     &[(10.0, 20.0), (20.0, 30.0), (30.0, 66.0), (40.0, 40.0), (50.0, 70.0)],
///     100.0,
/// ).unwrap();
/// let result = BnbRunner::run(&problem).unwrap();
/// assert_eq!(result.value, 166.0);
/// assert!(result.proven_optimal);
/// ```
pub struct BnbRunner;

impl BnbRunner {
    /// Runs the search to completion.
    pub fn run(problem: &KnapsackProblem) -> Result<BnbResult> {
        Self::run_with_cancel(problem, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is checked before each node expansion. A cancelled run
    /// returns the incumbent with `proven_optimal = false`.
    pub fn run_with_cancel(
        problem: &KnapsackProblem,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BnbResult> {
        problem.validate()?;

        let items = problem.items();
        let n = items.len();
        let capacity = problem.capacity();

        if n == 0 {
            return Ok(BnbResult {
                included: Vec::new(),
                value: 0.0,
                weight: 0.0,
                nodes_visited: 0,
                max_queue_len: 0,
                proven_optimal: true,
                cancelled: false,
            });
        }

        let ranking = rank_by_density(items);
        let estimator = BoundEstimator::new(items, &ranking, capacity);

        // Root: nothing decided; its pessimistic completion seeds the incumbent.
        let mut included = vec![false; n];
        let bounds = estimator.complete_pessimistic(0, 0.0, 0.0, &mut included);
        let mut incumbent = Incumbent {
            value: bounds.pessimistic,
            included,
        };

        let mut queue = BinaryHeap::new();
        queue.push(SearchNode::root(bounds.optimistic));

        let mut nodes_visited = 0u64;
        let mut max_queue_len = 1usize;
        let mut cancelled = false;

        while let Some(node) = queue.pop() {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Global cutoff: the queue is ordered by bound, nothing left can improve.
            if node.optimistic <= incumbent.value {
                break;
            }
            nodes_visited += 1;

            let rank = node.depth();
            let item = items[ranking[rank].index];
            let terminal = rank == n - 1;
            trace!(
                "expand after rank {:?}: bound {:.4}, value {:.4}, incumbent {:.4}",
                node.decision_index(),
                node.optimistic,
                node.value,
                incumbent.value
            );

            // Include the item; the relaxation ceiling is unchanged.
            if node.weight + item.weight <= capacity {
                let mut decisions = node.decisions.clone();
                decisions.push(true);
                let child = SearchNode {
                    decisions,
                    weight: node.weight + item.weight,
                    value: node.value + item.value,
                    optimistic: node.optimistic,
                };
                if terminal {
                    if child.value > incumbent.value {
                        incumbent = Incumbent {
                            value: child.value,
                            included: child.inclusion(&ranking),
                        };
                        trace!("leaf incumbent {:.4}", incumbent.value);
                    }
                } else if child.optimistic > incumbent.value {
                    queue.push(child);
                }
            }

            // Exclude the item; the state changes, so re-estimate.
            let mut child = node;
            child.decisions.push(false);
            if terminal {
                if child.value > incumbent.value {
                    incumbent = Incumbent {
                        value: child.value,
                        included: child.inclusion(&ranking),
                    };
                    trace!("leaf incumbent {:.4}", incumbent.value);
                }
            } else {
                let bounds = estimator.estimate(rank + 1, child.weight, child.value);
                debug_assert!(
                    bounds.optimistic + 1e-9 >= bounds.pessimistic
                        && bounds.pessimistic + 1e-9 >= child.value,
                    "inadmissible bounds {bounds:?} for value {}",
                    child.value
                );
                child.optimistic = bounds.optimistic;
                if child.optimistic > incumbent.value {
                    if bounds.pessimistic > incumbent.value {
                        incumbent = pessimistic_incumbent(&estimator, &ranking, &child);
                        trace!("pessimistic incumbent {:.4}", incumbent.value);
                    }
                    queue.push(child);
                }
            }

            max_queue_len = max_queue_len.max(queue.len());
        }

        let weight = problem.total_weight(&incumbent.included);
        debug!(
            "branch and bound: value {:.4}, weight {weight:.4}/{capacity:.4}, {nodes_visited} nodes, \
             max queue {max_queue_len}{}",
            incumbent.value,
            if cancelled { ", cancelled" } else { "" }
        );

        Ok(BnbResult {
            included: incumbent.included,
            value: incumbent.value,
            weight,
            nodes_visited,
            max_queue_len,
            proven_optimal: !cancelled,
            cancelled,
        })
    }
}

/// Materializes the pessimistic completion of `node` as a full solution.
fn pessimistic_incumbent(
    estimator: &BoundEstimator<'_>,
    ranking: &[DensityEntry],
    node: &SearchNode,
) -> Incumbent {
    let mut included = node.inclusion(ranking);
    let bounds = estimator.complete_pessimistic(node.depth(), node.weight, node.value, &mut included);
    Incumbent {
        value: bounds.pessimistic,
        included,
    }
}
