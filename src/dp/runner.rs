//! Table construction and solution reconstruction.

use super::config::DpConfig;
use crate::error::{KnapsackError, Result};
use crate::problem::{Allocation, KnapsackProblem, Solution};
use log::debug;

/// Result of a dynamic-programming run.
#[derive(Debug, Clone, PartialEq)]
pub struct DpResult {
    /// Whether each item is packed.
    pub included: Vec<bool>,

    /// Optimal value, `value[n][M]`.
    pub value: f64,

    /// Total weight of the packed items.
    pub weight: f64,

    /// Number of cells in the table that was built.
    pub table_cells: usize,
}

impl From<DpResult> for Solution {
    fn from(result: DpResult) -> Self {
        Solution {
            allocation: Allocation::Binary(result.included),
            value: result.value,
            weight: result.weight,
        }
    }
}

/// Executes the dynamic-programming solver.
pub struct DpRunner;

impl DpRunner {
    /// Solves `problem` exactly.
    ///
    /// # Errors
    ///
    /// - [`KnapsackError::InvalidInput`] for a malformed instance
    /// - [`KnapsackError::TypeMismatch`] when a weight or the capacity is not
    ///   an integer
    /// - [`KnapsackError::ResourceLimit`] when the table exceeds
    ///   [`DpConfig::max_table_cells`]
    pub fn run(problem: &KnapsackProblem, config: &DpConfig) -> Result<DpResult> {
        problem.validate()?;
        config.validate()?;
        let (weights, capacity) = problem.integral_weights()?;
        let n = weights.len();

        let required = (n as u128 + 1) * (capacity as u128 + 1);
        if required > config.max_table_cells as u128 {
            return Err(KnapsackError::ResourceLimit {
                required,
                limit: config.max_table_cells as u128,
            });
        }

        let table = Table::build(problem, &weights, capacity);

        let mut included = vec![false; n];
        let mut w = capacity;
        for i in (1..=n).rev() {
            if table.get(i, w) != table.get(i - 1, w) {
                included[i - 1] = true;
                w -= weights[i - 1];
            }
        }

        let value = table.get(n, capacity);
        let weight = problem.total_weight(&included);
        debug!(
            "dp: value {value:.4}, weight {weight}/{capacity}, {} cells",
            table.cells.len()
        );

        Ok(DpResult {
            included,
            value,
            weight,
            table_cells: table.cells.len(),
        })
    }
}

/// Row-major `(n + 1) x (capacity + 1)` value table.
struct Table {
    cells: Vec<f64>,
    width: usize,
}

impl Table {
    fn build(problem: &KnapsackProblem, weights: &[usize], capacity: usize) -> Self {
        let width = capacity + 1;
        let n = weights.len();
        let mut cells = vec![0.0f64; (n + 1) * width];

        for i in 1..=n {
            let weight = weights[i - 1];
            let value = problem.items()[i - 1].value;
            let (prev, cur) = cells.split_at_mut(i * width);
            let prev = &prev[(i - 1) * width..];
            let cur = &mut cur[..width];
            for w in 0..width {
                cur[w] = if weight > w {
                    prev[w]
                } else {
                    prev[w].max(prev[w - weight] + value)
                };
            }
        }

        Self { cells, width }
    }

    fn get(&self, i: usize, w: usize) -> f64 {
        self.cells[i * self.width + w]
    }
}
