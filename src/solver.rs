//! One entry point over the four strategies.
//!
//! [`Algorithm`] tags the strategy together with its configuration, so a
//! caller comparing solvers holds a list of variants instead of four
//! differently named functions.

use crate::bnb::BnbRunner;
use crate::dp::{DpConfig, DpRunner};
use crate::error::Result;
use crate::genetic::{GeneticConfig, GeneticRunner};
use crate::greedy::GreedySolver;
use crate::problem::{KnapsackProblem, Solution};
use rand::Rng;

/// A knapsack strategy and its configuration.
///
/// # Examples
///
/// ```
/// use u_knapsack::{Algorithm, KnapsackProblem};
/// use u_knapsack::random::create_rng;
///
/// let problem = KnapsackProblem::from_pairs(
///     &[(10.0, 20.0), (20.0, 30.0), (30.0, 66.0), (40.0, 40.0), (50.0, 70.0)],
///     100.0,
/// ).unwrap();
/// let mut rng = create_rng(1);
/// for algorithm in [Algorithm::dynamic_programming(), Algorithm::BranchAndBound] {
///     assert_eq!(algorithm.solve(&problem, &mut rng).unwrap().value, 166.0);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Fractional greedy relaxation.
    Greedy,
    /// Exact tabulation; integral instances only.
    DynamicProgramming(DpConfig),
    /// Exact best-first search.
    BranchAndBound,
    /// Population heuristic.
    Genetic(GeneticConfig),
}

impl Algorithm {
    /// Dynamic programming with the default table budget.
    pub fn dynamic_programming() -> Self {
        Algorithm::DynamicProgramming(DpConfig::default())
    }

    /// Genetic solver with the default configuration.
    pub fn genetic() -> Self {
        Algorithm::Genetic(GeneticConfig::default())
    }

    /// Short name for reports.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Greedy => "greedy",
            Algorithm::DynamicProgramming(_) => "dynamic-programming",
            Algorithm::BranchAndBound => "branch-and-bound",
            Algorithm::Genetic(_) => "genetic",
        }
    }

    /// Whether the strategy returns a proven optimal 0-1 solution.
    pub fn is_exact(&self) -> bool {
        matches!(
            self,
            Algorithm::DynamicProgramming(_) | Algorithm::BranchAndBound
        )
    }

    /// Solves `problem`.
    ///
    /// Only the genetic strategy draws from `rng`; the others ignore it.
    pub fn solve<R: Rng>(&self, problem: &KnapsackProblem, rng: &mut R) -> Result<Solution> {
        match self {
            Algorithm::Greedy => GreedySolver::solve(problem).map(Solution::from),
            Algorithm::DynamicProgramming(config) => {
                DpRunner::run(problem, config).map(Solution::from)
            }
            Algorithm::BranchAndBound => BnbRunner::run(problem).map(Solution::from),
            Algorithm::Genetic(config) => {
                GeneticRunner::run(problem, config, rng).map(Solution::from)
            }
        }
    }
}
