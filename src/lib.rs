//! Knapsack solvers for correctness and performance comparison.
//!
//! Four strategies over one item/capacity model:
//!
//! - **Greedy**: fractional relaxation by descending value density; the
//!   comparison baseline and the building block of the bounds.
//! - **Dynamic Programming**: exact 0-1 tabulation for integral weights,
//!   O(n·M) time and memory with an explicit table budget.
//! - **Branch and Bound**: exact best-first search pruned by optimistic and
//!   pessimistic bounds.
//! - **Genetic**: population heuristic with repair, quartile-band
//!   selection and sliding-window stagnation.
//!
//! All solvers are synchronous and own their working state; the genetic
//! solver takes its random source as an argument (see [`random`]).
//!
//! # Architecture
//!
//! [`problem`] holds the validated instance, [`density`] the ranking shared
//! by [`greedy`] and [`bnb`]. [`solver::Algorithm`] selects a strategy at
//! runtime. [`instance`] is the text/generator boundary and is never used by
//! the solvers themselves.

pub mod bnb;
pub mod density;
pub mod dp;
pub mod error;
pub mod genetic;
pub mod greedy;
pub mod instance;
pub mod problem;
pub mod random;
pub mod solver;

pub use error::{KnapsackError, Result};
pub use problem::{Allocation, Item, KnapsackProblem, Solution};
pub use solver::Algorithm;
