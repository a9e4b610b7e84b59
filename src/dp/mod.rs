//! Dynamic-programming solver for the 0-1 knapsack.
//!
//! Exact for integral weights and capacity. Builds the classic
//! `value[i][w]` table (best value using the first `i` items within weight
//! `w`) and walks it backwards to recover the chosen items.
//!
//! # Scalability
//!
//! Time and memory are both O(n·M) where `M` is the capacity, so large
//! capacities make this solver impractical regardless of item count. The
//! table size is checked against [`DpConfig::max_table_cells`] before
//! anything is allocated and rejected with
//! [`KnapsackError::ResourceLimit`](crate::KnapsackError::ResourceLimit).
//!
//! # References
//!
//! - Bellman (1957), *Dynamic Programming*
//! - Kellerer, Pferschy & Pisinger (2004), *Knapsack Problems*, ch. 2

mod config;
mod runner;

pub use config::DpConfig;
pub use runner::{DpResult, DpRunner};
