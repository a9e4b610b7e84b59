//! Genetic solver for the 0-1 knapsack.
//!
//! A heuristic: fast on large instances, never guaranteed optimal.
//! Chromosomes are boolean gene vectors (one gene per item); overweight
//! chromosomes are repaired by clearing genes from a random offset, and
//! fitness is the repaired value.
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: population, operator rates, window, thresholds
//! - [`GeneticRunner`]: executes the evolutionary loop
//! - [`GeneticResult`]: best-ever solution plus per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: quartile-band selection, single-point crossover,
//!   batch bit-flip mutation
//!
//! The random source is always passed in by the caller; a seed replays a
//! run exactly.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Chu & Beasley (1998), "A Genetic Algorithm for the Multidimensional
//!   Knapsack Problem"

mod config;
pub mod operators;
mod runner;
mod types;
mod window;

pub use config::GeneticConfig;
pub use runner::{GeneticResult, GeneticRunner};
pub use types::Chromosome;
pub use window::GenerationStats;
