//! Genetic evolutionary loop.
//!
//! [`GeneticRunner`] drives: initialization → repair/evaluation →
//! selection → crossover → mutation → replacement → repeat, until the
//! generation cap or stagnation.

use super::config::GeneticConfig;
use super::operators::{crossover, mutate, select};
use super::types::Chromosome;
use super::window::{GenerationStats, StagnationWindow};
use crate::error::Result;
use crate::problem::{Allocation, KnapsackProblem, Solution};
use log::{debug, trace};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a genetic run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneticResult {
    /// Best chromosome's genes over the whole run.
    pub included: Vec<bool>,

    /// Value of `included`.
    pub value: f64,

    /// Total weight of `included`.
    pub weight: f64,

    /// Number of generations bred after the initial population.
    pub generations: usize,

    /// Whether the run stopped on stagnation rather than the cap.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best and mean fitness per generation, initial population first.
    pub history: Vec<GenerationStats>,
}

impl From<GeneticResult> for Solution {
    fn from(result: GeneticResult) -> Self {
        Solution {
            allocation: Allocation::Binary(result.included),
            value: result.value,
            weight: result.weight,
        }
    }
}

/// Executes the genetic solver.
///
/// # Usage
///
/// ```
/// use u_knapsack::genetic::{GeneticConfig, GeneticRunner};
/// use u_knapsack::random::create_rng;
/// use u_knapsack::KnapsackProblem;
///
/// let problem = KnapsackProblem::from_pairs(&[(2.0, 3.0), (3.0, 4.0), (4.0, 5.0)], 5.0).unwrap();
/// let mut rng = create_rng(42);
/// let result = GeneticRunner::run(&problem, &GeneticConfig::fast(), &mut rng).unwrap();
/// assert!(result.weight <= 5.0);
/// ```
pub struct GeneticRunner;

impl GeneticRunner {
    /// Runs the genetic solver with the caller's random source.
    pub fn run<R: Rng>(
        problem: &KnapsackProblem,
        config: &GeneticConfig,
        rng: &mut R,
    ) -> Result<GeneticResult> {
        Self::run_with_cancel(problem, config, rng, None)
    }

    /// Runs the genetic solver with an optional cancellation token.
    ///
    /// The flag is checked before each generation; a cancelled run returns
    /// the best chromosome found so far.
    pub fn run_with_cancel<R: Rng>(
        problem: &KnapsackProblem,
        config: &GeneticConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GeneticResult> {
        problem.validate()?;
        config.validate()?;

        let n = problem.len();

        // 1. Initialize and evaluate
        let mut population: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::random(n, rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel, rng);

        // 2. Track best-ever and the stagnation window
        let mut best = find_best(&population).clone();
        let first = generation_stats(0, &population);
        let mut history = Vec::with_capacity(config.max_generations + 1);
        history.push(first);
        let mut window = StagnationWindow::new(config.window_size);
        window.push(first);

        let mut generations = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;

        // 3. Evolutionary loop
        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if generations >= config.max_generations {
                break;
            }
            if generations >= config.window_size && window.is_stagnant() {
                stagnated = true;
                break;
            }

            let mut pool = select(&population, config, rng);
            crossover(&mut pool, config.crossover_probability, rng);
            mutate(
                &mut pool,
                config.mutation_probability,
                config.mutation_fraction,
                rng,
            );
            evaluate_population(problem, &mut pool, config.parallel, rng);
            population = pool;
            generations += 1;

            let gen_best = find_best(&population);
            if gen_best.fitness > best.fitness {
                best = gen_best.clone();
            }

            let stats = generation_stats(generations, &population);
            trace!(
                "generation {generations}: best {:.4}, mean {:.4}, best ever {:.4}",
                stats.best,
                stats.mean,
                best.fitness
            );
            history.push(stats);
            window.push(stats);
        }

        let weight = problem.total_weight(&best.genes);
        debug!(
            "genetic: value {:.4}, weight {weight:.4}/{:.4}, {generations} generations{}",
            best.fitness,
            problem.capacity(),
            if stagnated {
                ", stagnated"
            } else if cancelled {
                ", cancelled"
            } else {
                ""
            }
        );

        Ok(GeneticResult {
            included: best.genes,
            value: best.fitness,
            weight,
            generations,
            stagnated,
            cancelled,
            history,
        })
    }
}

/// Repairs and scores every chromosome.
///
/// Repair offsets are drawn up front in population order, so the parallel
/// and sequential paths consume the random stream identically.
fn evaluate_population<R: Rng>(
    problem: &KnapsackProblem,
    population: &mut [Chromosome],
    parallel: bool,
    rng: &mut R,
) {
    let n = problem.len();
    let offsets: Vec<usize> = population
        .iter()
        .map(|_| if n == 0 { 0 } else { rng.random_range(0..n) })
        .collect();

    repair_all(problem, population, &offsets, parallel);
}

#[cfg(feature = "parallel")]
fn repair_all(
    problem: &KnapsackProblem,
    population: &mut [Chromosome],
    offsets: &[usize],
    parallel: bool,
) {
    if parallel {
        population
            .par_iter_mut()
            .zip(offsets.par_iter())
            .for_each(|(c, &offset)| c.repair(problem, offset));
    } else {
        for (c, &offset) in population.iter_mut().zip(offsets) {
            c.repair(problem, offset);
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn repair_all(
    problem: &KnapsackProblem,
    population: &mut [Chromosome],
    offsets: &[usize],
    _parallel: bool,
) {
    for (c, &offset) in population.iter_mut().zip(offsets) {
        c.repair(problem, offset);
    }
}

/// Highest-fitness chromosome; the first one on ties.
fn find_best(population: &[Chromosome]) -> &Chromosome {
    let mut best = &population[0];
    for c in &population[1..] {
        if c.fitness > best.fitness {
            best = c;
        }
    }
    best
}

fn generation_stats(generation: usize, population: &[Chromosome]) -> GenerationStats {
    let sum: f64 = population.iter().map(|c| c.fitness).sum();
    GenerationStats {
        generation,
        best: find_best(population).fitness,
        mean: sum / population.len() as f64,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::KnapsackError;

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

    fn random_problem(seed: u64, n: usize, capacity: f64) -> KnapsackProblem {
        let mut rng = create_rng(seed);
        let pairs: Vec<(f64, f64)> = (0..n)
            .map(|_| {
                (
                    rng.random_range(1.0..50.0),
                    rng.random_range(1.0..100.0),
                )
            })
            .collect();
        KnapsackProblem::from_pairs(&pairs, capacity).unwrap()
    }

    #[test]
    fn test_reaches_good_solution() {
        let config = GeneticConfig::default()
            .with_max_generations(200)
            .with_window_size(30);
        let mut rng = create_rng(42);
        let result = GeneticRunner::run(&scenario(), &config, &mut rng).unwrap();
        assert!(result.weight <= 100.0);
        assert!(result.value >= 156.0 && result.value <= 166.0, "got {}", result.value);
    }

    #[test]
    fn test_always_feasible() {
        let problem = random_problem(7, 60, 300.0);
        for seed in 0..5 {
            let mut rng = create_rng(seed);
            let result = GeneticRunner::run(&problem, &GeneticConfig::fast(), &mut rng).unwrap();
            assert!(problem.is_feasible(&result.included));
            assert!((result.value - problem.total_value(&result.included)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let problem = random_problem(3, 40, 200.0);
        let config = GeneticConfig::fast();
        let a = GeneticRunner::run(&problem, &config, &mut create_rng(99)).unwrap();
        let b = GeneticRunner::run(&problem, &config, &mut create_rng(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_more_generations_never_worse() {
        let problem = random_problem(5, 80, 400.0);
        let short = GeneticConfig::default()
            .with_population_size(30)
            .with_max_generations(5)
            .with_window_size(4);
        let long = short.clone().with_max_generations(300);

        let mut short_sum = 0.0;
        let mut long_sum = 0.0;
        for seed in 0..10 {
            let s = GeneticRunner::run(&problem, &short, &mut create_rng(seed)).unwrap();
            let l = GeneticRunner::run(&problem, &long, &mut create_rng(seed)).unwrap();
            assert!(l.value >= s.value, "seed {seed}: {} < {}", l.value, s.value);
            short_sum += s.value;
            long_sum += l.value;
        }
        assert!(long_sum >= short_sum);
    }

    #[test]
    fn test_generation_cap_and_history() {
        let config = GeneticConfig::default()
            .with_population_size(10)
            .with_max_generations(8)
            .with_window_size(7);
        let problem = random_problem(1, 30, 150.0);
        let result = GeneticRunner::run(&problem, &config, &mut create_rng(0)).unwrap();
        assert!(result.generations <= 8);
        assert_eq!(result.history.len(), result.generations + 1);
        assert_eq!(result.history[0].generation, 0);
        for (i, stats) in result.history.iter().enumerate() {
            assert_eq!(stats.generation, i);
            assert!(stats.best >= stats.mean);
            assert!(result.value >= stats.best);
        }
        if !result.stagnated {
            assert_eq!(result.generations, 8);
        }
    }

    #[test]
    fn test_stagnation_stops_early() {
        // Every chromosome collapses to the empty solution: no progress.
        let problem = KnapsackProblem::from_pairs(&[(5.0, 1.0), (6.0, 1.0)], 0.0).unwrap();
        let config = GeneticConfig::default()
            .with_population_size(10)
            .with_max_generations(100)
            .with_window_size(5);
        let result = GeneticRunner::run(&problem, &config, &mut create_rng(0)).unwrap();
        assert!(result.stagnated);
        assert_eq!(result.generations, 5);
        assert_eq!(result.history.len(), 6);
        assert_eq!(result.value, 0.0);
        assert_eq!(result.included, vec![false, false]);
    }

    #[test]
    fn test_stagnation_needs_window_of_bred_generations() {
        let problem = KnapsackProblem::from_pairs(&[(5.0, 1.0), (6.0, 1.0)], 0.0).unwrap();
        for window in 1..8 {
            let config = GeneticConfig::default()
                .with_population_size(10)
                .with_max_generations(50)
                .with_window_size(window);
            let result = GeneticRunner::run(&problem, &config, &mut create_rng(3)).unwrap();
            assert!(result.stagnated);
            assert_eq!(result.generations, window, "window {window}");
        }
    }

    #[test]
    fn test_single_overweight_item() {
        let problem = KnapsackProblem::from_pairs(&[(10.0, 5.0)], 4.0).unwrap();
        let config = GeneticConfig::fast();
        let result = GeneticRunner::run(&problem, &config, &mut create_rng(1)).unwrap();
        assert_eq!(result.value, 0.0);
        assert_eq!(result.included, vec![false]);
    }

    #[test]
    fn test_empty_items() {
        let problem = KnapsackProblem::new(vec![], 4.0).unwrap();
        let config = GeneticConfig::fast();
        let result = GeneticRunner::run(&problem, &config, &mut create_rng(1)).unwrap();
        assert_eq!(result.value, 0.0);
        assert!(result.included.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneticConfig::default().with_window_size(0);
        let err = GeneticRunner::run(&scenario(), &config, &mut create_rng(1)).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidConfig(_)));
    }

    #[test]
    fn test_cancellation() {
        let cancel = Arc::new(AtomicBool::new(true));
        let result = GeneticRunner::run_with_cancel(
            &scenario(),
            &GeneticConfig::default(),
            &mut create_rng(1),
            Some(cancel),
        )
        .unwrap();
        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        assert!(result.weight <= 100.0);
    }
}
