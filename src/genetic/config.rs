//! Genetic solver configuration.
//!
//! [`GeneticConfig`] holds every parameter of the evolutionary loop.
//! Unlike builders that clamp, the `with_*` setters store values as given;
//! [`GeneticConfig::validate`] rejects out-of-range values before a run.

use crate::error::{KnapsackError, Result};

/// Configuration for the genetic solver.
///
/// # Defaults
///
/// ```
/// use u_knapsack::genetic::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.window_size, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::genetic::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_population_size(200)
///     .with_crossover_probability(0.9)
///     .with_quartile_thresholds([0.6, 0.85, 0.97]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticConfig {
    /// Number of chromosomes in every generation.
    pub population_size: usize,

    /// Hard cap on the number of generations bred.
    pub max_generations: usize,

    /// Number of trailing generations inspected for stagnation.
    ///
    /// Must be smaller than `max_generations`.
    pub window_size: usize,

    /// Probability that a chromosome is mutated (0.0–1.0).
    pub mutation_probability: f64,

    /// Upper bound on flipped genes per mutation, as a fraction of the
    /// genome length (0.0 exclusive – 1.0).
    pub mutation_fraction: f64,

    /// Probability that an adjacent pair undergoes crossover (0.0–1.0).
    pub crossover_probability: f64,

    /// Fraction of the best chromosomes copied unchanged by selection.
    ///
    /// The elite count is rounded up.
    pub elite_fraction: f64,

    /// Cumulative probabilities of drawing from the first three fitness
    /// quartiles; the remainder goes to the worst quartile.
    ///
    /// Must be ascending within `[0, 1]`.
    pub quartile_thresholds: [f64; 3],

    /// Whether to evaluate fitness in parallel.
    ///
    /// Only takes effect with the `parallel` feature; results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            window_size: 10,
            mutation_probability: 0.05,
            mutation_fraction: 0.01,
            crossover_probability: 0.85,
            elite_fraction: 0.1,
            quartile_thresholds: [0.5, 0.8, 0.95],
            parallel: false,
        }
    }
}

impl GeneticConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the stagnation window.
    pub fn with_window_size(mut self, n: usize) -> Self {
        self.window_size = n;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Sets the mutation fraction.
    pub fn with_mutation_fraction(mut self, f: f64) -> Self {
        self.mutation_fraction = f;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p;
        self
    }

    /// Sets the elite fraction.
    pub fn with_elite_fraction(mut self, f: f64) -> Self {
        self.elite_fraction = f;
        self
    }

    /// Sets the quartile selection thresholds.
    pub fn with_quartile_thresholds(mut self, thresholds: [f64; 3]) -> Self {
        self.quartile_thresholds = thresholds;
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Preset for quick runs: small population, short horizon.
    ///
    /// - Population: 50, Generations: 200, Window: 10
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            max_generations: 200,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let unit = 0.0..=1.0;
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.max_generations == 0 {
            return Err(invalid("max_generations must be at least 1"));
        }
        if self.window_size == 0 || self.window_size >= self.max_generations {
            return Err(invalid(
                "window_size must be positive and smaller than max_generations",
            ));
        }
        if !unit.contains(&self.mutation_probability) {
            return Err(invalid("mutation_probability must be within [0, 1]"));
        }
        if !(self.mutation_fraction > 0.0 && self.mutation_fraction <= 1.0) {
            return Err(invalid("mutation_fraction must be within (0, 1]"));
        }
        if !unit.contains(&self.crossover_probability) {
            return Err(invalid("crossover_probability must be within [0, 1]"));
        }
        if !unit.contains(&self.elite_fraction) {
            return Err(invalid("elite_fraction must be within [0, 1]"));
        }
        let [q1, q2, q3] = self.quartile_thresholds;
        if !(unit.contains(&q1) && unit.contains(&q2) && unit.contains(&q3)) {
            return Err(invalid("quartile thresholds must be within [0, 1]"));
        }
        if !(q1 <= q2 && q2 <= q3) {
            return Err(invalid("quartile thresholds must be ascending"));
        }
        Ok(())
    }

    /// Number of chromosomes selection copies unchanged.
    pub fn elite_count(&self) -> usize {
        ((self.population_size as f64 * self.elite_fraction).ceil() as usize)
            .min(self.population_size)
    }
}

fn invalid(message: &str) -> KnapsackError {
    KnapsackError::InvalidConfig(message.into())
}
