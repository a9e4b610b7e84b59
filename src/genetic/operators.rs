//! Selection, crossover and mutation over boolean chromosomes.
//!
//! # Selection
//!
//! [`select`] ranks the population by fitness, copies an elite prefix, then
//! fills the rest by quartile bands: a uniform draw against the ascending
//! thresholds `(q1, q2, q3)` picks the band (best quartile below `q1`,
//! worst above `q3`) and a second draw picks a position inside it. This
//! biases toward fit chromosomes without the cumulative sums of roulette
//! selection.
//!
//! # Crossover and mutation
//!
//! - [`crossover`]: single-point prefix swap on adjacent pairs — O(n)
//! - [`mutate`]: flip a random batch of genes — O(n · fraction)
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 3
//! - Michalewicz (1996), *Genetic Algorithms + Data Structures = Evolution
//!   Programs*, ch. 4 (knapsack repair)

use super::config::GeneticConfig;
use super::types::Chromosome;
use rand::Rng;
use std::cmp::Ordering;

/// Builds the mating pool for the next generation.
///
/// Returns `population.len()` clones: the elite prefix in rank order, then
/// quartile-band draws.
///
/// # Complexity
/// O(m log m) for the ranking, m = population size.
pub fn select<R: Rng>(
    population: &[Chromosome],
    config: &GeneticConfig,
    rng: &mut R,
) -> Vec<Chromosome> {
    let m = population.len();
    if m == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..m).collect();
    order.sort_by(|&a, &b| {
        population[b]
            .fitness
            .partial_cmp(&population[a].fitness)
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    let elite = config.elite_count().min(m);
    let mut selected: Vec<Chromosome> = order[..elite]
        .iter()
        .map(|&i| population[i].clone())
        .collect();

    let [q1, q2, q3] = config.quartile_thresholds;
    while selected.len() < m {
        let r: f64 = rng.random();
        let band_start = if r < q1 {
            0
        } else if r < q2 {
            m / 4
        } else if r < q3 {
            m / 2
        } else {
            3 * m / 4
        };
        let rank = (band_start + rng.random_range(0..m) / 4).min(m - 1);
        selected.push(population[order[rank]].clone());
    }

    selected
}

/// Single-point crossover over adjacent pairs `(0, 1), (2, 3), ...`.
///
/// With probability `probability` a cut point in `1..n` is drawn and the
/// gene prefixes before it are swapped. An odd trailing chromosome is left
/// alone.
///
/// # Panics
/// Panics if `probability` is outside `[0, 1]`.
pub fn crossover<R: Rng>(pool: &mut [Chromosome], probability: f64, rng: &mut R) {
    for pair in pool.chunks_exact_mut(2) {
        if !rng.random_bool(probability) {
            continue;
        }
        let n = pair[0].genes.len();
        if n < 2 {
            continue;
        }
        let cut = rng.random_range(1..n);
        let (left, right) = pair.split_at_mut(1);
        left[0].genes[..cut].swap_with_slice(&mut right[0].genes[..cut]);
    }
}

/// Flips between 1 and `ceil(fraction · n)` random genes of each chromosome
/// chosen with probability `probability`.
///
/// A gene may be drawn twice in one batch, flipping it back.
///
/// # Panics
/// Panics if `probability` is outside `[0, 1]`.
pub fn mutate<R: Rng>(pool: &mut [Chromosome], probability: f64, fraction: f64, rng: &mut R) {
    for chromosome in pool.iter_mut() {
        if !rng.random_bool(probability) {
            continue;
        }
        let n = chromosome.genes.len();
        if n == 0 {
            continue;
        }
        let max_flips = ((n as f64 * fraction).ceil() as usize).clamp(1, n);
        let flips = rng.random_range(1..=max_flips);
        for _ in 0..flips {
            let j = rng.random_range(0..n);
            chromosome.genes[j] = !chromosome.genes[j];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn with_fitness(fitnesses: &[f64]) -> Vec<Chromosome> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| Chromosome {
                genes: vec![i % 2 == 0; 4],
                fitness: f,
            })
            .collect()
    }

    #[test]
    fn test_select_keeps_size_and_elites() {
        let pop = with_fitness(&[3.0, 9.0, 1.0, 7.0, 5.0, 2.0, 8.0, 4.0, 6.0, 0.0]);
        let config = GeneticConfig::default().with_elite_fraction(0.2);
        let mut rng = create_rng(42);
        let pool = select(&pop, &config, &mut rng);
        assert_eq!(pool.len(), pop.len());
        assert_eq!(pool[0].fitness, 9.0);
        assert_eq!(pool[1].fitness, 8.0);
    }

    #[test]
    fn test_select_favors_best_quartile() {
        let fitnesses: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let pop = with_fitness(&fitnesses);
        let config = GeneticConfig::default().with_elite_fraction(0.0);
        let mut rng = create_rng(42);

        let mut top = 0usize;
        let mut bottom = 0usize;
        for _ in 0..50 {
            for c in select(&pop, &config, &mut rng) {
                if c.fitness >= 75.0 {
                    top += 1;
                } else if c.fitness < 25.0 {
                    bottom += 1;
                }
            }
        }
        // Expected shares 50% and 5%.
        assert!(top > 2000, "top quartile drawn {top}/5000");
        assert!(bottom < 500, "bottom quartile drawn {bottom}/5000");
        assert!(top > bottom * 4);
    }

    #[test]
    fn test_select_small_populations() {
        let mut rng = create_rng(1);
        let config = GeneticConfig::default().with_elite_fraction(0.0);
        for m in 1..8 {
            let pop = with_fitness(&vec![1.0; m]);
            assert_eq!(select(&pop, &config, &mut rng).len(), m);
        }
        assert!(select(&[], &config, &mut rng).is_empty());
    }

    #[test]
    fn test_crossover_swaps_prefix() {
        let mut pool = vec![
            Chromosome {
                genes: vec![true; 6],
                fitness: 0.0,
            },
            Chromosome {
                genes: vec![false; 6],
                fitness: 0.0,
            },
        ];
        let mut rng = create_rng(5);
        crossover(&mut pool, 1.0, &mut rng);
        let cut = pool[0].genes.iter().take_while(|&&g| !g).count();
        assert!((1..6).contains(&cut));
        assert!(pool[0].genes[cut..].iter().all(|&g| g));
        for i in 0..6 {
            assert_ne!(pool[0].genes[i], pool[1].genes[i]);
        }
    }

    #[test]
    fn test_crossover_probability_zero() {
        let original = vec![
            Chromosome {
                genes: vec![true, false, true],
                fitness: 0.0,
            },
            Chromosome {
                genes: vec![false, true, false],
                fitness: 0.0,
            },
            Chromosome {
                genes: vec![true, true, true],
                fitness: 0.0,
            },
        ];
        let mut pool = original.clone();
        let mut rng = create_rng(5);
        crossover(&mut pool, 0.0, &mut rng);
        assert_eq!(pool, original);
    }

    #[test]
    fn test_mutate_bounded_flips() {
        let mut rng = create_rng(9);
        for _ in 0..50 {
            let mut pool = vec![Chromosome {
                genes: vec![false; 100],
                fitness: 0.0,
            }];
            mutate(&mut pool, 1.0, 0.05, &mut rng);
            let flipped = pool[0].genes.iter().filter(|&&g| g).count();
            assert!(flipped <= 5, "flipped {flipped}");
        }
    }

    #[test]
    fn test_mutate_probability_zero() {
        let mut pool = vec![Chromosome {
            genes: vec![false; 10],
            fitness: 0.0,
        }];
        let mut rng = create_rng(9);
        mutate(&mut pool, 0.0, 1.0, &mut rng);
        assert!(pool[0].genes.iter().all(|&g| !g));
    }

    #[test]
    #[should_panic]
    fn test_crossover_rejects_probability_above_one() {
        let mut pool = vec![
            Chromosome {
                genes: vec![true, false],
                fitness: 0.0,
            },
            Chromosome {
                genes: vec![false, true],
                fitness: 0.0,
            },
        ];
        crossover(&mut pool, 1.5, &mut create_rng(0));
    }

    #[test]
    #[should_panic]
    fn test_mutate_rejects_negative_probability() {
        let mut pool = vec![Chromosome {
            genes: vec![true, false],
            fitness: 0.0,
        }];
        mutate(&mut pool, -0.1, 0.5, &mut create_rng(0));
    }

}
