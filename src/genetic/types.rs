//! Chromosome representation and fitness repair.

use crate::problem::KnapsackProblem;
use rand::Rng;

/// A candidate 0-1 solution: one gene per item.
///
/// `fitness` is only meaningful after [`repair`](Chromosome::repair), which
/// also guarantees the genes fit within capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    pub genes: Vec<bool>,
    pub fitness: f64,
}

impl Chromosome {
    /// A chromosome with every gene drawn uniformly.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..len).map(|_| rng.random_bool(0.5)).collect(),
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Makes the chromosome feasible and sets its fitness.
    ///
    /// While overweight, set genes are cleared walking cyclically from
    /// `offset`. Fitness is the value of the repaired genes. This is a
    /// heuristic projection, not the best feasible subset.
    ///
    /// # Complexity
    /// O(n)
    pub fn repair(&mut self, problem: &KnapsackProblem, offset: usize) {
        let items = problem.items();
        let n = self.genes.len();
        debug_assert_eq!(n, items.len());

        let mut weight = problem.total_weight(&self.genes);
        let mut set = self.genes.iter().filter(|&&g| g).count();
        let mut i = if n == 0 { 0 } else { offset % n };

        while weight > problem.capacity() && set > 0 {
            if self.genes[i] {
                self.genes[i] = false;
                weight -= items[i].weight;
                set -= 1;
            }
            i = (i + 1) % n;
        }

        self.fitness = problem.total_value(&self.genes);
    }
}
