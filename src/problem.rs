//! Item catalog and solution types shared by all solvers.
//!
//! A [`KnapsackProblem`] is immutable once built: solvers borrow it
//! read-only and own every other piece of working state.

use crate::error::{KnapsackError, Result};

/// Relative slack allowed when re-summing weights of a returned solution.
///
/// Solvers accumulate weights in density order, while [`KnapsackProblem::total_weight`]
/// sums in index order, so exact-fit solutions may differ by rounding.
const FEASIBILITY_TOLERANCE: f64 = 1e-9;

/// A single item: positive weight, non-negative value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: f64,
    pub value: f64,
}

impl Item {
    pub fn new(weight: f64, value: f64) -> Self {
        Self { weight, value }
    }

    /// Value per unit of weight.
    pub fn density(&self) -> f64 {
        self.value / self.weight
    }
}

/// Items plus the knapsack capacity.
///
/// # Examples
///
/// ```
/// use u_knapsack::{Item, KnapsackProblem};
///
/// let problem = KnapsackProblem::new(
///     vec![Item::new(10.0, 20.0), Item::new(20.0, 30.0)],
///     25.0,
/// ).unwrap();
/// assert_eq!(problem.len(), 2);
/// assert!(KnapsackProblem::new(vec![Item::new(0.0, 1.0)], 5.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackProblem {
    items: Vec<Item>,
    capacity: f64,
}

impl KnapsackProblem {
    /// Builds and validates a problem.
    ///
    /// An empty item set and a zero capacity are both accepted; every solver
    /// answers them with value 0.
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Self> {
        let problem = Self { items, capacity };
        problem.validate()?;
        Ok(problem)
    }

    /// Builds a problem from `(weight, value)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)], capacity: f64) -> Result<Self> {
        let items = pairs.iter().map(|&(w, v)| Item::new(w, v)).collect();
        Self::new(items, capacity)
    }

    /// Checks capacity and every item.
    ///
    /// Runners call this again on entry, so instances that bypassed
    /// [`new`](Self::new) (e.g. deserialized ones) are still rejected before
    /// any work starts.
    pub fn validate(&self) -> Result<()> {
        if !self.capacity.is_finite() || self.capacity < 0.0 {
            return Err(KnapsackError::InvalidInput(format!(
                "capacity must be finite and non-negative, got {}",
                self.capacity
            )));
        }
        for (i, item) in self.items.iter().enumerate() {
            if !item.weight.is_finite() || item.weight <= 0.0 {
                return Err(KnapsackError::InvalidInput(format!(
                    "item {i} has non-positive weight {}",
                    item.weight
                )));
            }
            if !item.value.is_finite() || item.value < 0.0 {
                return Err(KnapsackError::InvalidInput(format!(
                    "item {i} has negative value {}",
                    item.value
                )));
            }
        }
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every item's value, an upper bound on any allocation.
    pub fn value_sum(&self) -> f64 {
        self.items.iter().map(|it| it.value).sum()
    }

    /// Total weight of the included items.
    pub fn total_weight(&self, included: &[bool]) -> f64 {
        self.items
            .iter()
            .zip(included)
            .filter(|(_, &inc)| inc)
            .map(|(it, _)| it.weight)
            .sum()
    }

    /// Total value of the included items.
    pub fn total_value(&self, included: &[bool]) -> f64 {
        self.items
            .iter()
            .zip(included)
            .filter(|(_, &inc)| inc)
            .map(|(it, _)| it.value)
            .sum()
    }

    /// Whether an inclusion vector fits within capacity.
    pub fn is_feasible(&self, included: &[bool]) -> bool {
        included.len() == self.items.len()
            && self.total_weight(included)
                <= self.capacity + FEASIBILITY_TOLERANCE * self.capacity.max(1.0)
    }

    /// Integer view of the instance for the dynamic-programming solver.
    ///
    /// Returns `(weights, capacity)` or [`KnapsackError::TypeMismatch`] when
    /// any weight or the capacity has a fractional part.
    pub fn integral_weights(&self) -> Result<(Vec<usize>, usize)> {
        if self.capacity.fract() != 0.0 || self.capacity > usize::MAX as f64 {
            return Err(KnapsackError::TypeMismatch(format!(
                "capacity {} is not an integer",
                self.capacity
            )));
        }
        let weights = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if item.weight.fract() != 0.0 || item.weight > usize::MAX as f64 {
                    Err(KnapsackError::TypeMismatch(format!(
                        "item {i} weight {} is not an integer",
                        item.weight
                    )))
                } else {
                    Ok(item.weight as usize)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok((weights, self.capacity as usize))
    }
}

/// How a solver allocated the items.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Allocation {
    /// Fraction in `[0, 1]` taken of each item (greedy relaxation).
    Fractional(Vec<f64>),
    /// Whether each item is packed (0-1 solvers).
    Binary(Vec<bool>),
}

/// A solver's answer: allocation, achieved value and packed weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub allocation: Allocation,
    pub value: f64,
    pub weight: f64,
}

impl Solution {
    /// Inclusion vector, if this is a 0-1 solution.
    pub fn included(&self) -> Option<&[bool]> {
        match &self.allocation {
            Allocation::Binary(v) => Some(v),
            Allocation::Fractional(_) => None,
        }
    }

    /// Per-item fractions, if this is a fractional solution.
    pub fn fractions(&self) -> Option<&[f64]> {
        match &self.allocation {
            Allocation::Fractional(v) => Some(v),
            Allocation::Binary(_) => None,
        }
    }

    /// Indices of items taken in any amount.
    pub fn chosen_indices(&self) -> Vec<usize> {
        match &self.allocation {
            Allocation::Binary(v) => v
                .iter()
                .enumerate()
                .filter_map(|(i, &inc)| inc.then_some(i))
                .collect(),
            Allocation::Fractional(v) => v
                .iter()
                .enumerate()
                .filter_map(|(i, &f)| (f > 0.0).then_some(i))
                .collect(),
        }
    }
}
