//! Sliding-window stagnation detection.

use std::collections::VecDeque;

/// Best and mean fitness of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number; 0 is the initial population.
    pub generation: usize,
    pub best: f64,
    pub mean: f64,
}

/// The last `size` generation records, oldest first.
#[derive(Debug, Clone)]
pub(crate) struct StagnationWindow {
    records: VecDeque<GenerationStats>,
    size: usize,
}

impl StagnationWindow {
    pub fn new(size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(size),
            size,
        }
    }

    pub fn push(&mut self, stats: GenerationStats) {
        if self.records.len() == self.size {
            self.records.pop_front();
        }
        self.records.push_back(stats);
    }

    /// True once the window is full and no newer record strictly beats the
    /// oldest one in either best or mean fitness.
    pub fn is_stagnant(&self) -> bool {
        let Some(oldest) = self.records.front() else {
            return false;
        };
        if self.records.len() < self.size {
            return false;
        }
        !self
            .records
            .iter()
            .skip(1)
            .any(|r| r.best > oldest.best || r.mean > oldest.mean)
    }
}
