//! Error types shared by every solver.

use thiserror::Error;

/// Errors reported before any solver does algorithmic work.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnapsackError {
    /// The problem instance is malformed (bad capacity, weight or value).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The dynamic-programming solver received non-integral data.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// The dynamic-programming table would exceed the configured budget.
    #[error("resource limit exceeded: table needs {required} cells, budget is {limit}")]
    ResourceLimit {
        /// Cells the table would need, `(n + 1) * (capacity + 1)`.
        required: u128,
        /// Configured maximum number of cells.
        limit: u128,
    },

    /// A solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Instance text could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
}

/// Result type alias for knapsack operations.
pub type Result<T> = std::result::Result<T, KnapsackError>;
