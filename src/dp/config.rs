//! Dynamic-programming configuration.

use crate::error::{KnapsackError, Result};

/// Configuration for the dynamic-programming solver.
///
/// # Examples
///
/// ```
/// use u_knapsack::dp::DpConfig;
///
/// let config = DpConfig::default().with_max_table_cells(1_000_000);
/// assert_eq!(config.max_table_cells, 1_000_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpConfig {
    /// Largest table, in cells, the solver may allocate.
    ///
    /// The table has `(n + 1) * (capacity + 1)` cells of 8 bytes each.
    /// The default of 50 million cells is about 400 MB.
    pub max_table_cells: usize,
}

impl Default for DpConfig {
    fn default() -> Self {
        Self {
            max_table_cells: 50_000_000,
        }
    }
}

impl DpConfig {
    /// Sets the table cell budget.
    pub fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = cells;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_table_cells == 0 {
            return Err(KnapsackError::InvalidConfig(
                "max_table_cells must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
