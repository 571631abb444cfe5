//! Game configuration types.
//!
//! A `GameConfig` fixes how many stacks of each kind a deal allocates and in
//! which order they appear in the registry:
//!
//! ```text
//! [ tableaus ... | foundations ... | cells ... ]
//! ```
//!
//! The order never changes during a game, so a registry index is a stable
//! address for the lifetime of a deal.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::error::ConfigError;

/// Default number of free cells.
pub const DEFAULT_CELL_COUNT: usize = 4;

/// Largest cell count the move notation can address (`'a'..='e'`).
pub const MAX_CELL_COUNT: usize = 5;

/// Stack counts for one deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of tableau columns.
    pub tableau_count: usize,

    /// Number of foundation piles.
    pub foundation_count: usize,

    /// Number of free cells (0 is a legal, very hard game).
    pub cell_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tableau_count: 8,
            foundation_count: 4,
            cell_count: DEFAULT_CELL_COUNT,
        }
    }
}

impl GameConfig {
    /// Standard FreeCell with the given number of cells.
    #[must_use]
    pub fn freecell(cell_count: usize) -> Self {
        Self::default().with_cells(cell_count)
    }

    #[must_use]
    pub fn with_cells(mut self, cell_count: usize) -> Self {
        self.cell_count = cell_count;
        self
    }

    #[must_use]
    pub fn with_tableaus(mut self, tableau_count: usize) -> Self {
        self.tableau_count = tableau_count;
        self
    }

    #[must_use]
    pub fn with_foundations(mut self, foundation_count: usize) -> Self {
        self.foundation_count = foundation_count;
        self
    }

    /// Total number of stacks in the registry.
    #[must_use]
    pub fn total_stacks(&self) -> usize {
        self.tableau_count + self.foundation_count + self.cell_count
    }

    /// Registry indices of the tableaus.
    #[must_use]
    pub fn tableau_range(&self) -> Range<usize> {
        0..self.tableau_count
    }

    /// Registry indices of the foundations.
    #[must_use]
    pub fn foundation_range(&self) -> Range<usize> {
        let start = self.tableau_count;
        start..start + self.foundation_count
    }

    /// Registry indices of the cells.
    #[must_use]
    pub fn cell_range(&self) -> Range<usize> {
        let start = self.tableau_count + self.foundation_count;
        start..start + self.cell_count
    }

    /// Check the counts are playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tableau_count == 0 {
            return Err(ConfigError::NoTableaus);
        }
        if self.foundation_count != 4 {
            return Err(ConfigError::FoundationCount(self.foundation_count));
        }
        if self.cell_count > MAX_CELL_COUNT {
            return Err(ConfigError::TooManyCells {
                requested: self.cell_count,
                max: MAX_CELL_COUNT,
            });
        }
        Ok(())
    }
}
