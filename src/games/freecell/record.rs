//! Persisted solution records.
//!
//! A record is plain text: the first line is the number of free cells the
//! solution needs, the remaining lines are the notation tokens.
//!
//! ```text
//! 3
//! 8a 58 52 87
//! 82 38 ...
//! ```
//!
//! A cell count of `-1` marks a deal the solver gave up on.

use std::fmt;
use std::str::FromStr;

use super::game::{FreeCellGame, ReplayReport};
use crate::core::{GameConfig, RecordError};

/// A stored solution for one deal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionRecord {
    /// Free cells the solution was found with.
    pub cell_count: usize,
    /// Notation tokens, one or more per line.
    pub solution: String,
}

impl SolutionRecord {
    #[must_use]
    pub fn new(cell_count: usize, solution: impl Into<String>) -> Self {
        Self {
            cell_count,
            solution: solution.into(),
        }
    }

    /// Parse the text form.
    pub fn parse(text: &str) -> Result<Self, RecordError> {
        let mut lines = text.lines();
        let header = lines.next().map(str::trim).unwrap_or_default();
        if header.is_empty() {
            return Err(RecordError::Empty);
        }

        let cells: i64 = header
            .parse()
            .map_err(|_| RecordError::InvalidCellCount(header.to_string()))?;
        if cells < 0 {
            return Err(RecordError::Unsolved);
        }
        let cell_count =
            usize::try_from(cells).map_err(|_| RecordError::InvalidCellCount(header.to_string()))?;
        GameConfig::freecell(cell_count).validate()?;

        Ok(Self {
            cell_count,
            solution: lines.collect::<Vec<_>>().join("\n"),
        })
    }

    /// Replay against deal `seed` with the recorded cell count.
    pub fn replay_for(&self, seed: u32) -> Result<ReplayReport, RecordError> {
        let mut game = FreeCellGame::with_deal(seed, self.cell_count)?;
        Ok(game.replay(&self.solution))
    }

    /// Whether the solution wins deal `seed`.
    #[must_use]
    pub fn is_valid_for(&self, seed: u32) -> bool {
        super::game::is_valid(seed, self.cell_count, &self.solution)
    }

    /// Whether this record needs fewer cells than one stored with
    /// `existing_cells`.
    #[must_use]
    pub fn improves_on(&self, existing_cells: usize) -> bool {
        self.cell_count < existing_cells
    }
}

impl FromStr for SolutionRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SolutionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.cell_count, self.solution)
    }
}
