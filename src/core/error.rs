//! Error types.
//!
//! Move failures are ordinary outcomes during replay, so every variant here
//! is cheap to construct and `Clone`. The boolean APIs collapse them to
//! `false`; the reporting APIs hand them back for diagnosis.

use thiserror::Error;

/// Why a move could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Notation token has fewer than two selector characters.
    #[error("token too short: {0:?}")]
    TokenTooShort(String),

    /// Selector character does not name any stack.
    #[error("no stack for selector {0:?}")]
    UnknownSelector(char),

    /// Registry index out of range.
    #[error("invalid stack index {0}")]
    InvalidStackIndex(usize),

    /// Source stack holds no cards.
    #[error("source stack is empty")]
    EmptySource,

    /// Source stack holds fewer cards than the move requires.
    #[error("need {needed} cards, source has {available}")]
    InsufficientCards { needed: usize, available: usize },

    /// No foundation can take the source card's suit.
    #[error("no foundation available")]
    NoFoundation,

    /// Destination or supermove capacity refused every attempted count.
    #[error("destination rejected a run of {count} cards")]
    Rejected { count: usize },
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one tableau is required")]
    NoTableaus,

    #[error("FreeCell needs exactly 4 foundations, got {0}")]
    FoundationCount(usize),

    #[error("{requested} cells requested, notation addresses at most {max}")]
    TooManyCells { requested: usize, max: usize },

    /// The rules routed a dealt card to a stack that does not exist.
    #[error("deal index {deal_index} targets missing stack {target}")]
    DealTargetOutOfRange { deal_index: usize, target: usize },
}

/// Failure to read a persisted solution record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("solution record is empty")]
    Empty,

    #[error("invalid cell count line: {0:?}")]
    InvalidCellCount(String),

    /// The solver never found a solution for this deal (cell count `-1`).
    #[error("deal is marked unsolved")]
    Unsolved,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
