//! Core engine types: cards, deck, RNG, moves, configuration, state.
//!
//! This module contains the building blocks that know nothing about any
//! particular solitaire. Rules engines configure them via `GameConfig`
//! rather than modifying the core.

pub mod action;
pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod rng;
pub mod state;

pub use action::{Move, MoveSummary};
pub use card::{Card, Color, ParseCardError, Rank, Suit};
pub use config::{GameConfig, DEFAULT_CELL_COUNT, MAX_CELL_COUNT};
pub use deck::{Deck, DECK_SIZE};
pub use error::{ConfigError, MoveError, RecordError};
pub use rng::MsRng;
pub use state::GameState;
