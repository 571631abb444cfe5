//! # rust-freecell
//!
//! A deterministic FreeCell rules engine.
//!
//! ## Design Principles
//!
//! 1. **Reproducible Deals**: Game number N is dealt with the Microsoft
//!    linear-congruential shuffle, so deal 1 here is deal 1 everywhere.
//!
//! 2. **Rules As Strategy**: The driver (`CardGame<R>`) is generic over a
//!    `RulesEngine`. FreeCell is one implementation; nothing in the driver
//!    knows about cells or foundations.
//!
//! 3. **No Panics On Bad Input**: An illegal token is an ordinary outcome.
//!    Replay stops at the first one and reports why.
//!
//! ## Architecture
//!
//! - **Index-Based Ownership**: Cards are plain values held in exactly one
//!   stack; stacks live in an index-stable registry.
//!
//! - **Persistent History**: Undo history uses `im-rs`, so cloning a game
//!   mid-replay is cheap.
//!
//! ## Modules
//!
//! - `core`: Cards, deck, RNG, moves, configuration, errors, state
//! - `stack`: Card stacks and the stack registry
//! - `rules`: RulesEngine trait for game implementations
//! - `engine`: Generic deal / move / undo driver
//! - `games`: FreeCell rules, notation, replay, solution records
//!
//! ## Example
//!
//! ```
//! use rust_freecell::{is_valid, FreeCellGame};
//!
//! let mut game = FreeCellGame::with_deal(617, 4).unwrap();
//! assert!(!game.play_solution("11"));
//! assert!(!is_valid(617, 4, ""));
//! ```

pub mod core;
pub mod engine;
pub mod games;
pub mod rules;
pub mod stack;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Rank, Suit,
    Deck, MsRng, DECK_SIZE,
    Move, MoveSummary,
    GameConfig, GameState,
    ConfigError, MoveError, RecordError,
};

pub use crate::stack::{CardStack, StackKind, StackRegistry};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::engine::CardGame;

pub use crate::games::freecell::{
    is_valid, FreeCellGame, FreeCellRules,
    NotationMove, Selector,
    ReplayOutcome, ReplayReport, SolutionRecord,
};
