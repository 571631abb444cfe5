//! Rules engine trait for solitaire implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Stack layout and deal routing
//! - How many cards may move together
//! - Win/loss conditions
//!
//! The generic engine calls into `RulesEngine` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
