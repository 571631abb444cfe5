//! FreeCell.
//!
//! - 8 tableaus dealt round-robin from the Microsoft shuffle
//! - 4 foundations, built up by suit
//! - 0 to 5 free cells (4 by default)
//! - Supermoves bounded by `(1 + free cells) * 2^(free tableaus)`
//!
//! Solutions are written in the standard solver notation and replayed with
//! [`FreeCellGame::play_solution`] or [`is_valid`].

mod game;
pub mod notation;
mod record;
mod rules;

pub use game::{is_valid, FreeCellGame, ReplayOutcome, ReplayReport};
pub use notation::{NotationMove, Selector};
pub use record::SolutionRecord;
pub use rules::FreeCellRules;
