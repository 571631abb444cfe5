//! Generic game driver.
//!
//! `CardGame<R>` deals, moves and undoes for any `RulesEngine`. It never
//! looks at FreeCell concepts; those live in `games::freecell`.

pub mod game;

pub use game::CardGame;
