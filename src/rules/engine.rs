//! Rules engine trait for solitaire implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - Which stacks exist and where each dealt card goes
//! - How many cards may move together
//! - Win/loss conditions

use crate::core::{Card, GameState, MoveSummary};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Every card reached its goal.
    Won,
    /// No way forward.
    Lost,
}

/// Rules engine trait.
///
/// The generic [`CardGame`](crate::engine::CardGame) driver calls these
/// methods while dealing and moving. Everything except stack allocation,
/// deal routing, and the victory test has a default.
///
/// ## Implementation Notes
///
/// - `setup`: allocate stacks in a fixed order; indices must stay stable
/// - `deal_target`: must return a valid registry index
/// - `movable_card_limit`: `to` is `None` when asking how many cards a
///   stack could give up without a destination in mind
/// - Everything must be deterministic: same seed, same game
pub trait RulesEngine {
    /// Allocate the stacks for a new deal into `state.stacks`.
    ///
    /// `seed` is the game number being dealt, for variants whose layout
    /// depends on it.
    fn setup(&mut self, state: &mut GameState, seed: u32);

    /// Registry index of the stack that receives the `deal_index`-th card.
    fn deal_target(&self, state: &GameState, deal_index: usize) -> usize;

    /// Whether dealing stops after the `deal_index`-th card.
    ///
    /// Default: when the deck runs out.
    fn is_done_dealing(&self, state: &GameState, deal_index: usize) -> bool {
        deal_index + 1 >= state.deck.len()
    }

    /// Called after each card is dealt.
    fn card_dealt(&mut self, _state: &mut GameState, _card: &Card, _deal_index: usize) {}

    /// Called once dealing is finished.
    fn all_cards_dealt(&mut self, _state: &mut GameState) {}

    /// Whether the game has been won.
    fn check_victory(&self, state: &GameState) -> bool;

    /// Whether the game has been lost. Default: never.
    fn check_defeat(&self, _state: &GameState) -> bool {
        false
    }

    /// Upper bound on how many cards may move from `from` to `to` as one
    /// action. Default: unbounded.
    fn movable_card_limit(&self, _state: &GameState, _from: usize, _to: Option<usize>) -> usize {
        usize::MAX
    }

    /// Inspect or replace a summary before it is performed.
    fn will_make_move(&mut self, _state: &GameState, summary: MoveSummary) -> MoveSummary {
        summary
    }

    /// Called after a summary has been performed and recorded.
    fn move_made(&mut self, _state: &GameState, _summary: &MoveSummary) {}

    // === Convenience Methods ===

    /// `Some(result)` once the game is over, `None` while it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if self.check_victory(state) {
            Some(GameResult::Won)
        } else if self.check_defeat(state) {
            Some(GameResult::Lost)
        } else {
            None
        }
    }
}
