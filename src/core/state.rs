//! Game state: stacks, deck, and move history.
//!
//! ## GameState
//!
//! Everything that changes while a game is played:
//! - Stack registry (where every dealt card is)
//! - Deck (deal order for the current seed)
//! - History of applied move summaries, for undo
//!
//! Rules live elsewhere; `GameState` only knows how to carry out a move that
//! has already been judged legal, and how to carry it back.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::action::{Move, MoveSummary};
use super::config::GameConfig;
use super::deck::Deck;
use super::error::MoveError;
use crate::stack::StackRegistry;

/// Mutable state of one deal.
///
/// Uses an `im` vector for history so cloning a mid-game state is cheap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Stack counts this state was built for.
    pub config: GameConfig,

    /// All stacks, index-stable for the lifetime of the deal.
    pub stacks: StackRegistry,

    /// The deck in deal order.
    pub deck: Deck,

    /// Applied summaries, oldest first.
    history: Vector<MoveSummary>,
}

impl GameState {
    /// Empty state: no stacks, fresh deck, no history.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            stacks: StackRegistry::new(),
            deck: Deck::new(),
            history: Vector::new(),
        }
    }

    /// Forget all stacks and history, keeping the deck.
    pub fn reset(&mut self, config: GameConfig) {
        self.config = config;
        self.stacks.clear();
        self.history.clear();
    }

    // === Moves ===

    /// Carry out a single move.
    ///
    /// Fails without touching any stack when either index is unknown or the
    /// source holds fewer than `card_count` cards. On undo, flip flags are
    /// applied in reverse (cards turned face down instead of up).
    pub fn perform_move(&mut self, mv: &Move, is_undo: bool) -> Result<(), MoveError> {
        let available = self
            .stacks
            .get(mv.from_stack)
            .ok_or(MoveError::InvalidStackIndex(mv.from_stack))?
            .len();
        if self.stacks.get(mv.to_stack).is_none() {
            return Err(MoveError::InvalidStackIndex(mv.to_stack));
        }
        if available < mv.card_count {
            return Err(MoveError::InsufficientCards {
                needed: mv.card_count,
                available,
            });
        }

        if is_undo && mv.flip_revealed_card {
            if let Some(to) = self.stacks.get_mut(mv.to_stack) {
                to.hide_top();
            }
        }

        let flip_moved = mv.flip_moved_cards;
        self.stacks
            .transfer_with(mv.from_stack, mv.to_stack, mv.card_count, |run| {
                if !flip_moved {
                    return;
                }
                for card in run.iter_mut() {
                    if is_undo {
                        card.show_back();
                    } else {
                        card.show_front();
                    }
                }
            })?;

        if !is_undo && mv.flip_revealed_card {
            if let Some(from) = self.stacks.get_mut(mv.from_stack) {
                from.show_top();
            }
        }

        trace!(
            from = mv.from_stack,
            to = mv.to_stack,
            count = mv.card_count,
            undo = is_undo,
            "move performed"
        );
        Ok(())
    }

    /// Carry out every move of a summary in order.
    ///
    /// If any move fails the stacks are restored to how they were before the
    /// summary started.
    pub fn perform_summary(&mut self, summary: &MoveSummary, is_undo: bool) -> Result<(), MoveError> {
        let checkpoint = self.stacks.clone();
        for mv in &summary.moves {
            if let Err(err) = self.perform_move(mv, is_undo) {
                self.stacks = checkpoint;
                return Err(err);
            }
        }
        Ok(())
    }

    /// Append a summary to the history.
    pub fn record(&mut self, summary: MoveSummary) {
        self.history.push_back(summary);
    }

    /// Undo the most recent summary.
    ///
    /// Returns the summary that was undone, or `None` when there is nothing
    /// to undo or the reversal cannot be applied.
    pub fn undo_last(&mut self) -> Option<MoveSummary> {
        let last = self.history.pop_back()?;
        match self.perform_summary(&last.reversed(), true) {
            Ok(()) => Some(last),
            Err(_) => {
                self.history.push_back(last);
                None
            }
        }
    }

    #[must_use]
    pub fn history(&self) -> &Vector<MoveSummary> {
        &self.history
    }

    /// Number of moves made so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    // === Inspection ===

    /// Cards currently on the board.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.stacks.total_cards()
    }

    /// Compact encoding of the board, for comparing deals byte for byte.
    pub fn snapshot_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(&self.stacks)
    }
}
