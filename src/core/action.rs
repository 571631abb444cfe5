//! Move records: single transfers and user-visible actions.
//!
//! A [`Move`] relocates the top `card_count` cards of one stack onto another,
//! addressed by registry index. A [`MoveSummary`] groups the moves that make
//! up one action (for FreeCell always a single move) together with a cost.
//!
//! Both are reversible, which is all undo needs:
//!
//! ```
//! use rust_freecell::core::{Move, MoveSummary};
//!
//! let summary = MoveSummary::new(Move::new(3, 0, 5));
//! let undo = summary.reversed();
//! assert_eq!(undo.moves[0].from_stack, 5);
//! assert_eq!(undo.moves[0].to_stack, 0);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// A transfer of the top `card_count` cards from one stack to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Number of cards taken from the top of the source.
    pub card_count: usize,

    /// Turn the moved cards face up (face down on undo).
    pub flip_moved_cards: bool,

    /// Turn the newly exposed source card face up (face down on undo).
    pub flip_revealed_card: bool,

    /// Registry index of the source stack.
    pub from_stack: usize,

    /// Registry index of the destination stack.
    pub to_stack: usize,
}

impl Move {
    /// A move with no flip side effects.
    #[must_use]
    pub const fn new(card_count: usize, from_stack: usize, to_stack: usize) -> Self {
        Self {
            card_count,
            flip_moved_cards: false,
            flip_revealed_card: false,
            from_stack,
            to_stack,
        }
    }

    #[must_use]
    pub const fn with_flips(mut self, flip_moved_cards: bool, flip_revealed_card: bool) -> Self {
        self.flip_moved_cards = flip_moved_cards;
        self.flip_revealed_card = flip_revealed_card;
        self
    }

    /// The same move with source and destination swapped.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            card_count: self.card_count,
            flip_moved_cards: self.flip_moved_cards,
            flip_revealed_card: self.flip_revealed_card,
            from_stack: self.to_stack,
            to_stack: self.from_stack,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move {} cards from {} to {}",
            self.card_count, self.from_stack, self.to_stack
        )
    }
}

/// One user-visible action: ordered moves plus a cost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSummary {
    /// Moves in execution order.
    /// SmallVec keeps the common single-move case off the heap.
    pub moves: SmallVec<[Move; 2]>,

    /// Cost of the action (0 unless a rules engine assigns one).
    pub cost: i32,
}

impl MoveSummary {
    /// Wrap a single move with zero cost.
    #[must_use]
    pub fn new(mv: Move) -> Self {
        Self::with_cost(mv, 0)
    }

    #[must_use]
    pub fn with_cost(mv: Move, cost: i32) -> Self {
        let mut moves = SmallVec::new();
        moves.push(mv);
        Self { moves, cost }
    }

    #[must_use]
    pub fn from_moves(moves: &[Move], cost: i32) -> Self {
        Self {
            moves: SmallVec::from_slice(moves),
            cost,
        }
    }

    /// The summary that undoes this one: moves in reverse order, each reversed.
    ///
    /// The cost is not carried over.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            moves: self.moves.iter().rev().map(Move::reversed).collect(),
            cost: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_reversed() {
        let mv = Move::new(2, 1, 7).with_flips(true, false);
        let rev = mv.reversed();

        assert_eq!(rev.card_count, 2);
        assert_eq!(rev.from_stack, 7);
        assert_eq!(rev.to_stack, 1);
        assert!(rev.flip_moved_cards);
        assert!(!rev.flip_revealed_card);
        assert_eq!(rev.reversed(), mv);
    }

    #[test]
    fn test_summary_reversed_order() {
        let summary = MoveSummary::from_moves(&[Move::new(1, 0, 12), Move::new(1, 12, 8)], 5);
        let rev = summary.reversed();

        assert_eq!(rev.len(), 2);
        assert_eq!(rev.moves[0], Move::new(1, 8, 12));
        assert_eq!(rev.moves[1], Move::new(1, 12, 0));
        assert_eq!(rev.cost, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(3, 2, 4).to_string(), "Move 3 cards from 2 to 4");
    }

    #[test]
    fn test_summary_serialization() {
        let summary = MoveSummary::with_cost(Move::new(4, 3, 6), 2);
        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: MoveSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
