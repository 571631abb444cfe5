//! Index-stable registry of card stacks.
//!
//! The `StackRegistry` owns every stack of a deal. Stacks are addressed by
//! their position in the registry, which is fixed when the rules engine
//! allocates them and never changes until the next deal.
//!
//! ## Usage
//!
//! ```
//! use rust_freecell::stack::{StackKind, StackRegistry};
//! use rust_freecell::core::{Card, Rank, Suit};
//!
//! let mut registry = StackRegistry::new();
//! let column = registry.add_stack(StackKind::Tableau);
//! let cell = registry.add_stack(StackKind::Cell);
//!
//! registry.add_card(column, Card::new(Suit::Heart, Rank::Five));
//! registry.transfer(column, cell, 1).unwrap();
//!
//! assert_eq!(registry.stack_size(cell), 1);
//! assert_eq!(registry.stack_size(column), 0);
//! ```

use serde::{Deserialize, Serialize};

use super::pile::{CardStack, StackKind};
use crate::core::{Card, MoveError};

/// Ordered collection of stacks addressed by index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackRegistry {
    stacks: Vec<CardStack>,
}

impl StackRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty stack and return its index.
    pub fn add_stack(&mut self, kind: StackKind) -> usize {
        self.stacks.push(CardStack::new(kind));
        self.stacks.len() - 1
    }

    /// Remove every stack.
    pub fn clear(&mut self) {
        self.stacks.clear();
    }

    /// Empty every stack, keeping the layout.
    pub fn remove_all_cards(&mut self) {
        for stack in &mut self.stacks {
            stack.remove_all_cards();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardStack> {
        self.stacks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut CardStack> {
        self.stacks.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardStack> {
        self.stacks.iter()
    }

    /// Indices of all stacks of one kind, in registry order.
    pub fn indices_of(&self, kind: StackKind) -> impl Iterator<Item = usize> + '_ {
        self.stacks
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.stack_kind() == kind)
            .map(|(i, _)| i)
    }

    /// Number of cards on a stack; 0 for unknown indices.
    #[must_use]
    pub fn stack_size(&self, index: usize) -> usize {
        self.stacks.get(index).map_or(0, CardStack::len)
    }

    #[must_use]
    pub fn top_card(&self, index: usize) -> Option<&Card> {
        self.stacks.get(index)?.last_card()
    }

    /// Put a card on top of a stack. Returns false for unknown indices.
    pub fn add_card(&mut self, index: usize, card: Card) -> bool {
        match self.stacks.get_mut(index) {
            Some(stack) => {
                stack.add_card(card);
                true
            }
            None => false,
        }
    }

    /// Move the top `count` cards of `from` onto `to`, keeping their order.
    ///
    /// Either the whole run moves or nothing changes.
    pub fn transfer(&mut self, from: usize, to: usize, count: usize) -> Result<(), MoveError> {
        self.transfer_with(from, to, count, |_| {})
    }

    /// Like [`transfer`](Self::transfer), applying `prepare` to the detached
    /// run before it lands.
    pub fn transfer_with(
        &mut self,
        from: usize,
        to: usize,
        count: usize,
        prepare: impl FnOnce(&mut [Card]),
    ) -> Result<(), MoveError> {
        if to >= self.stacks.len() {
            return Err(MoveError::InvalidStackIndex(to));
        }
        let source = self
            .stacks
            .get_mut(from)
            .ok_or(MoveError::InvalidStackIndex(from))?;
        if source.len() < count {
            return Err(MoveError::InsufficientCards {
                needed: count,
                available: source.len(),
            });
        }

        let mut run = source.take_top(count);
        prepare(&mut run);
        self.stacks[to].add_cards(run);
        Ok(())
    }

    /// Total cards across all stacks.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.stacks.iter().map(CardStack::len).sum()
    }

    /// Every card on the board, stack by stack.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.stacks.iter().flat_map(|s| s.cards().iter())
    }
}

impl std::ops::Index<usize> for StackRegistry {
    type Output = CardStack;

    fn index(&self, index: usize) -> &Self::Output {
        &self.stacks[index]
    }
}
