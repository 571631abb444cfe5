//! The 52-card deck and the deterministic deal shuffle.
//!
//! The deck always holds exactly the 52 distinct cards. Shuffling replaces
//! the order and nothing else.
//!
//! ```
//! use rust_freecell::core::Deck;
//!
//! let mut deck = Deck::new();
//! deck.ms_shuffle(1);
//! assert!(deck.is_complete());
//! assert_eq!(deck.cards()[0].ascii(), "JD");
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::{Card, Rank, Suit};
use super::rng::MsRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// An ordered standard deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh deck in identity-index order, all cards face down.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: (0..DECK_SIZE).filter_map(Card::from_index).collect(),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Find a card by suit and rank.
    #[must_use]
    pub fn card_lookup(&self, suit: Suit, rank: Rank) -> Option<&Card> {
        self.cards.iter().find(|c| c.suit == suit && c.rank == rank)
    }

    /// Turn every card face down.
    pub fn hide_all(&mut self) {
        for card in &mut self.cards {
            card.show_back();
        }
    }

    /// True when the deck holds each of the 52 cards exactly once.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        if self.cards.len() != DECK_SIZE {
            return false;
        }
        let mut seen = FxHashSet::default();
        self.cards.iter().all(|c| seen.insert(c.index()))
    }

    /// Reorder the deck into the deal for game number `seed`.
    ///
    /// Always starts from the solved order (rank ascending, suits cycling
    /// club..spade), reversed, so the result depends only on `seed`. Every
    /// card comes out face down.
    pub fn ms_shuffle(&mut self, seed: u32) {
        let mut cards: Vec<Card> = (0..DECK_SIZE).filter_map(Card::from_index).collect();
        cards.reverse();

        let mut rng = MsRng::new(seed);
        let n = cards.len();
        for i in 0..n - 1 {
            let j = n - 1 - (rng.draw() as usize) % (n - i);
            cards.swap(i, j);
        }

        self.cards = cards;
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii(deck: &Deck) -> Vec<String> {
        deck.iter().map(Card::ascii).collect()
    }

    #[test]
    fn test_new_deck_is_complete() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);
        assert!(deck.is_complete());
        assert!(deck.iter().all(|c| !c.face_up));
    }

    #[test]
    fn test_shuffle_seed_1_prefix() {
        let mut deck = Deck::new();
        deck.ms_shuffle(1);
        // First dealt row of game #1.
        assert_eq!(
            &ascii(&deck)[..8],
            &["JD", "2D", "9H", "JC", "5D", "7H", "7C", "5H"]
        );
    }

    #[test]
    fn test_shuffle_is_idempotent_per_seed() {
        let mut a = Deck::new();
        a.ms_shuffle(42);
        let first = ascii(&a);
        a.ms_shuffle(42);
        assert_eq!(first, ascii(&a));
    }

    #[test]
    fn test_shuffle_deals_face_down() {
        let mut deck = Deck::new();
        deck.ms_shuffle(3);
        for card in deck.cards.iter_mut().take(10) {
            card.face_up = true;
        }
        deck.ms_shuffle(3);
        assert!(deck.iter().all(|c| !c.face_up));
    }

    #[test]
    fn test_shuffle_keeps_card_set() {
        let mut deck = Deck::new();
        for seed in [0, 1, 2, 617, 11982, 1_000_000, u32::MAX] {
            deck.ms_shuffle(seed);
            assert!(deck.is_complete(), "seed {seed}");
        }
    }

    #[test]
    fn test_incomplete_detection() {
        let mut deck = Deck::new();
        deck.cards[5] = deck.cards[6];
        assert!(!deck.is_complete());
        deck.cards.pop();
        assert!(!deck.is_complete());
    }

    #[test]
    fn test_card_lookup() {
        let deck = Deck::new();
        let card = deck.card_lookup(Suit::Heart, Rank::Queen).unwrap();
        assert_eq!(card.ascii(), "QH");
    }
}
