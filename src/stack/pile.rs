//! Card stacks: an ordered card vector tagged with its kind.
//!
//! The kind is a closed enum, so every rule below is an exhaustive `match`
//! rather than a virtual call:
//!
//! | Kind | Accepts | Movable cards |
//! |------|---------|---------------|
//! | `Cell` | one card, only when empty | its card |
//! | `Foundation` | Ace on empty, else same suit one rank up | none |
//! | `Tableau` | anything on empty, else alternating colour one rank down | run length, capped by capacity |
//!
//! Cards are stored bottom to top; the last element is the top card.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Card, Move, Rank};

/// Which rules a stack follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackKind {
    /// Free cell: temporary storage for a single card.
    Cell,
    /// Foundation: built up by suit from Ace to King.
    Foundation,
    /// Tableau column: built down in alternating colours.
    Tableau,
}

/// How a front end would fan the cards of a stack. Inert data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutDirection {
    Right,
    Down,
    None,
}

impl StackKind {
    #[must_use]
    pub const fn layout_direction(self) -> LayoutDirection {
        match self {
            StackKind::Cell | StackKind::Foundation => LayoutDirection::None,
            StackKind::Tableau => LayoutDirection::Down,
        }
    }

    /// Whether cards moved out of this stack are turned face up.
    #[must_use]
    pub const fn should_flip_moving_cards(self) -> bool {
        false
    }

    /// Whether the card exposed by a move out of this stack is turned face up.
    #[must_use]
    pub const fn should_flip_top_card(self) -> bool {
        false
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StackKind::Cell => "Cell",
            StackKind::Foundation => "Foundation",
            StackKind::Tableau => "Tableau",
        }
    }
}

/// True when `upper` may sit directly on `lower` in a tableau run.
#[inline]
#[must_use]
pub fn is_run_pair(lower: &Card, upper: &Card) -> bool {
    lower.is_opposite_color_and_one_higher(upper)
}

/// An ordered pile of cards with kind-specific rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStack {
    kind: StackKind,
    cards: Vec<Card>,
}

impl CardStack {
    /// Create an empty stack of the given kind.
    #[must_use]
    pub fn new(kind: StackKind) -> Self {
        Self {
            kind,
            cards: Vec::new(),
        }
    }

    /// Create a stack holding `cards`, bottom first.
    #[must_use]
    pub fn with_cards(kind: StackKind, cards: Vec<Card>) -> Self {
        Self { kind, cards }
    }

    #[must_use]
    pub fn stack_kind(&self) -> StackKind {
        self.kind
    }

    #[must_use]
    pub fn layout_direction(&self) -> LayoutDirection {
        self.kind.layout_direction()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Bottom card.
    #[must_use]
    pub fn first_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Top card.
    #[must_use]
    pub fn last_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn index_of(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append cards in order, preserving their relative order.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn remove_all_cards(&mut self) {
        self.cards.clear();
    }

    /// Detach the top `count` cards, bottom first.
    ///
    /// Clamps to the stack size.
    pub fn take_top(&mut self, count: usize) -> Vec<Card> {
        let split = self.cards.len().saturating_sub(count);
        self.cards.split_off(split)
    }

    /// The top `count` cards, without removing them.
    #[must_use]
    pub fn top_cards(&self, count: usize) -> &[Card] {
        let split = self.cards.len().saturating_sub(count);
        &self.cards[split..]
    }

    /// The cards a move would carry, clamped to the stack size.
    #[must_use]
    pub fn cards_for_move(&self, mv: &Move) -> &[Card] {
        self.top_cards(mv.card_count)
    }

    /// Cards from `card` to the top, or empty if `card` is not here.
    #[must_use]
    pub fn cards_starting_with(&self, card: &Card) -> &[Card] {
        match self.index_of(card) {
            Some(idx) => &self.cards[idx..],
            None => &[],
        }
    }

    // === Rules ===

    /// Length of the maximal alternating-descending suffix.
    ///
    /// Defined for any kind; only tableaus act on it.
    #[must_use]
    pub fn run_length(&self) -> usize {
        if self.cards.len() < 2 {
            return self.cards.len();
        }
        1 + self
            .cards
            .windows(2)
            .rev()
            .take_while(|pair| is_run_pair(&pair[0], &pair[1]))
            .count()
    }

    /// Cards this stack can surrender ignoring capacity.
    #[must_use]
    pub fn movable_run_length(&self) -> usize {
        match self.kind {
            StackKind::Cell => self.cards.len().min(1),
            StackKind::Foundation => 0,
            StackKind::Tableau => self.run_length(),
        }
    }

    /// Cards this stack can surrender as a move source, given the current
    /// supermove `capacity`.
    #[must_use]
    pub fn movable_count(&self, capacity: usize) -> usize {
        match self.kind {
            StackKind::Tableau => self.run_length().min(capacity),
            _ => self.movable_run_length(),
        }
    }

    /// Whether a single card may be placed on this stack.
    #[must_use]
    pub fn accepts_card(&self, card: &Card) -> bool {
        match self.kind {
            StackKind::Cell => self.cards.is_empty(),
            StackKind::Foundation => match self.cards.last() {
                None => card.rank == Rank::Ace,
                Some(top) => card.suit == top.suit && card.is_one_higher_than(top),
            },
            StackKind::Tableau => match self.cards.last() {
                None => true,
                Some(top) => is_run_pair(top, card),
            },
        }
    }

    /// Whether `run` (bottom first) may be placed on this stack.
    ///
    /// `capacity` is the supermove limit for a move from the run's source to
    /// this stack; only tableaus consult it.
    #[must_use]
    pub fn accepts_run(&self, run: &[Card], capacity: usize) -> bool {
        let Some(bottom) = run.first() else {
            return false;
        };
        match self.kind {
            StackKind::Cell | StackKind::Foundation => run.len() == 1 && self.accepts_card(bottom),
            StackKind::Tableau => {
                if run.len() > capacity {
                    return false;
                }
                match self.cards.last() {
                    None => true,
                    Some(top) => is_run_pair(top, bottom),
                }
            }
        }
    }

    /// Number of cards that would move if `card` were picked up, or 0 if the
    /// run from `card` upward is not movable.
    #[must_use]
    pub fn movable_count_starting_with(&self, card: &Card, capacity: usize) -> usize {
        let Some(idx) = self.index_of(card) else {
            return 0;
        };
        let count = self.cards.len() - idx;
        if count > self.movable_count(capacity) {
            0
        } else {
            count
        }
    }

    /// True when `card` heads a run: it is the bottom card, or it sits on a
    /// card one rank higher of the opposite colour.
    #[must_use]
    pub fn is_top_of_run(&self, card: &Card) -> bool {
        match self.index_of(card) {
            None => false,
            Some(0) => true,
            Some(idx) => is_run_pair(&self.cards[idx - 1], card),
        }
    }

    /// Ranks never increase from bottom to top.
    #[must_use]
    pub fn is_in_descending_order(&self) -> bool {
        self.cards.windows(2).all(|w| w[0].rank >= w[1].rank)
    }

    /// The whole stack is one alternating-colour run.
    #[must_use]
    pub fn is_in_descending_alternating_order(&self) -> bool {
        self.cards.windows(2).all(|w| is_run_pair(&w[0], &w[1]))
    }

    // === Display flags ===

    pub fn show_all(&mut self) {
        self.cards.iter_mut().for_each(Card::show_front);
    }

    pub fn hide_all(&mut self) {
        self.cards.iter_mut().for_each(Card::show_back);
    }

    pub fn show_top(&mut self) {
        if let Some(card) = self.cards.last_mut() {
            card.show_front();
        }
    }

    pub fn hide_top(&mut self) {
        if let Some(card) = self.cards.last_mut() {
            card.show_back();
        }
    }

    /// Space-separated card list.
    #[must_use]
    pub fn cards_string(&self) -> String {
        self.cards
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CardStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.name(), self.cards_string())
    }
}
