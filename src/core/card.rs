//! Playing card values: suits, ranks, colours.
//!
//! A `Card` is a plain `Copy` value. It never points back at the stack that
//! holds it; a card's location is simply the stack whose vector contains it.
//!
//! ## Identity Index
//!
//! Every card has a unique index in `0..52`:
//!
//! ```
//! use rust_freecell::core::{Card, Rank, Suit};
//!
//! let ace_of_clubs = Card::new(Suit::Club, Rank::Ace);
//! assert_eq!(ace_of_clubs.index(), 0);
//!
//! let king_of_spades = Card::new(Suit::Spade, Rank::King);
//! assert_eq!(king_of_spades.index(), 51);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card suit. Discriminants match the deal generator's numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Club = 1,
    Diamond = 2,
    Heart = 3,
    Spade = 4,
}

/// Card colour, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    /// All suits in generator order.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Build a suit from its 1-based number.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Suit::Club),
            2 => Some(Suit::Diamond),
            3 => Some(Suit::Heart),
            4 => Some(Suit::Spade),
            _ => None,
        }
    }

    /// The 1-based suit number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamond | Suit::Heart => Color::Red,
            Suit::Club | Suit::Spade => Color::Black,
        }
    }

    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self.color(), Color::Red)
    }

    /// Single-character symbol used by `Display`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }

    /// ASCII letter used by solver deal files.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }
}

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
}

const RANK_CHARS: &[u8; 13] = b"A23456789TJQK";

impl Rank {
    /// All ranks, Ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Build a rank from its 1-based value.
    #[must_use]
    pub fn from_value(v: u8) -> Option<Self> {
        Self::ALL.get(usize::from(v).checked_sub(1)?).copied()
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn letter(self) -> char {
        RANK_CHARS[self as usize - 1] as char
    }
}

/// A single playing card with a display flag.
///
/// Equality and hashing ignore `face_up`: two cards are the same card when
/// suit and rank match, whichever way they are showing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    /// Inert display flag. Never consulted by the rules.
    pub face_up: bool,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index().hash(state);
    }
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Inverse of [`Card::index`]. Returns `None` outside `0..52`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= 52 {
            return None;
        }
        let rank = Rank::from_value((index / 4 + 1) as u8)?;
        let suit = Suit::from_number((index % 4 + 1) as u8)?;
        Some(Self::new(suit, rank))
    }

    /// Identity index: `(rank - 1) * 4 + (suit - 1)`.
    #[must_use]
    pub const fn index(&self) -> usize {
        (self.rank as usize - 1) * 4 + (self.suit as usize - 1)
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    #[must_use]
    pub fn is_same_color(&self, other: &Card) -> bool {
        self.color() == other.color()
    }

    #[must_use]
    pub fn is_one_higher_than(&self, other: &Card) -> bool {
        self.rank.value() == other.rank.value() + 1
    }

    #[must_use]
    pub fn is_one_lower_than(&self, other: &Card) -> bool {
        self.rank.value() + 1 == other.rank.value()
    }

    /// True when `other` can sit directly on top of `self` in a tableau run.
    #[must_use]
    pub fn is_opposite_color_and_one_higher(&self, other: &Card) -> bool {
        !self.is_same_color(other) && self.is_one_higher_than(other)
    }

    pub fn show_front(&mut self) {
        self.face_up = true;
    }

    pub fn show_back(&mut self) {
        self.face_up = false;
    }

    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Two-letter ASCII form, e.g. `"TD"`.
    #[must_use]
    pub fn ascii(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.rank.letter());
        s.push(self.suit.letter());
        s
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.letter(), self.suit.symbol())
    }
}

/// Error from parsing the two-letter ASCII card form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid card text: {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseCardError(s.to_string()));
        }
        let rank = RANK_CHARS
            .iter()
            .position(|&c| c == bytes[0].to_ascii_uppercase())
            .and_then(|i| Rank::from_value(i as u8 + 1));
        let suit = match bytes[1].to_ascii_uppercase() {
            b'C' => Some(Suit::Club),
            b'D' => Some(Suit::Diamond),
            b'H' => Some(Suit::Heart),
            b'S' => Some(Suit::Spade),
            _ => None,
        };
        match (suit, rank) {
            (Some(suit), Some(rank)) => Ok(Card::new(suit, rank)),
            _ => Err(ParseCardError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for i in 0..52 {
            let card = Card::from_index(i).unwrap();
            assert_eq!(card.index(), i);
        }
        assert!(Card::from_index(52).is_none());
    }

    #[test]
    fn test_index_layout() {
        assert_eq!(Card::new(Suit::Diamond, Rank::Ace).index(), 1);
        assert_eq!(Card::new(Suit::Club, Rank::Two).index(), 4);
        assert_eq!(Card::new(Suit::Heart, Rank::Ten).index(), 38);
    }

    #[test]
    fn test_colors() {
        assert!(Suit::Heart.is_red());
        assert!(Suit::Diamond.is_red());
        assert!(!Suit::Spade.is_red());
        assert!(!Suit::Club.is_red());
    }

    #[test]
    fn test_opposite_color_and_one_higher() {
        let nine_spades = Card::new(Suit::Spade, Rank::Nine);
        let eight_hearts = Card::new(Suit::Heart, Rank::Eight);
        let eight_clubs = Card::new(Suit::Club, Rank::Eight);

        assert!(nine_spades.is_opposite_color_and_one_higher(&eight_hearts));
        assert!(!nine_spades.is_opposite_color_and_one_higher(&eight_clubs));
        assert!(!eight_hearts.is_opposite_color_and_one_higher(&nine_spades));
        assert!(eight_hearts.is_one_lower_than(&nine_spades));
    }

    #[test]
    fn test_equality_ignores_face() {
        let mut a = Card::new(Suit::Club, Rank::Queen);
        let b = a;
        a.flip();
        assert!(a.face_up);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_and_parse() {
        let card = Card::new(Suit::Diamond, Rank::Ten);
        assert_eq!(card.to_string(), "T♦");
        assert_eq!(card.ascii(), "TD");
        assert_eq!("td".parse::<Card>().unwrap(), card);
        assert!("10D".parse::<Card>().is_err());
        assert!("XZ".parse::<Card>().is_err());
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Suit::Spade, Rank::Ace);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
