//! Standard solver move notation.
//!
//! A token names a source and a destination with one character each, and
//! may carry a run length in its fourth character:
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `38` | top of tableau 3 onto tableau 8 (as many cards as fit) |
//! | `1a` | top of tableau 1 into cell a |
//! | `bh` | cell b to its foundation |
//! | `14v2` | two cards from tableau 1 to tableau 4 |
//!
//! Selectors: `1`-`8` tableau, `h` foundation, `a`-`e` cell. Tokens are
//! case-insensitive.

use std::fmt;
use std::str::FromStr;

use crate::core::MoveError;

/// Which stack a notation character refers to, before it is resolved
/// against a concrete board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Zero-based tableau column.
    Tableau(usize),
    /// "Home": the foundation matching the moving card.
    Foundation,
    /// Zero-based free cell, clamped to the configured cells on resolution.
    Cell(usize),
}

impl Selector {
    /// Parse one lowercase selector character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(Selector::Tableau(c as usize - '1' as usize)),
            'h' => Some(Selector::Foundation),
            'a'..='e' => Some(Selector::Cell(c as usize - 'a' as usize)),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Selector::Tableau(i) => char::from(b'1' + i as u8),
            Selector::Foundation => 'h',
            Selector::Cell(i) => char::from(b'a' + i as u8),
        }
    }
}

/// One parsed notation token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NotationMove {
    pub from: Selector,
    pub to: Selector,
    /// Requested run length; 1 when the token does not say.
    pub count: usize,
}

/// Run length encoded in the fourth character: `1`-`9`, then `a`-`f` for
/// 10-15. Anything else means 1.
fn count_char(c: Option<char>) -> usize {
    match c {
        Some(c @ '1'..='9') => c as usize - '0' as usize,
        Some(c @ 'a'..='f') => c as usize - 'a' as usize + 10,
        _ => 1,
    }
}

impl FromStr for NotationMove {
    type Err = MoveError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = token.to_lowercase().chars().collect();
        if chars.len() < 2 {
            return Err(MoveError::TokenTooShort(token.to_string()));
        }
        let from = Selector::from_char(chars[0]).ok_or(MoveError::UnknownSelector(chars[0]))?;
        let to = Selector::from_char(chars[1]).ok_or(MoveError::UnknownSelector(chars[1]))?;
        Ok(Self {
            from,
            to,
            count: count_char(chars.get(3).copied()),
        })
    }
}

impl fmt::Display for NotationMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from.to_char(), self.to.to_char())?;
        if self.count > 1 {
            write!(f, "v{:x}", self.count)?;
        }
        Ok(())
    }
}

/// Split solution text into tokens on any whitespace.
pub fn tokens(solution: &str) -> impl Iterator<Item = &str> {
    solution.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<NotationMove, MoveError> {
        s.parse()
    }

    #[test]
    fn test_selectors() {
        assert_eq!(Selector::from_char('1'), Some(Selector::Tableau(0)));
        assert_eq!(Selector::from_char('8'), Some(Selector::Tableau(7)));
        assert_eq!(Selector::from_char('h'), Some(Selector::Foundation));
        assert_eq!(Selector::from_char('a'), Some(Selector::Cell(0)));
        assert_eq!(Selector::from_char('e'), Some(Selector::Cell(4)));
        assert_eq!(Selector::from_char('9'), None);
        assert_eq!(Selector::from_char('0'), None);
        assert_eq!(Selector::from_char('f'), None);
    }

    #[test]
    fn test_simple_token() {
        let mv = parse("38").unwrap();
        assert_eq!(mv.from, Selector::Tableau(2));
        assert_eq!(mv.to, Selector::Tableau(7));
        assert_eq!(mv.count, 1);
    }

    #[test]
    fn test_count_character() {
        assert_eq!(parse("14v2").unwrap().count, 2);
        assert_eq!(parse("14v9").unwrap().count, 9);
        assert_eq!(parse("14va").unwrap().count, 10);
        assert_eq!(parse("14vF").unwrap().count, 15);
        // Out-of-range counts fall back to 1.
        assert_eq!(parse("14v0").unwrap().count, 1);
        assert_eq!(parse("14vz").unwrap().count, 1);
        assert_eq!(parse("14v").unwrap().count, 1);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(parse("AH").unwrap(), parse("ah").unwrap());
        assert_eq!(parse("1B").unwrap().to, Selector::Cell(1));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(""), Err(MoveError::TokenTooShort(String::new())));
        assert_eq!(parse("3"), Err(MoveError::TokenTooShort("3".to_string())));
        assert_eq!(parse("93"), Err(MoveError::UnknownSelector('9')));
        assert_eq!(parse("3x"), Err(MoveError::UnknownSelector('x')));
    }

    #[test]
    fn test_display() {
        assert_eq!(parse("38").unwrap().to_string(), "38");
        assert_eq!(parse("14v2").unwrap().to_string(), "14v2");
        assert_eq!(parse("1hvc").unwrap().to_string(), "1hvc");
        assert_eq!(parse("ch").unwrap().to_string(), "ch");
    }

    #[test]
    fn test_tokens() {
        let all: Vec<_> = tokens("  8a 58\n52\t87 ").collect();
        assert_eq!(all, vec!["8a", "58", "52", "87"]);
    }
}
