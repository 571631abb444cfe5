//! FreeCell rules: layout, deal routing, supermove capacity, victory.

use crate::core::{GameState, Suit};
use crate::rules::RulesEngine;
use crate::stack::StackKind;

/// Rules strategy for FreeCell.
///
/// Stateless: every count it needs is read from `state.config`, and every
/// stack it needs is found by kind in `state.stacks`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FreeCellRules;

impl FreeCellRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Number of empty free cells.
    #[must_use]
    pub fn free_cells(&self, state: &GameState) -> usize {
        state
            .config
            .cell_range()
            .filter(|&i| state.stacks.get(i).is_some_and(|s| s.is_empty()))
            .count()
    }

    /// Number of empty tableaus other than `from` and `to`.
    #[must_use]
    pub fn free_tableaus(&self, state: &GameState, from: usize, to: Option<usize>) -> usize {
        state
            .config
            .tableau_range()
            .filter(|&i| i != from && Some(i) != to)
            .filter(|&i| state.stacks.get(i).is_some_and(|s| s.is_empty()))
            .count()
    }

    /// Largest run that may move from `from` to `to` in one action:
    /// `(1 + free cells) * 2^(free tableaus)`.
    ///
    /// ```
    /// use rust_freecell::core::{GameConfig, GameState};
    /// use rust_freecell::games::freecell::FreeCellRules;
    /// use rust_freecell::rules::RulesEngine;
    ///
    /// let mut state = GameState::new(GameConfig::freecell(4));
    /// let mut rules = FreeCellRules::new();
    /// rules.setup(&mut state, 1);
    ///
    /// // Empty board: 4 free cells, 6 empty tableaus besides 0 and 1.
    /// assert_eq!(rules.capacity(&state, 0, Some(1)), 5 << 6);
    /// ```
    #[must_use]
    pub fn capacity(&self, state: &GameState, from: usize, to: Option<usize>) -> usize {
        let cells = self.free_cells(state);
        let tableaus = self.free_tableaus(state, from, to);
        (1 + cells).checked_shl(tableaus as u32).unwrap_or(usize::MAX)
    }

    /// The foundation a card of `suit` goes to: the one already holding that
    /// suit, else the first empty one.
    #[must_use]
    pub fn foundation_for_suit(&self, state: &GameState, suit: Suit) -> Option<usize> {
        let mut empty = None;
        for i in state.config.foundation_range() {
            match state.stacks.top_card(i) {
                Some(top) if top.suit == suit => return Some(i),
                Some(_) => {}
                None => {
                    if empty.is_none() && state.stacks.get(i).is_some() {
                        empty = Some(i);
                    }
                }
            }
        }
        empty
    }
}

impl RulesEngine for FreeCellRules {
    fn setup(&mut self, state: &mut GameState, _seed: u32) {
        let config = state.config;
        for _ in 0..config.tableau_count {
            state.stacks.add_stack(StackKind::Tableau);
        }
        for _ in 0..config.foundation_count {
            state.stacks.add_stack(StackKind::Foundation);
        }
        for _ in 0..config.cell_count {
            state.stacks.add_stack(StackKind::Cell);
        }
    }

    fn deal_target(&self, state: &GameState, deal_index: usize) -> usize {
        deal_index % state.config.tableau_count.max(1)
    }

    fn all_cards_dealt(&mut self, state: &mut GameState) {
        for i in state.config.tableau_range() {
            if let Some(stack) = state.stacks.get_mut(i) {
                stack.show_all();
            }
        }
    }

    fn check_victory(&self, state: &GameState) -> bool {
        let config = state.config;
        config
            .tableau_range()
            .chain(config.cell_range())
            .all(|i| state.stacks.stack_size(i) == 0)
    }

    fn movable_card_limit(&self, state: &GameState, from: usize, to: Option<usize>) -> usize {
        self.capacity(state, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, GameConfig, Rank};

    fn empty_board(cells: usize) -> GameState {
        let mut state = GameState::new(GameConfig::freecell(cells));
        FreeCellRules.setup(&mut state, 1);
        state
    }

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn test_layout_order() {
        let state = empty_board(4);
        assert_eq!(state.stacks.len(), 16);
        assert!(state.config.tableau_range().all(|i| state.stacks[i].stack_kind() == StackKind::Tableau));
        assert!(state
            .config
            .foundation_range()
            .all(|i| state.stacks[i].stack_kind() == StackKind::Foundation));
        assert!(state.config.cell_range().all(|i| state.stacks[i].stack_kind() == StackKind::Cell));
    }

    #[test]
    fn test_capacity_formula() {
        let mut state = empty_board(4);
        // Fill every tableau but 2 and 3, and two of the cells.
        for i in [0, 1, 4, 5, 6, 7] {
            state.stacks.add_card(i, card("KS"));
        }
        state.stacks.add_card(12, card("2D"));
        state.stacks.add_card(13, card("3D"));

        let rules = FreeCellRules;
        assert_eq!(rules.free_cells(&state), 2);
        // Tableaus 2 and 3 are free.
        assert_eq!(rules.capacity(&state, 0, Some(1)), 3 * 4);
        // Moving to an empty tableau does not count it.
        assert_eq!(rules.capacity(&state, 0, Some(2)), 3 * 2);
        // Moving from an empty tableau does not count it either.
        assert_eq!(rules.capacity(&state, 3, Some(2)), 3);
        assert_eq!(rules.capacity(&state, 0, None), 3 * 4);
    }

    #[test]
    fn test_capacity_zero_cells() {
        let mut state = empty_board(0);
        for i in 0..8 {
            state.stacks.add_card(i, card("KS"));
        }
        assert_eq!(FreeCellRules.capacity(&state, 0, Some(1)), 1);
    }

    #[test]
    fn test_foundation_for_suit() {
        let mut state = empty_board(4);
        let rules = FreeCellRules;
        assert_eq!(rules.foundation_for_suit(&state, Suit::Heart), Some(8));

        state.stacks.add_card(8, Card::new(Suit::Club, Rank::Ace));
        state.stacks.add_card(10, Card::new(Suit::Heart, Rank::Ace));
        assert_eq!(rules.foundation_for_suit(&state, Suit::Heart), Some(10));
        assert_eq!(rules.foundation_for_suit(&state, Suit::Spade), Some(9));

        state.stacks.add_card(9, Card::new(Suit::Diamond, Rank::Ace));
        state.stacks.add_card(11, Card::new(Suit::Spade, Rank::Ace));
        assert_eq!(rules.foundation_for_suit(&state, Suit::Spade), Some(11));
    }

    #[test]
    fn test_victory() {
        let mut state = empty_board(4);
        let rules = FreeCellRules;
        assert!(rules.check_victory(&state));

        // Foundation cards do not count against victory.
        state.stacks.add_card(8, card("AH"));
        assert!(rules.check_victory(&state));

        state.stacks.add_card(12, card("2H"));
        assert!(!rules.check_victory(&state));
        assert!(!rules.check_defeat(&state));
    }

    #[test]
    fn test_deal_target_round_robin() {
        let state = empty_board(4);
        let targets: Vec<_> = (0..10).map(|i| FreeCellRules.deal_target(&state, i)).collect();
        assert_eq!(targets, vec![0, 1, 2, 3, 4, 5, 6, 7, 0, 1]);
    }
}
