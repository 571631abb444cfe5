//! FreeCell game: notation interpreter and solution replay.

use std::fmt;
use std::ops::Range;

use tracing::{debug, warn};

use super::notation::{self, NotationMove, Selector};
use super::rules::FreeCellRules;
use crate::core::{Card, ConfigError, GameConfig, GameState, Move, MoveError, DEFAULT_CELL_COUNT};
use crate::engine::CardGame;
use crate::rules::GameResult;
use crate::stack::{CardStack, StackKind, StackRegistry};

/// How a replay ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplayOutcome {
    /// Every token applied and the board is won.
    Won,
    /// Every token applied but cards remain outside the foundations.
    Incomplete,
    /// A token could not be applied; replay stopped there.
    Rejected {
        /// Zero-based position of the token in the solution.
        index: usize,
        token: String,
        reason: MoveError,
    },
}

/// Result of replaying a solution text against the current deal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayReport {
    /// Tokens applied before replay stopped.
    pub tokens_applied: usize,
    /// Tokens in the solution text.
    pub total_tokens: usize,
    pub outcome: ReplayOutcome,
}

impl ReplayReport {
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.outcome == ReplayOutcome::Won
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, ReplayOutcome::Rejected { .. })
    }
}

/// A FreeCell deal that can be played by notation.
///
/// Stack layout: tableaus `0..8`, foundations `8..12`, cells after that.
///
/// ```
/// use rust_freecell::games::freecell::FreeCellGame;
///
/// let mut game = FreeCellGame::with_deal(1, 4).unwrap();
/// assert_eq!(game.tableau(0).unwrap().len(), 7);
///
/// // Tableau 8 into cell a, then an illegal move that stops replay.
/// assert!(!game.play_solution("8a 8a 11"));
/// assert_eq!(game.move_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct FreeCellGame {
    game: CardGame<FreeCellRules>,
    seed: Option<u32>,
}

impl Default for FreeCellGame {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_COUNT)
    }
}

impl FreeCellGame {
    /// An empty board with `cell_count` cells. Call
    /// [`play_new_game`](Self::play_new_game) to deal.
    #[must_use]
    pub fn new(cell_count: usize) -> Self {
        Self {
            game: CardGame::new(FreeCellRules::new(), GameConfig::freecell(cell_count)),
            seed: None,
        }
    }

    /// A board already holding deal `seed`.
    pub fn with_deal(seed: u32, cell_count: usize) -> Result<Self, ConfigError> {
        let mut game = Self::new(cell_count);
        game.play_new_game(seed, cell_count)?;
        Ok(game)
    }

    /// Deal game number `seed` with `cell_count` free cells, discarding the
    /// previous game.
    pub fn play_new_game(&mut self, seed: u32, cell_count: usize) -> Result<(), ConfigError> {
        self.game.play_new_game(seed, GameConfig::freecell(cell_count))?;
        self.seed = Some(seed);
        Ok(())
    }

    // === Accessors ===

    /// The deal being played, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.state().config
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.config().cell_count
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    #[must_use]
    pub fn engine(&self) -> &CardGame<FreeCellRules> {
        &self.game
    }

    #[must_use]
    pub fn board(&self) -> &StackRegistry {
        &self.state().stacks
    }

    #[must_use]
    pub fn tableau(&self, index: usize) -> Option<&CardStack> {
        self.nth_of(self.config().tableau_range(), index)
    }

    #[must_use]
    pub fn foundation(&self, index: usize) -> Option<&CardStack> {
        self.nth_of(self.config().foundation_range(), index)
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&CardStack> {
        self.nth_of(self.config().cell_range(), index)
    }

    fn nth_of(&self, mut range: Range<usize>, index: usize) -> Option<&CardStack> {
        range.nth(index).and_then(|i| self.board().get(i))
    }

    /// Moves made since the deal.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.state().move_count()
    }

    /// Cards on the foundations.
    #[must_use]
    pub fn cards_home(&self) -> usize {
        self.config()
            .foundation_range()
            .map(|i| self.board().stack_size(i))
            .sum()
    }

    // === Outcome ===

    /// Tableaus and cells are all empty.
    #[must_use]
    pub fn check_victory(&self) -> bool {
        self.game.check_victory()
    }

    #[must_use]
    pub fn is_terminal(&self) -> Option<GameResult> {
        self.game.is_terminal()
    }

    // === Moves ===

    /// Undo the last move. Returns false when none was made.
    pub fn undo(&mut self) -> bool {
        self.game.undo()
    }

    /// First stack after `from` that would take its top `count` cards.
    #[must_use]
    pub fn suggested_destination(&self, from: usize, count: usize) -> Option<usize> {
        self.game.suggested_destination(from, count)
    }

    /// Apply one notation token, returning the move that was made.
    ///
    /// Fails without changing the board when a selector does not resolve,
    /// the source is empty, or no legal run length exists.
    pub fn do_notation_move(&mut self, token: &str) -> Result<Move, MoveError> {
        let parsed: NotationMove = token.parse()?;
        let from = self.resolve(parsed.from)?;
        let to = self.resolve(parsed.to)?;
        let source_top = self.board().top_card(from).copied().ok_or(MoveError::EmptySource)?;

        let to = match parsed.to {
            Selector::Foundation => self.home_for(&source_top)?,
            _ => to,
        };

        let destination = self.board().get(to).ok_or(MoveError::InvalidStackIndex(to))?;
        let mv = if destination.stack_kind() == StackKind::Tableau && destination.is_empty() {
            self.game.easy_move_check(from, to, parsed.count)?
        } else {
            self.try_counts(from, to, parsed.count)?
        };

        self.game.make_move(mv)?;
        Ok(mv)
    }

    /// Largest legal run of at most `max(requested, movable)` cards.
    fn try_counts(&self, from: usize, to: usize, requested: usize) -> Result<Move, MoveError> {
        let start = requested.max(self.game.movable_cards(from));
        (1..=start)
            .rev()
            .find_map(|count| self.game.easy_move_check(from, to, count).ok())
            .ok_or(MoveError::Rejected { count: start })
    }

    fn home_for(&self, card: &Card) -> Result<usize, MoveError> {
        self.game
            .rules()
            .foundation_for_suit(self.state(), card.suit)
            .ok_or(MoveError::NoFoundation)
    }

    /// Registry index for a selector. Foundations resolve to the first one;
    /// destinations are re-resolved by suit.
    fn resolve(&self, selector: Selector) -> Result<usize, MoveError> {
        let config = self.config();
        match selector {
            Selector::Tableau(i) if i < config.tableau_count => Ok(config.tableau_range().start + i),
            Selector::Tableau(_) => Err(MoveError::UnknownSelector(selector.to_char())),
            Selector::Foundation => Ok(config.foundation_range().start),
            Selector::Cell(_) if config.cell_count == 0 => {
                Err(MoveError::UnknownSelector(selector.to_char()))
            }
            Selector::Cell(i) => {
                let last = config.cell_count - 1;
                if i > last {
                    warn!(selector = %selector.to_char(), cells = config.cell_count, "cell selector clamped");
                }
                Ok(config.cell_range().start + i.min(last))
            }
        }
    }

    // === Solutions ===

    /// Apply every token of `solution` in order, stopping at the first that
    /// fails.
    pub fn replay(&mut self, solution: &str) -> ReplayReport {
        let tokens: Vec<&str> = notation::tokens(solution).collect();
        let total_tokens = tokens.len();

        for (index, token) in tokens.iter().enumerate() {
            if let Err(reason) = self.do_notation_move(token) {
                debug!(seed = ?self.seed, index, token, %reason, "token rejected");
                return ReplayReport {
                    tokens_applied: index,
                    total_tokens,
                    outcome: ReplayOutcome::Rejected {
                        index,
                        token: (*token).to_string(),
                        reason,
                    },
                };
            }
        }

        let outcome = if self.check_victory() {
            ReplayOutcome::Won
        } else {
            ReplayOutcome::Incomplete
        };
        ReplayReport {
            tokens_applied: total_tokens,
            total_tokens,
            outcome,
        }
    }

    /// Replay `solution` and report whether the board ends up won.
    ///
    /// Trailing tokens after a win are rejected (there is nothing left to
    /// move) but do not undo the win.
    pub fn play_solution(&mut self, solution: &str) -> bool {
        self.replay(solution);
        self.check_victory()
    }
}

impl fmt::Display for FreeCellGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stack in self.board().iter() {
            writeln!(f, "{stack}")?;
        }
        Ok(())
    }
}

/// Deal `seed` with `cell_count` cells and check that `solution` wins it.
///
/// Invalid cell counts are never valid.
#[must_use]
pub fn is_valid(seed: u32, cell_count: usize, solution: &str) -> bool {
    FreeCellGame::with_deal(seed, cell_count).is_ok_and(|mut game| game.play_solution(solution))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn deal(seed: u32) -> FreeCellGame {
        FreeCellGame::with_deal(seed, 4).unwrap()
    }

    /// Build a board by hand. Each string is one tableau, bottom first.
    fn board(columns: &[&str], cells: usize) -> FreeCellGame {
        let mut game = FreeCellGame::with_deal(1, cells).unwrap();
        let mut state = game.state().clone();
        state.stacks.remove_all_cards();
        for (i, column) in columns.iter().enumerate() {
            for c in column.split_whitespace() {
                state.stacks.add_card(i, card(c));
            }
        }
        game.game = CardGame::from_parts(FreeCellRules, state);
        game
    }

    #[test]
    fn test_deal_one_layout() {
        let game = deal(1);
        let first_row: Vec<String> = (0..8)
            .map(|i| game.tableau(i).unwrap().cards()[0].ascii())
            .collect();
        assert_eq!(first_row, ["JD", "2D", "9H", "JC", "5D", "7H", "7C", "5H"]);
        assert_eq!(game.state().total_cards(), 52);
        assert!(game.tableau(0).unwrap().cards().iter().all(|c| c.face_up));
    }

    #[test]
    fn test_cell_and_back() {
        let mut game = deal(1);
        let top = *game.tableau(7).unwrap().last_card().unwrap();

        game.do_notation_move("8a").unwrap();
        assert_eq!(game.cell(0).unwrap().last_card(), Some(&top));

        // Occupied cell refuses a second card.
        assert!(matches!(game.do_notation_move("8a"), Err(MoveError::Rejected { .. })));
        assert_eq!(game.move_count(), 1);

        assert!(game.undo());
        assert_eq!(game.tableau(7).unwrap().last_card(), Some(&top));
        assert!(game.cell(0).unwrap().is_empty());
    }

    #[test]
    fn test_same_stack_tokens_are_no_ops() {
        let mut game = board(&["KS", "KS 9H 8S 7D", "QD 5C"], 4);
        let before = game.state().stacks.clone();

        // A lone card lifts off and lands back on the emptied column.
        assert_eq!(game.do_notation_move("11").unwrap().card_count, 1);
        // The longest run the card below takes back is 8S 7D.
        assert_eq!(game.do_notation_move("22").unwrap().card_count, 2);
        assert_eq!(game.state().stacks, before);
        assert_eq!(game.move_count(), 2);

        // 5C does not go back onto QD.
        assert!(matches!(game.do_notation_move("33"), Err(MoveError::Rejected { .. })));
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_cell_to_itself() {
        let mut game = deal(1);
        let report = game.replay("8a aa");
        assert_eq!(report.tokens_applied, 2);
        assert_eq!(report.outcome, ReplayOutcome::Incomplete);

        let mut expected = deal(1);
        expected.do_notation_move("8a").unwrap();
        assert_eq!(game.state().stacks, expected.state().stacks);
    }

    #[test]
    fn test_empty_source() {
        let mut game = deal(1);
        assert_eq!(game.do_notation_move("a1"), Err(MoveError::EmptySource));
    }

    #[test]
    fn test_foundation_by_suit() {
        let mut game = board(&["KS AH", "KD AS", "KC 2H"], 4);

        game.do_notation_move("1h").unwrap();
        game.do_notation_move("2h").unwrap();
        assert_eq!(game.foundation(0).unwrap().last_card(), Some(&card("AH")));
        assert_eq!(game.foundation(1).unwrap().last_card(), Some(&card("AS")));

        // 2H finds the heart foundation even though it is not first empty.
        game.do_notation_move("3h").unwrap();
        assert_eq!(game.foundation(0).unwrap().len(), 2);
        assert_eq!(game.cards_home(), 3);
    }

    #[test]
    fn test_no_foundation() {
        let mut game = board(&["AH", "AS", "AD", "AC", "2H 3S"], 4);
        for token in ["1h", "2h", "3h", "4h"] {
            game.do_notation_move(token).unwrap();
        }
        // 3S resolves to the spade foundation, which is still on the ace.
        assert_eq!(game.do_notation_move("5h"), Err(MoveError::Rejected { count: 1 }));
        assert_eq!(game.foundation(1).unwrap().len(), 1);
    }

    #[test]
    fn test_supermove_takes_longest_fit() {
        let mut game = board(&["KS 9H 8S 7D", "KH TC", "KD", "KC", "QS", "QH", "QD", "QC"], 4);

        // No count given: the whole 9H-8S-7D run moves onto TC.
        let mv = game.do_notation_move("12").unwrap();
        assert_eq!(mv.card_count, 3);
        assert_eq!(game.tableau(1).unwrap().cards_string(), "K♥ T♣ 9♥ 8♠ 7♦");
    }

    #[test]
    fn test_supermove_capacity_bound() {
        // Zero cells, no empty tableaus: capacity 1.
        let mut game = board(&["KS 9H 8S", "KH TC", "KD", "KC", "QS", "QH", "QD", "QC"], 0);
        assert_eq!(game.do_notation_move("12"), Err(MoveError::Rejected { count: 1 }));
    }

    #[test]
    fn test_empty_tableau_uses_requested_count() {
        let mut game = board(&["KS 9H 8S 7D", "KH", "", "KC", "QS", "QH", "QD", "QC"], 4);

        let mv = game.do_notation_move("13v2").unwrap();
        assert_eq!(mv.card_count, 2);
        assert_eq!(game.tableau(2).unwrap().cards_string(), "8♠ 7♦");

        // Without a count only the top card goes to an empty column.
        let mut game = board(&["KS 9H 8S 7D", "KH", "", "KC", "QS", "QH", "QD", "QC"], 4);
        assert_eq!(game.do_notation_move("13").unwrap().card_count, 1);
    }

    #[test]
    fn test_cell_selector_clamped() {
        let mut game = FreeCellGame::with_deal(1, 2).unwrap();
        game.do_notation_move("1e").unwrap();
        assert_eq!(game.cell(1).unwrap().len(), 1);

        let mut game = FreeCellGame::with_deal(1, 0).unwrap();
        assert_eq!(game.do_notation_move("1a"), Err(MoveError::UnknownSelector('a')));
    }

    #[test]
    fn test_replay_report() {
        let mut game = deal(1);
        let report = game.replay("8a 8a 12 34");
        assert_eq!(report.tokens_applied, 1);
        assert_eq!(report.total_tokens, 4);
        assert!(report.is_rejected());
        match report.outcome {
            ReplayOutcome::Rejected { index, token, .. } => {
                assert_eq!(index, 1);
                assert_eq!(token, "8a");
            }
            other => panic!("unexpected outcome {other:?}"),
        }

        let mut game = deal(1);
        let report = game.replay("");
        assert_eq!(report.outcome, ReplayOutcome::Incomplete);
        assert_eq!(report.total_tokens, 0);
    }

    #[test]
    fn test_invalid_cell_count() {
        assert!(FreeCellGame::with_deal(1, 6).is_err());
        assert!(!is_valid(1, 6, "8a"));
    }

    #[test]
    fn test_display_lists_stacks() {
        let game = deal(1);
        let text = game.to_string();
        assert_eq!(text.lines().count(), 16);
        assert!(text.starts_with("Tableau: J♦"));
        assert!(text.contains("Foundation: \n"));
    }
}
