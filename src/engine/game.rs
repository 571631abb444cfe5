//! Generic solitaire driver: deal, move, undo, victory.

use tracing::debug;

use crate::core::{ConfigError, GameConfig, GameState, Move, MoveError, MoveSummary};
use crate::rules::{GameResult, RulesEngine};

/// A solitaire game driven by a rules strategy.
///
/// `CardGame` owns the state of one deal and asks `R` for every decision
/// that differs between variants. All legality checks go through
/// [`easy_move_check`](Self::easy_move_check); all mutations go through
/// [`make_move`](Self::make_move) and [`undo`](Self::undo).
#[derive(Clone, Debug)]
pub struct CardGame<R> {
    rules: R,
    state: GameState,
}

impl<R: RulesEngine> CardGame<R> {
    /// Create a game with no deal yet.
    #[must_use]
    pub fn new(rules: R, config: GameConfig) -> Self {
        Self {
            rules,
            state: GameState::new(config),
        }
    }

    /// Resume from an existing state, e.g. a board set up by hand.
    #[must_use]
    pub fn from_parts(rules: R, state: GameState) -> Self {
        Self { rules, state }
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // === Dealing ===

    /// Rebuild the stacks for `config` and deal game number `seed`.
    ///
    /// Identical `(seed, config)` always produce identical stacks.
    pub fn play_new_game(&mut self, seed: u32, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.state.reset(config);
        self.rules.setup(&mut self.state, seed);
        self.state.deck.hide_all();
        self.state.deck.ms_shuffle(seed);
        self.deal()?;
        debug!(
            seed,
            cells = config.cell_count,
            stacks = self.state.stacks.len(),
            "dealt new game"
        );
        Ok(())
    }

    fn deal(&mut self) -> Result<(), ConfigError> {
        self.state.stacks.remove_all_cards();

        let cards = self.state.deck.cards().to_vec();
        for (i, card) in cards.iter().enumerate() {
            let target = self.rules.deal_target(&self.state, i);
            if !self.state.stacks.add_card(target, *card) {
                self.state.stacks.remove_all_cards();
                return Err(ConfigError::DealTargetOutOfRange { deal_index: i, target });
            }
            self.rules.card_dealt(&mut self.state, card, i);
            if self.rules.is_done_dealing(&self.state, i) {
                break;
            }
        }
        self.rules.all_cards_dealt(&mut self.state);
        Ok(())
    }

    // === Legality ===

    /// Cards `from` could give up right now, whatever the destination.
    #[must_use]
    pub fn movable_cards(&self, from: usize) -> usize {
        match self.state.stacks.get(from) {
            Some(stack) => {
                let limit = self.rules.movable_card_limit(&self.state, from, None);
                stack.movable_count(limit)
            }
            None => 0,
        }
    }

    /// Whether the top `count` cards of `from` may move onto `to`.
    ///
    /// The run is judged as already lifted off `from`, so with `from == to`
    /// it is asked whether the stack would take it straight back.
    #[must_use]
    pub fn can_add_count(&self, from: usize, to: usize, count: usize) -> bool {
        if self.movable_cards(from) < count {
            return false;
        }
        let (Some(source), Some(dest)) = (self.state.stacks.get(from), self.state.stacks.get(to)) else {
            return false;
        };
        let capacity = self.rules.movable_card_limit(&self.state, from, Some(to));
        let run = source.top_cards(count);
        if from == to {
            let mut lifted = source.clone();
            lifted.take_top(count);
            return lifted.accepts_run(run, capacity);
        }
        dest.accepts_run(run, capacity)
    }

    /// Build the move record for `count` cards, clamped to what `from` can
    /// give up and carrying the source's flip behaviour.
    #[must_use]
    pub fn get_move(&self, from: usize, to: usize, count: usize) -> Move {
        let count = count.min(self.movable_cards(from));
        let (flip_moved, flip_revealed) = self.state.stacks.get(from).map_or((false, false), |s| {
            let kind = s.stack_kind();
            (kind.should_flip_moving_cards(), kind.should_flip_top_card())
        });
        Move::new(count, from, to).with_flips(flip_moved, flip_revealed)
    }

    /// Move every movable card of `from` onto `to`, if that is legal.
    pub fn move_all_movable(&self, from: usize, to: usize) -> Result<Move, MoveError> {
        self.easy_move_check(from, to, self.movable_cards(from))
    }

    /// Check a move of exactly `count` cards and return it if legal.
    pub fn easy_move_check(&self, from: usize, to: usize, count: usize) -> Result<Move, MoveError> {
        let source = self
            .state
            .stacks
            .get(from)
            .ok_or(MoveError::InvalidStackIndex(from))?;
        if self.state.stacks.get(to).is_none() {
            return Err(MoveError::InvalidStackIndex(to));
        }
        if count == 0 {
            return Err(MoveError::Rejected { count });
        }
        if source.len() < count {
            return Err(MoveError::InsufficientCards {
                needed: count,
                available: source.len(),
            });
        }
        if self.can_add_count(from, to, count) {
            Ok(self.get_move(from, to, count))
        } else {
            Err(MoveError::Rejected { count })
        }
    }

    /// First stack after `from` (wrapping) that accepts its top `count`
    /// cards. The tap-to-move helper.
    #[must_use]
    pub fn suggested_destination(&self, from: usize, count: usize) -> Option<usize> {
        let n = self.state.stacks.len();
        if n == 0 || from >= n {
            return None;
        }
        (1..n)
            .map(|offset| (from + offset) % n)
            .find(|&to| self.can_add_count(from, to, count))
    }

    // === Mutation ===

    /// Perform a move as one recorded action.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let summary = self
            .rules
            .will_make_move(&self.state, MoveSummary::new(mv));
        self.state.perform_summary(&summary, false)?;
        self.rules.move_made(&self.state, &summary);
        self.state.record(summary);
        Ok(())
    }

    /// Undo the last action. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.state.undo_last().is_some()
    }

    // === Outcome ===

    #[must_use]
    pub fn check_victory(&self) -> bool {
        self.rules.check_victory(&self.state)
    }

    #[must_use]
    pub fn check_defeat(&self) -> bool {
        self.rules.check_defeat(&self.state)
    }

    #[must_use]
    pub fn is_terminal(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }
}
