//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::DEFAULT_CELL_COUNT;
use crate::games::freecell::{self, FreeCellGame, SolutionRecord};

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", err))
}

/// Python wrapper for FreeCellGame.
///
/// One deal at a time; `play_new_game` replaces the board.
#[pyclass(name = "FreeCellGame")]
pub struct PyFreeCellGame {
    game: FreeCellGame,
}

#[pymethods]
impl PyFreeCellGame {
    /// Create a game, optionally dealing `seed` right away.
    ///
    /// # Arguments
    /// - cell_count: Number of free cells (0-5)
    /// - seed: Game number to deal, or None for an empty board
    #[new]
    #[pyo3(signature = (cell_count = DEFAULT_CELL_COUNT, seed = None))]
    fn new(cell_count: usize, seed: Option<u32>) -> PyResult<Self> {
        let game = match seed {
            Some(seed) => FreeCellGame::with_deal(seed, cell_count).map_err(value_error)?,
            None => FreeCellGame::new(cell_count),
        };
        Ok(Self { game })
    }

    /// Deal game number `seed`.
    #[pyo3(signature = (seed, cell_count = DEFAULT_CELL_COUNT))]
    fn play_new_game(&mut self, seed: u32, cell_count: usize) -> PyResult<()> {
        self.game.play_new_game(seed, cell_count).map_err(value_error)
    }

    /// Replay a whitespace-separated solution; True if it wins.
    fn play_solution(&mut self, solution: &str) -> bool {
        self.game.play_solution(solution)
    }

    /// Apply one notation token. Returns False if it was illegal.
    fn do_move(&mut self, token: &str) -> bool {
        self.game.do_notation_move(token).is_ok()
    }

    fn undo(&mut self) -> bool {
        self.game.undo()
    }

    fn check_victory(&self) -> bool {
        self.game.check_victory()
    }

    /// Every stack as a list of two-character card names, bottom first.
    ///
    /// Order: tableaus, foundations, cells.
    fn board(&self) -> Vec<Vec<String>> {
        self.game
            .board()
            .iter()
            .map(|stack| stack.cards().iter().map(|c| c.ascii()).collect())
            .collect()
    }

    #[getter]
    fn seed(&self) -> Option<u32> {
        self.game.seed()
    }

    #[getter]
    fn cell_count(&self) -> usize {
        self.game.cell_count()
    }

    #[getter]
    fn move_count(&self) -> usize {
        self.game.move_count()
    }

    fn __repr__(&self) -> String {
        let status = if self.game.check_victory() { "won" } else { "ongoing" };
        format!(
            "FreeCellGame(seed={:?}, cells={}, moves={}, status={})",
            self.game.seed(),
            self.game.cell_count(),
            self.game.move_count(),
            status
        )
    }

    fn __str__(&self) -> String {
        self.game.to_string()
    }
}

/// Deal `seed` with `cell_count` cells and check that `solution` wins it.
#[pyfunction]
pub fn is_valid(seed: u32, cell_count: usize, solution: &str) -> bool {
    freecell::is_valid(seed, cell_count, solution)
}

/// Parse a stored record (`cells` line, then tokens) and check it against `seed`.
#[pyfunction]
pub fn is_valid_record(seed: u32, record: &str) -> PyResult<bool> {
    let record = SolutionRecord::parse(record).map_err(value_error)?;
    Ok(record.is_valid_for(seed))
}
