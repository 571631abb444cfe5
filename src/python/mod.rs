//! Python bindings for the rust-freecell rules engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_freecell as fc
//!
//! game = fc.FreeCellGame(cell_count=4, seed=1)
//! game.play_solution("8a 58 52 87 ...")
//! game.check_victory()
//!
//! fc.is_valid(617, 3, solution_text)
//! ```

use pyo3::prelude::*;

mod py_games;

pub use py_games::*;

/// rust_freecell: FreeCell deals and solution validation.
#[pymodule]
fn rust_freecell(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFreeCellGame>()?;
    m.add_function(wrap_pyfunction!(is_valid, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid_record, m)?)?;
    Ok(())
}
