//! Game implementations.

pub mod freecell;
