//! Types for the sudoku board: the grid itself and its validated size
mod grid;
mod size;

pub use self::{grid::Grid, size::GridSize};
