#![warn(missing_docs)]
//! The Vardoku library
//!
//! ## Overview
//!
//! Vardoku solves sudokus of variable size. Any square grid whose side
//! length is itself a perfect square (4x4, 9x9, 16x16, ...) can be solved
//! by exhaustive backtracking, or filled one cell at a time via hints.
//!
//! ## Example
//!
//! ```
//! use vardoku::Grid;
//!
//! let puzzle = "\
//! 1 . | . 4
//! . . | 1 .
//! ----+----
//! . 1 | . .
//! 4 . | . 1";
//!
//! // Grids can be parsed from block text or built from raw cells.
//! let mut grid: Grid = puzzle.parse().unwrap();
//!
//! if grid.solve() {
//!     assert!(grid.is_solved());
//!     println!("{}", grid);
//! }
//! ```
mod board;
mod generator;
mod solver;

pub mod errors;

pub use crate::board::{Grid, GridSize};
