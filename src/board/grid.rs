use std::str::FromStr;
use std::{fmt, iter, slice};

use rand::Rng;

use crate::board::GridSize;
use crate::errors::{FromCellsError, InvalidCellValueError, ParseError};
use crate::{generator, solver};

/// The main structure exposing all the functionality of the library
///
/// A `Grid` is a square sudoku board of side length `size` where `size`
/// is a perfect square. Cells are stored row by row; 0 marks an empty
/// cell, `1..=size` a placed digit.
#[derive(PartialEq, Eq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: GridSize,
    cells: Vec<u8>,
}

/// Iterator over the cells of a [`Grid`], `None` for empty cells
pub type Iter<'a> = iter::Map<slice::Iter<'a, u8>, fn(&u8) -> Option<u8>>;

impl Grid {
    /// Creates an empty grid of the given size.
    pub fn empty(size: GridSize) -> Grid {
        Grid {
            size,
            cells: vec![0; size.n_cells()],
        }
    }

    /// Creates a grid from row-major cells, 0 denoting an empty cell.
    ///
    /// Fails if the number of cells is not `size * size` or any value
    /// exceeds `size`.
    pub fn from_cells(size: GridSize, cells: Vec<u8>) -> Result<Grid, FromCellsError> {
        if cells.len() != size.n_cells() {
            return Err(FromCellsError::WrongLength {
                expected: size.n_cells(),
                found: cells.len(),
            });
        }
        if let Some(&value) = cells.iter().find(|&&value| value > size.get()) {
            return Err(InvalidCellValueError {
                value,
                size: size.get(),
            }
            .into());
        }
        Ok(Grid { size, cells })
    }

    /// Creates a grid from whitespace-separated block text.
    ///
    /// Cells are numbers or one of `.`, `_`, `0` for empty. `|` column
    /// marks and `---+---` style separator lines are ignored. The side
    /// length is inferred from the number of cells. See the crate
    /// documentation for an example of the format.
    pub fn parse(s: &str) -> Result<Grid, ParseError> {
        let mut cells = Vec::new();
        for token in s.split_whitespace() {
            if token.chars().all(|ch| "-+|".contains(ch)) {
                continue;
            }
            match token {
                "." | "_" => cells.push(0),
                _ => match token.parse::<u8>() {
                    Ok(value) => cells.push(value),
                    Err(_) => return Err(ParseError::InvalidEntry(token.to_string())),
                },
            }
        }

        let side = (1..=225u8)
            .find(|&side| side as usize * side as usize == cells.len())
            .ok_or_else(|| ParseError::WrongCellCount(cells.len()))?;
        let size = GridSize::new(side)?;

        if let Some(&value) = cells.iter().find(|&&value| value > size.get()) {
            return Err(InvalidCellValueError {
                value,
                size: size.get(),
            }
            .into());
        }
        Ok(Grid { size, cells })
    }

    /// Creates a puzzle of the given size with randomly placed clues.
    ///
    /// Roughly 30% of the cells receive a uniformly random digit. The
    /// result is not checked for legality, let alone solvability, so
    /// [`Grid::solve`] may well return `false` on it.
    pub fn generate(size: GridSize) -> Grid {
        generator::random_puzzle(size, &mut rand::thread_rng())
    }

    /// Same as [`Grid::generate`], but with a caller-supplied source of
    /// randomness. Deterministic for a seeded RNG.
    pub fn generate_with_rng<R: Rng>(size: GridSize, rng: &mut R) -> Grid {
        generator::random_puzzle(size, rng)
    }

    /// Returns the size of the grid.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the value at `(row, col)`, 0 for an empty cell.
    ///
    /// # Panics
    /// Panics, if `row` or `col` is not below the grid size.
    pub fn get(&self, row: u8, col: u8) -> u8 {
        self.cells[self.cell_index(row, col)]
    }

    /// Sets the value at `(row, col)`. 0 clears the cell.
    ///
    /// Fails if `num` exceeds the grid size. No legality check is
    /// performed, use [`Grid::is_safe`] for that.
    ///
    /// # Panics
    /// Panics, if `row` or `col` is not below the grid size.
    pub fn set(&mut self, row: u8, col: u8, num: u8) -> Result<(), InvalidCellValueError> {
        if num > self.size.get() {
            return Err(InvalidCellValueError {
                value: num,
                size: self.size.get(),
            });
        }
        self.set_raw(row, col, num);
        Ok(())
    }

    pub(crate) fn set_raw(&mut self, row: u8, col: u8, num: u8) {
        let idx = self.cell_index(row, col);
        self.cells[idx] = num;
    }

    fn cell_index(&self, row: u8, col: u8) -> usize {
        let size = self.size.get();
        assert!(row < size && col < size);
        row as usize * size as usize + col as usize
    }

    /// Checks whether `num` may be placed at `(row, col)` without
    /// duplicating a value in the cell's row, column or box.
    ///
    /// The current content of the target cell itself is ignored; callers
    /// are expected to ask about cells they treat as empty.
    ///
    /// # Panics
    /// Panics, if `row` or `col` is not below the grid size or `num` is
    /// not in `1..=size`.
    pub fn is_safe(&self, row: u8, col: u8, num: u8) -> bool {
        assert!(num >= 1 && num <= self.size.get());
        solver::is_safe(self, row, col, num)
    }

    /// Tries to find a solution to the sudoku and fills it in.
    /// Returns true if a solution was found.
    ///
    /// On failure the grid is left exactly as it was before the call.
    /// Note that cells filled before the call are trusted blindly: a grid
    /// that already breaks the one-digit-per-row/column/box rule produces
    /// garbage, not an error.
    pub fn solve(&mut self) -> bool {
        solver::solve(self)
    }

    /// Fills one empty cell with a digit that is safe at the time of the
    /// call and returns true. Returns false if no such placement exists.
    ///
    /// The placement is greedy: it is legal right now but carries no
    /// guarantee of being part of a full solution, so repeated hints can
    /// paint the puzzle into a corner.
    pub fn hint(&mut self) -> bool {
        solver::hint(self)
    }

    /// Returns the position of the first empty cell in row-major order.
    pub(crate) fn first_empty(&self) -> Option<(u8, u8)> {
        let size = self.size.get();
        self.cells
            .iter()
            .position(|&cell| cell == 0)
            .map(|idx| ((idx / size as usize) as u8, (idx % size as usize) as u8))
    }

    /// Checks whether every cell is filled.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|&cell| cell != 0)
    }

    /// Checks whether no row, column or box contains a nonzero value
    /// twice. Empty cells are allowed.
    pub fn is_legal(&self) -> bool {
        let size = self.size.get();
        let box_size = self.size.box_size();
        for row in 0..size {
            if !self.no_duplicates((0..size).map(|col| (row, col))) {
                return false;
            }
        }
        for col in 0..size {
            if !self.no_duplicates((0..size).map(|row| (row, col))) {
                return false;
            }
        }
        for band in (0..size).step_by(box_size as usize) {
            for stack in (0..size).step_by(box_size as usize) {
                let cells = (0..box_size)
                    .flat_map(|r| (0..box_size).map(move |c| (band + r, stack + c)));
                if !self.no_duplicates(cells) {
                    return false;
                }
            }
        }
        true
    }

    fn no_duplicates(&self, cells: impl Iterator<Item = (u8, u8)>) -> bool {
        let mut seen = vec![false; self.size.get() as usize + 1];
        for (row, col) in cells {
            let num = self.get(row, col) as usize;
            if num != 0 {
                if seen[num] {
                    return false;
                }
                seen[num] = true;
            }
        }
        true
    }

    /// Checks whether the sudoku is solved, i.e. completely filled and
    /// legal.
    pub fn is_solved(&self) -> bool {
        self.is_filled() && self.is_legal()
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }

    /// Returns an iterator over the grid, going from left to right, top
    /// to bottom.
    pub fn iter(&self) -> Iter<'_> {
        self.cells.iter().map(num_to_opt)
    }
}

fn num_to_opt(num: &u8) -> Option<u8> {
    if *num == 0 {
        None
    } else {
        Some(*num)
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Grid, ParseError> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size.get();
        let box_size = self.size.box_size();
        let width = if size >= 100 {
            3
        } else if size >= 10 {
            2
        } else {
            1
        };
        // width of a printed row, for the separator lines between bands
        let line_len =
            size as usize * (width + 1) - 1 + (box_size as usize - 1) * 2;

        for row in 0..size {
            if row != 0 && row % box_size == 0 {
                writeln!(f, "{}", "-".repeat(line_len))?;
            }
            for col in 0..size {
                if col != 0 {
                    if col % box_size == 0 {
                        write!(f, " | ")?;
                    } else {
                        write!(f, " ")?;
                    }
                }
                match self.get(row, col) {
                    0 => write!(f, "{:>width$}", ".", width = width)?,
                    num => write!(f, "{:>width$}", num, width = width)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
