use crate::errors::InvalidSizeError;

// the box size is derived once at construction so the rest of the crate
// never has to deal with sizes that lack an integer square root
/// The validated side length of a sudoku grid.
///
/// Only perfect squares are valid side lengths, as the boxes of an `n x n`
/// sudoku are `sqrt(n) x sqrt(n)`. Cells are stored as `u8`, which caps the
/// side length at 225 (`15 * 15`).
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    size: u8,
    box_size: u8,
}

impl GridSize {
    /// Constructs a new `GridSize`. Returns an error unless `size` is a
    /// perfect square in `4..=225`.
    pub fn new(size: u8) -> Result<Self, InvalidSizeError> {
        (2..=15)
            .find(|&box_size| box_size * box_size == size)
            .map(|box_size| GridSize { size, box_size })
            .ok_or(InvalidSizeError(size))
    }

    /// Returns the side length contained within.
    pub fn get(self) -> u8 {
        self.size
    }

    /// Returns the side length of a box, i.e. `sqrt(size)`.
    pub fn box_size(self) -> u8 {
        self.box_size
    }

    /// Returns the total number of cells, i.e. `size * size`.
    pub fn n_cells(self) -> usize {
        self.size as usize * self.size as usize
    }

    /// Returns an iterator over all digits that can be placed in a grid
    /// of this size, in ascending order.
    pub fn digits(self) -> impl Iterator<Item = u8> {
        1..=self.size
    }
}
