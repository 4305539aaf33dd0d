//! Errors returned when constructing grids from untrusted input
#[cfg(doc)]
use crate::{Grid, GridSize};

/// Error for [`GridSize::new`]
#[derive(Debug, thiserror::Error)]
#[error("grid size must be a perfect square between 4 and 225, found {0}")]
pub struct InvalidSizeError(pub(crate) u8);

/// Error for cell values outside `0..=size`
#[derive(Debug, thiserror::Error)]
#[error("cell value {value} out of range for a {size}x{size} grid")]
pub struct InvalidCellValueError {
    /// The offending value
    pub value: u8,
    /// Side length of the grid it was destined for
    pub size: u8,
}

/// Error for [`Grid::from_cells`]
#[derive(Debug, thiserror::Error)]
pub enum FromCellsError {
    /// Cell count doesn't match the grid size
    #[error("cell slice should have length {expected}, found {found}")]
    WrongLength {
        /// `size * size`
        expected: usize,
        /// Length of the slice that was supplied
        found: usize,
    },
    /// A cell contains a value larger than the grid size
    #[error(transparent)]
    InvalidCellValue(#[from] InvalidCellValueError),
}

/// Error for [`Grid::parse`]
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Token that is neither a number nor an empty-cell placeholder
    #[error("invalid cell entry '{0}'")]
    InvalidEntry(String),
    /// Cell count is not the square of any side length
    #[error("expected a square number of cells, found {0}")]
    WrongCellCount(usize),
    /// Cell count implies a side length that is not a perfect square
    #[error(transparent)]
    InvalidSize(#[from] InvalidSizeError),
    /// A cell contains a value larger than the grid size
    #[error(transparent)]
    InvalidCellValue(#[from] InvalidCellValueError),
}
