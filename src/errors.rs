//! Errors for board construction, access and mutation.

#[cfg(doc)]
use crate::Board;

/// Error for [`Board::new`]
#[derive(Debug, thiserror::Error)]
#[error("board block size must be at least 2, found {0}")]
pub struct InvalidSizeError(pub usize);

/// A row or column index outside `0..side_length`.
#[derive(Debug, thiserror::Error)]
pub enum OutOfRangeError {
    /// The row index is out of range.
    #[error("row {0} is out of range")]
    Row(usize),
    /// The column index is out of range.
    #[error("column {0} is out of range")]
    Column(usize),
}

/// A non-empty value outside the board's value domain.
#[derive(Debug, thiserror::Error)]
#[error("value {value} is outside the valid range 1..={side_length}")]
pub struct InvalidValueError {
    /// The rejected value.
    pub value: u32,
    /// The board's side length, i.e. the largest legal value.
    pub side_length: u32,
}

/// A value that would duplicate an existing one in its row, column or block.
#[derive(Debug, thiserror::Error)]
#[error("{value} cannot be placed at row {row}, column {col}")]
pub struct ConstraintViolationError {
    /// The conflicting value.
    pub value: u32,
    /// Row of the attempted write.
    pub row: usize,
    /// Column of the attempted write.
    pub col: usize,
}

/// Error constructing a [`Board`] from raw, untrusted data, e.g. when
/// deserializing (feature `serde`).
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum InvalidBoardError {
    /// The block size is too small.
    #[error(transparent)]
    InvalidSize(#[from] InvalidSizeError),
    /// The stored side length does not match the block size.
    #[error("side length {found} does not match block size {block_size}")]
    WrongSideLength {
        /// The stored block size.
        block_size: usize,
        /// The stored side length.
        found: usize,
    },
    /// The grid holds the wrong number of cells.
    #[error("grid has {found} cells, expected {expected}")]
    WrongLength {
        /// The number of cells a `side_length × side_length` grid must hold.
        expected: usize,
        /// The number of cells found.
        found: usize,
    },
    /// A cell holds a value outside the board's value domain.
    #[error(transparent)]
    InvalidValue(#[from] InvalidValueError),
}

/// Error for [`Board::set_cell`]
#[derive(Debug, thiserror::Error)]
pub enum SetCellError {
    /// The coordinate lies outside the grid.
    #[error(transparent)]
    OutOfRange(#[from] OutOfRangeError),
    /// The value lies outside the board's value domain.
    #[error(transparent)]
    InvalidValue(#[from] InvalidValueError),
    /// The value would duplicate within its row, column or block.
    #[error(transparent)]
    ConstraintViolation(#[from] ConstraintViolationError),
}
