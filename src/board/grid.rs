use std::ops::RangeInclusive;

use crate::errors::{
    ConstraintViolationError, InvalidSizeError, InvalidValueError, OutOfRangeError, SetCellError,
};

/// A generalized sudoku board.
///
/// The grid is `side_length × side_length` with `side_length = block_size²`,
/// stored row-major. A cell holds `None` (empty) or `Some(v)` with `v` in
/// `1..=side_length`. Every mutation goes through [`Board::set_cell`], which
/// rejects writes that would duplicate a value within a row, column or block,
/// so the board is valid whenever it is externally observable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "serde_impl::RawBoard"))]
pub struct Board {
    block_size: usize,
    side_length: usize,
    grid: Vec<Option<u32>>,
}

impl Board {
    /// Creates an empty board with the given block size.
    ///
    /// Classic sudoku has block size 3, i.e. a 9×9 grid. Sizes below 2 are
    /// rejected with [`InvalidSizeError`].
    pub fn new(block_size: usize) -> Result<Board, InvalidSizeError> {
        if block_size < 2 {
            return Err(InvalidSizeError(block_size));
        }
        let side_length = block_size * block_size;
        Ok(Board {
            block_size,
            side_length,
            grid: vec![None; side_length * side_length],
        })
    }

    /// Returns the block size `N`, the width of one block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the side length `N²`, the width of the full grid and the
    /// largest legal cell value.
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Returns the value of the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Option<u32>, OutOfRangeError> {
        self.check_coords(row, col)?;
        Ok(self.grid[self.index(row, col)])
    }

    /// Returns the cells of `row`, left to right.
    pub fn row(&self, row: usize) -> Result<&[Option<u32>], OutOfRangeError> {
        self.check_row(row)?;
        let start = row * self.side_length;
        Ok(&self.grid[start..start + self.side_length])
    }

    /// Returns the cells of `col`, top to bottom.
    pub fn column(&self, col: usize) -> Result<Vec<Option<u32>>, OutOfRangeError> {
        self.check_col(col)?;
        Ok(self.column_cells(col).collect())
    }

    /// Returns the cells of the block containing `(row, col)`, in row-major
    /// order.
    ///
    /// The block is the `N×N` sub-grid whose top-left corner is at
    /// `((row / N)·N, (col / N)·N)`.
    pub fn block(&self, row: usize, col: usize) -> Result<Vec<Option<u32>>, OutOfRangeError> {
        self.check_coords(row, col)?;
        Ok(self.block_cells(row, col).collect())
    }

    /// Returns the domain of legal non-empty cell values, `1..=side_length`.
    pub fn value_domain(&self) -> RangeInclusive<u32> {
        1..=self.side_length as u32
    }

    /// Returns an iterator over all cells, going from left to right, top to
    /// bottom.
    pub fn iter(&self) -> impl Iterator<Item = Option<u32>> + '_ {
        self.grid.iter().copied()
    }

    /// Writes `value` to the cell at `(row, col)`; `None` clears it.
    ///
    /// The write is validated: a value outside the board's domain fails with
    /// [`InvalidValueError`], and a value that would duplicate within the
    /// affected row, column or block is rolled back and fails with
    /// [`ConstraintViolationError`], leaving the grid as it was.
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: Option<u32>,
    ) -> Result<(), SetCellError> {
        if let Some(value) = value {
            if value == 0 || value > self.side_length as u32 {
                return Err(InvalidValueError {
                    value,
                    side_length: self.side_length as u32,
                }
                .into());
            }
        }
        self.check_coords(row, col)?;

        let idx = self.index(row, col);
        let previous = self.grid[idx];
        self.grid[idx] = value;

        // Clearing a cell cannot introduce a duplicate.
        if let Some(value) = value {
            let ok = self.duplicate_free(self.row_cells(row))
                && self.duplicate_free(self.column_cells(col))
                && self.duplicate_free(self.block_cells(row, col));
            if !ok {
                self.grid[idx] = previous;
                return Err(ConstraintViolationError { value, row, col }.into());
            }
        }
        Ok(())
    }

    /// Returns whether `row` contains no duplicate non-empty values.
    pub fn is_row_valid(&self, row: usize) -> Result<bool, OutOfRangeError> {
        self.check_row(row)?;
        Ok(self.duplicate_free(self.row_cells(row)))
    }

    /// Returns whether `col` contains no duplicate non-empty values.
    pub fn is_column_valid(&self, col: usize) -> Result<bool, OutOfRangeError> {
        self.check_col(col)?;
        Ok(self.duplicate_free(self.column_cells(col)))
    }

    /// Returns whether the block containing `(row, col)` contains no
    /// duplicate non-empty values.
    pub fn is_block_valid(&self, row: usize, col: usize) -> Result<bool, OutOfRangeError> {
        self.check_coords(row, col)?;
        Ok(self.duplicate_free(self.block_cells(row, col)))
    }

    /// Returns whether every row, column and block is duplicate-free.
    pub fn is_board_valid(&self) -> bool {
        let n = self.block_size;
        (0..self.side_length).all(|i| {
            self.duplicate_free(self.row_cells(i))
                && self.duplicate_free(self.column_cells(i))
                && self.duplicate_free(self.block_cells(i / n * n, i % n * n))
        })
    }

    // In-bounds accessors for the solver's traversal, which only ever visits
    // valid coordinates.
    pub(crate) fn cell_unchecked(&self, row: usize, col: usize) -> Option<u32> {
        self.grid[self.index(row, col)]
    }

    pub(crate) fn set_cell_unchecked(&mut self, row: usize, col: usize, value: Option<u32>) {
        let idx = self.index(row, col);
        self.grid[idx] = value;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.side_length + col
    }

    fn check_row(&self, row: usize) -> Result<(), OutOfRangeError> {
        if row < self.side_length {
            Ok(())
        } else {
            Err(OutOfRangeError::Row(row))
        }
    }

    fn check_col(&self, col: usize) -> Result<(), OutOfRangeError> {
        if col < self.side_length {
            Ok(())
        } else {
            Err(OutOfRangeError::Column(col))
        }
    }

    fn check_coords(&self, row: usize, col: usize) -> Result<(), OutOfRangeError> {
        self.check_row(row)?;
        self.check_col(col)
    }

    fn row_cells(&self, row: usize) -> impl Iterator<Item = Option<u32>> + '_ {
        let start = row * self.side_length;
        self.grid[start..start + self.side_length].iter().copied()
    }

    fn column_cells(&self, col: usize) -> impl Iterator<Item = Option<u32>> + '_ {
        (0..self.side_length).map(move |row| self.grid[self.index(row, col)])
    }

    fn block_cells(&self, row: usize, col: usize) -> impl Iterator<Item = Option<u32>> + '_ {
        let n = self.block_size;
        let top = row / n * n;
        let left = col / n * n;
        (0..n).flat_map(move |dr| (0..n).map(move |dc| self.grid[self.index(top + dr, left + dc)]))
    }

    fn duplicate_free<I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = Option<u32>>,
    {
        let mut seen = vec![false; self.side_length];
        for value in values.into_iter().flatten() {
            let slot = &mut seen[value as usize - 1];
            if *slot {
                return false;
            }
            *slot = true;
        }
        true
    }
}

impl Default for Board {
    /// The classic empty 9×9 board (block size 3).
    fn default() -> Board {
        Board {
            block_size: 3,
            side_length: 9,
            grid: vec![None; 81],
        }
    }
}

// Deserialization goes through an untrusted mirror of the board, so a board
// read back from serialized data upholds the same invariants as a constructed
// one: consistent dimensions and every value inside the domain.
#[cfg(feature = "serde")]
mod serde_impl {
    use std::convert::TryFrom;

    use super::Board;
    use crate::errors::{InvalidBoardError, InvalidValueError};

    #[derive(serde::Deserialize)]
    pub(crate) struct RawBoard {
        block_size: usize,
        side_length: usize,
        grid: Vec<Option<u32>>,
    }

    impl TryFrom<RawBoard> for Board {
        type Error = InvalidBoardError;

        fn try_from(raw: RawBoard) -> Result<Board, InvalidBoardError> {
            let board = Board::new(raw.block_size)?;
            if raw.side_length != board.side_length {
                return Err(InvalidBoardError::WrongSideLength {
                    block_size: raw.block_size,
                    found: raw.side_length,
                });
            }
            if raw.grid.len() != board.grid.len() {
                return Err(InvalidBoardError::WrongLength {
                    expected: board.grid.len(),
                    found: raw.grid.len(),
                });
            }
            for &value in raw.grid.iter().flatten() {
                if value == 0 || value > board.side_length as u32 {
                    return Err(InvalidValueError {
                        value,
                        side_length: board.side_length as u32,
                    }
                    .into());
                }
            }
            Ok(Board {
                grid: raw.grid,
                ..board
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_is_gathered_row_major() {
        let mut board = Board::new(2).unwrap();
        board.set_cell(2, 2, Some(1)).unwrap();
        board.set_cell(2, 3, Some(2)).unwrap();
        board.set_cell(3, 2, Some(3)).unwrap();
        board.set_cell(3, 3, Some(4)).unwrap();
        // Any coordinate within the block selects the same block.
        for &(row, col) in &[(2, 2), (2, 3), (3, 2), (3, 3)] {
            assert_eq!(
                board.block(row, col).unwrap(),
                vec![Some(1), Some(2), Some(3), Some(4)]
            );
        }
    }

    #[test]
    fn column_is_gathered_top_to_bottom() {
        let mut board = Board::new(2).unwrap();
        board.set_cell(0, 1, Some(3)).unwrap();
        board.set_cell(3, 1, Some(4)).unwrap();
        assert_eq!(board.column(1).unwrap(), vec![Some(3), None, None, Some(4)]);
    }

    #[test]
    fn rollback_leaves_prior_value_in_place() {
        let mut board = Board::new(2).unwrap();
        board.set_cell(0, 0, Some(1)).unwrap();
        board.set_cell(1, 1, Some(2)).unwrap();
        // Overwriting (1, 1) with 1 collides in the block; the 2 must survive.
        assert!(board.set_cell(1, 1, Some(1)).is_err());
        assert_eq!(board.cell(1, 1).unwrap(), Some(2));
    }

    #[test]
    fn board_validity_sees_planted_duplicates() {
        let mut board = Board::new(2).unwrap();
        board.set_cell_unchecked(0, 0, Some(1));
        board.set_cell_unchecked(0, 2, Some(1));
        assert!(!board.is_row_valid(0).unwrap());
        assert!(board.is_column_valid(0).unwrap());
        assert!(board.is_block_valid(0, 0).unwrap());
        assert!(!board.is_board_valid());
    }

    #[test]
    fn block_duplicate_alone_invalidates_the_board() {
        // Same block, different row and column: only the block check can
        // catch it.
        let mut board = Board::new(2).unwrap();
        board.set_cell_unchecked(0, 0, Some(1));
        board.set_cell_unchecked(1, 1, Some(1));
        assert!(board.is_row_valid(0).unwrap());
        assert!(board.is_row_valid(1).unwrap());
        assert!(board.is_column_valid(0).unwrap());
        assert!(board.is_column_valid(1).unwrap());
        assert!(!board.is_block_valid(0, 0).unwrap());
        assert!(!board.is_board_valid());
    }

    #[test]
    fn value_domain_matches_side_length() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.value_domain(), 1..=16);
        assert_eq!(board.value_domain().count(), board.side_length());
    }
}
