//! Backtracking search over the empty cells of a board.

use crate::board::Board;
use crate::errors::SetCellError;

/// An exhaustive backtracking solver.
///
/// The solver walks the cells in row-major order starting at the top-left
/// corner, skipping givens and trying candidates in ascending order in every
/// empty cell. Placements go through the board's validated setter, so a
/// rejected candidate leaves the grid untouched and the search moves on to
/// the next one. The first completion found wins.
pub struct Solver<'a> {
    board: &'a mut Board,
}

impl<'a> Solver<'a> {
    /// Creates a solver that fills `board` in place.
    pub fn new(board: &'a mut Board) -> Solver<'a> {
        Solver { board }
    }

    /// Tries to complete the board.
    ///
    /// Returns `true` if a solution was found; the board then holds a valid
    /// complete grid consistent with all givens. Returns `false` if no
    /// solution exists, in which case every cell the solver touched has been
    /// reset to empty and the board is in its pre-solve state.
    pub fn solve(&mut self) -> bool {
        self.solve_from(Some((0, 0)))
    }

    fn solve_from(&mut self, coord: Option<(usize, usize)>) -> bool {
        // The sentinel means the previous cell was the last one.
        let (row, col) = match coord {
            Some(coord) => coord,
            None => return true,
        };
        let next = self.next_cell(row, col);

        // Givens are skipped without choice.
        if self.board.cell_unchecked(row, col).is_some() {
            return self.solve_from(next);
        }

        for candidate in self.board.value_domain() {
            match self.board.set_cell(row, col, Some(candidate)) {
                Ok(()) => {
                    if self.solve_from(next) {
                        return true;
                    }
                    self.board.set_cell_unchecked(row, col, None);
                }
                Err(SetCellError::ConstraintViolation(_)) => continue,
                Err(_) => unreachable!("solver traversal stays inside the board"),
            }
        }

        // All candidates exhausted; leave the cell empty for the caller.
        self.board.set_cell_unchecked(row, col, None);
        false
    }

    /// Row-major successor of `(row, col)`; `None` past the bottom-right
    /// corner.
    fn next_cell(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        let last = self.board.side_length() - 1;
        if col < last {
            Some((row, col + 1))
        } else if row < last {
            Some((row + 1, 0))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_is_row_major_with_sentinel() {
        let mut board = Board::new(2).unwrap();
        let solver = Solver::new(&mut board);
        assert_eq!(solver.next_cell(0, 0), Some((0, 1)));
        assert_eq!(solver.next_cell(0, 3), Some((1, 0)));
        assert_eq!(solver.next_cell(2, 3), Some((3, 0)));
        assert_eq!(solver.next_cell(3, 3), None);
    }

    #[test]
    fn empty_board_solves_to_a_valid_grid() {
        let mut board = Board::new(2).unwrap();
        assert!(Solver::new(&mut board).solve());
        assert!(board.is_board_valid());
        assert!(board.iter().all(|cell| cell.is_some()));
    }

    #[test]
    fn solved_board_is_reported_solved() {
        let mut board = Board::new(2).unwrap();
        assert!(Solver::new(&mut board).solve());
        let solved = board.clone();
        assert!(Solver::new(&mut board).solve());
        assert_eq!(board, solved);
    }

    #[test]
    fn planted_duplicates_make_the_board_unsolvable() {
        // Two identical values in one row, planted past the validated setter.
        let mut board = Board::new(2).unwrap();
        board.set_cell_unchecked(0, 0, Some(1));
        board.set_cell_unchecked(0, 2, Some(1));
        let before = board.clone();
        assert!(!Solver::new(&mut board).solve());
        assert_eq!(board, before);
    }
}
