#![warn(missing_docs)]
//! A generalized sudoku board with constraint validation and a backtracking
//! solver.
//!
//! The grid is `N² × N²` for a configurable block size `N`; classic sudoku is
//! `N = 3`. [`Board`] owns the grid and validates every mutation, so a board
//! observable from the outside never contains a duplicate in any row, column
//! or block. [`Solver`] fills the remaining cells in place by exhaustive
//! backtracking and reports whether a completion exists.
//!
//! ## Example
//!
//! ```
//! use sudoku_board::{Board, Solver};
//!
//! // A 4×4 board (block size 2) with three givens.
//! let mut board = Board::new(2).unwrap();
//! board.set_cell(0, 0, Some(1)).unwrap();
//! board.set_cell(0, 1, Some(2)).unwrap();
//! board.set_cell(1, 0, Some(3)).unwrap();
//!
//! assert!(Solver::new(&mut board).solve());
//! // Only 4 completes the top-left block.
//! assert_eq!(board.cell(1, 1).unwrap(), Some(4));
//! assert!(board.is_board_valid());
//! println!("{}", board);
//! ```

pub mod errors;

mod board;
mod solver;

pub use crate::board::Board;
pub use crate::solver::Solver;
