//! The board: grid storage, cell access and constraint checks.

mod display;
mod grid;

pub use self::grid::Board;
