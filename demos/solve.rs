use sudoku_board::{Board, Solver};

fn main() {
    // A classic 9×9 puzzle; digits are givens, underscores are empty.
    let givens = "\
53__7____
6__195___
_98____6_
8___6___3
4__8_3__1
7___2___6
_6____28_
___419__5
____8__79";

    let mut board = Board::default();
    for (row, line) in givens.lines().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            if let Some(digit) = ch.to_digit(10) {
                board.set_cell(row, col, Some(digit)).unwrap();
            }
        }
    }

    println!("{}", board);
    if Solver::new(&mut board).solve() {
        println!("{}", board);
    } else {
        println!("no solution");
    }
}
