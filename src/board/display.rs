use std::fmt::{self, Formatter};

use super::Board;

/* Example output (block size 2)
┌─────┬─────┐
│ 1 2 │ _ _ │
│ 3 _ │ _ _ │
├─────┼─────┤
│ _ _ │ _ _ │
│ _ _ │ _ _ │
└─────┴─────┘
*/

impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let n = self.block_size();
        // Wide enough for the largest value on this board.
        let width = self.side_length().to_string().len();
        let segment = n * (width + 1) + 1;

        let print_rule = |f: &mut Formatter, left: char, middle: char, right: &str| {
            write!(f, "{}", left)?;
            for band in 0..n {
                if band > 0 {
                    write!(f, "{}", middle)?;
                }
                write!(f, "{:─<1$}", "", segment)?;
            }
            write!(f, "{}", right)
        };

        print_rule(f, '┌', '┬', "┐\n")?;
        for row in 0..self.side_length() {
            if row > 0 && row % n == 0 {
                print_rule(f, '├', '┼', "┤\n")?;
            }
            write!(f, "│")?;
            for col in 0..self.side_length() {
                if col > 0 && col % n == 0 {
                    write!(f, " │")?;
                }
                match self.cell_unchecked(row, col) {
                    Some(value) => write!(f, " {:>w$}", value, w = width)?,
                    None => write!(f, " {:>w$}", '_', w = width)?,
                }
            }
            writeln!(f, " │")?;
        }
        print_rule(f, '└', '┴', "┘")
    }
}

#[test]
fn display_4x4() {
    let mut board = Board::new(2).unwrap();
    board.set_cell(0, 0, Some(1)).unwrap();
    board.set_cell(0, 1, Some(2)).unwrap();
    board.set_cell(1, 0, Some(3)).unwrap();
    let expected = "\
┌─────┬─────┐
│ 1 2 │ _ _ │
│ 3 _ │ _ _ │
├─────┼─────┤
│ _ _ │ _ _ │
│ _ _ │ _ _ │
└─────┴─────┘";
    assert_eq!(expected, format!("{}", board));
}
