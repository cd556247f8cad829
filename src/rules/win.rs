//! Win condition checking
//!
//! Three identical non-empty marks on a row, column or diagonal win.
//! Lines are scanned in a fixed order and the first match is reported.

use crate::board::{Board, Mark, Pos};

/// The 8 winning triples as row-major cell indices
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    pub winner: Mark,
    pub line: [Pos; 3],
}

impl Win {
    /// Winning cells as indices, in line order
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Pos::to_index)
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.line.contains(&pos)
    }
}

/// Find the first completed line on the board
pub fn find_win(board: &Board) -> Option<Win> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if !mark.is_empty() && mark == cells[b] && mark == cells[c] {
            Some(Win {
                winner: mark,
                line: [a, b, c].map(Pos::from_index),
            })
        } else {
            None
        }
    })
}

/// No line completed and no empty cell left
#[inline]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && find_win(board).is_none()
}
