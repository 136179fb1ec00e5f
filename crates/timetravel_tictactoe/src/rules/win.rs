//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in detection priority order.
pub const LINES: [[usize; 3]; 8] = [
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

/// Three collinear board indices sharing one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    /// The three indices, in line order.
    pub fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Whether `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// The player whose mark fills this line on `board`.
    pub fn player(&self, board: &Board) -> Option<Player> {
        board.squares()[self.0[0]].player()
    }
}

/// Returns the first line whose three squares hold the same mark.
///
/// Rows are checked top to bottom, then columns left to right, then the
/// two diagonals.
#[instrument(skip(board))]
pub fn detect_winner(board: &Board) -> Option<WinningLine> {
    let squares = board.squares();
    LINES.into_iter().find_map(|[a, b, c]| {
        let sq = squares[a];
        (sq != Square::Empty && sq == squares[b] && sq == squares[c]).then_some(WinningLine([a, b, c]))
    })
}

/// Membership test for highlighting; false when there is no winner.
pub fn is_winning_square(line: Option<&WinningLine>, index: usize) -> bool {
    line.is_some_and(|line| line.contains(index))
}
