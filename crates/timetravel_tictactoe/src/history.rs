//! History snapshots.
//!
//! Every entry in a game's history is a full board snapshot, so jumping to
//! a step never replays moves.

use super::position::Coordinates;
use super::types::Board;
use serde::{Deserialize, Serialize};

/// A board snapshot plus the cell filled to reach it.
///
/// The opening entry has no coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    board: Board,
    position: Option<Coordinates>,
}

impl Move {
    /// The empty starting snapshot.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// A snapshot produced by marking `position`.
    pub(crate) fn played(board: Board, position: Coordinates) -> Self {
        Self {
            board,
            position: Some(position),
        }
    }

    /// The board after this move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates of the cell just filled, `None` for the starting entry.
    pub fn position(&self) -> Option<Coordinates> {
        self.position
    }

    /// Label for the history entry at `step`.
    pub fn description(&self, step: usize) -> String {
        match self.position {
            Some(coords) if step > 0 => format!("Go to move #{} {}", step, coords),
            _ => "Go to game start".to_string(),
        }
    }

}

/// One line of the history list shown by a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListItem {
    /// Step this item jumps to.
    pub step: usize,
    /// Button label, e.g. `Go to move #3 (1, 2)`.
    pub description: String,
    /// Whether this is the step currently displayed.
    pub is_current: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_description() {
        assert_eq!(Move::start().description(0), "Go to game start");
        assert_eq!(Move::start().position(), None);
    }

    #[test]
    fn test_played_description() {
        let mov = Move::played(Board::new(), Coordinates::new(3, 2));
        assert_eq!(mov.description(4), "Go to move #4 (3, 2)");
    }
}
