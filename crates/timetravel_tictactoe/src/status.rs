//! Derived game status.

use super::rules::WinningLine;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// Status of the board at the current step.
///
/// Always derived from the displayed snapshot, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// A player completed a line.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line.
        line: WinningLine,
    },
    /// Every square is filled and nobody won.
    Draw,
    /// The game continues.
    InProgress {
        /// Player to move.
        next: Player,
    },
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Won { winner, .. } => write!(f, "Winner: {}", winner),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
        }
    }
}
