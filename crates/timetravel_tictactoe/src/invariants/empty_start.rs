//! Empty start invariant: history opens with an empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: the first history entry is the empty board with no position.
pub struct EmptyStartInvariant;

impl Invariant<GameState> for EmptyStartInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .first()
            .is_some_and(|first| *first.board() == Board::new() && first.position().is_none())
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}
