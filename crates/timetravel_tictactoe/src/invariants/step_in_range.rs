//! Step range invariant.

use super::Invariant;
use crate::GameState;

/// Invariant: the current step indexes an existing history entry.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step lies within the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(StepInRangeInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_step_past_end_violates() {
        let mut game = GameState::new();
        game.step = 1;
        assert!(!StepInRangeInvariant::holds(&game));
    }
}
