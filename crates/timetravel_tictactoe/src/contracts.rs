//! Contract-based validation for game-state transitions.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. Preconditions
//! are always checked; postconditions run in debug builds.

use super::error::GameError;
use super::game::GameState;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::position::Position;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the board at the current step has no winner.
pub struct GameUndecided;

impl GameUndecided {
    /// Fails with [`GameError::GameOver`] on a won board.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), GameError> {
        if game.current_winner().is_some() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`GameError::SquareOccupied`] on a filled square.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &GameState) -> Result<(), GameError> {
        if game.current_board().is_empty(position.to_index()) {
            Ok(())
        } else {
            Err(GameError::SquareOccupied(position))
        }
    }
}

/// Precondition: a jump target indexes an existing snapshot.
pub struct StepExists;

impl StepExists {
    /// Fails with [`GameError::StepOutOfRange`] past the end of history.
    #[instrument(skip(game))]
    pub fn check(step: usize, game: &GameState) -> Result<(), GameError> {
        let len = game.history().len();
        if step < len {
            Ok(())
        } else {
            Err(GameError::StepOutOfRange { step, len })
        }
    }
}

/// Runs every history invariant, folding violations into one error.
pub(crate) fn invariants_hold(game: &GameState) -> Result<(), GameError> {
    HistoryInvariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(count = violations.len(), "History invariants violated");
        GameError::InvariantViolation(descriptions)
    })
}

// ─────────────────────────────────────────────────────────────
//  Move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for playing a square.
///
/// Preconditions:
/// - The current board has no winner
/// - The square is empty
///
/// Postconditions:
/// - History invariants hold
/// - History is the old prefix up to the old step plus one new entry
/// - The new entry is current and the order flag is untouched
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(game: &GameState, position: &Position) -> Result<(), GameError> {
        GameUndecided::check(game)?;
        SquareIsEmpty::check(*position, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        invariants_hold(after)?;

        let kept = before.step() + 1;
        let branched = after.history().len() == kept + 1
            && after.history()[..kept] == before.history()[..kept]
            && after.step() == kept
            && after.ascending() == before.ascending();

        if branched {
            Ok(())
        } else {
            Err(GameError::InvariantViolation(
                "Postcondition failed: move must truncate then append one entry".to_string(),
            ))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Contract for jumping to a history step.
///
/// A jump only moves the step pointer; history and order stay as they were.
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    fn pre(game: &GameState, step: &usize) -> Result<(), GameError> {
        StepExists::check(*step, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        invariants_hold(after)?;

        if after.history() == before.history() && after.ascending() == before.ascending() {
            Ok(())
        } else {
            Err(GameError::InvariantViolation(
                "Postcondition failed: jump must not touch history".to_string(),
            ))
        }
    }
}
