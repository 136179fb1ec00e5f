//! Errors raised by game-state transitions.

use crate::Position;

/// Broad category of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GameErrorKind {
    /// The move cannot be played on the current board.
    #[display("invalid move")]
    InvalidMove,
    /// An argument lies outside its valid range.
    #[display("invalid argument")]
    InvalidArgument,
    /// A transition broke a game invariant.
    #[display("invariant violation")]
    Invariant,
}

/// Error that can occur when applying a move or jumping through history.
///
/// A failed transition never changes the game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The board at the current step already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// A raw cell index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// A history step outside `[0, len)`.
    #[display("Step {} out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

impl GameError {
    /// Returns the category of this error.
    pub fn kind(&self) -> GameErrorKind {
        match self {
            GameError::SquareOccupied(_) | GameError::GameOver | GameError::OutOfBounds(_) => {
                GameErrorKind::InvalidMove
            }
            GameError::StepOutOfRange { .. } => GameErrorKind::InvalidArgument,
            GameError::InvariantViolation(_) => GameErrorKind::Invariant,
        }
    }
}
