//! Game state with full move history and time travel.
//!
//! The state stores only the snapshots, the current step, and the display
//! order. Whose turn it is, the current board, and the winner are all
//! derived from those on every read.

use super::contracts::{Contract, JumpContract, MoveContract, invariants_hold};
use super::error::GameError;
use super::history::{Move, MoveListItem};
use super::position::{Coordinates, Position};
use super::rules::{self, WinningLine};
use super::status::GameStatus;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe game with history.
///
/// ```
/// use timetravel_tictactoe::{GameState, Position};
///
/// let mut game = GameState::new();
/// game.apply_move(Position::Center).unwrap();
/// game.jump_to_step(0).unwrap();
/// assert!(game.is_x_next());
/// assert_eq!(game.history().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<Move>,
    pub(crate) step: usize,
    pub(crate) ascending: bool,
}

/// Wire form of [`GameState`], validated before it becomes one.
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<Move>,
    step: usize,
    ascending: bool,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    #[instrument(skip(raw), fields(step = raw.step, len = raw.history.len()))]
    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let game = Self {
            history: raw.history,
            step: raw.step,
            ascending: raw.ascending,
        };
        invariants_hold(&game)?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Move::start()],
            step: 0,
            ascending: true,
        }
    }

    /// Plays the current player's mark at `position`.
    ///
    /// Snapshots after the current step are discarded before the new one is
    /// appended, so playing from an earlier step overwrites the later branch.
    /// Returns the coordinates of the filled square.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the current board already has a winner.
    /// - [`GameError::SquareOccupied`] if the square is taken.
    ///
    /// The state is unchanged on error.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn apply_move(&mut self, position: Position) -> Result<Coordinates, GameError> {
        if let Err(e) = MoveContract::pre(self, &position) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let board = self
            .current_board()
            .with_mark(position.to_index(), self.next_player());
        let coordinates = position.coordinates();

        self.history.truncate(self.step + 1);
        self.history.push(Move::played(board, coordinates));
        self.step = self.history.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            warn!(error = %e, "Move broke an invariant, restoring previous state");
            *self = before;
            return Err(e);
        }

        debug!(%coordinates, new_step = self.step, "Move applied");
        Ok(coordinates)
    }

    /// Plays at a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfBounds`] for an index past 8, otherwise as
    /// [`GameState::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<Coordinates, GameError> {
        let position = Position::from_index(index).ok_or(GameError::OutOfBounds(index))?;
        self.apply_move(position)
    }

    /// Makes `step` the displayed snapshot.
    ///
    /// History is kept intact; the next player follows from the new step.
    ///
    /// # Errors
    ///
    /// [`GameError::StepOutOfRange`] if `step` does not index the history.
    /// The state is unchanged on error.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to_step(&mut self, step: usize) -> Result<(), GameError> {
        if let Err(e) = JumpContract::pre(self, &step) {
            warn!(error = %e, "Jump rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.step = step;

        #[cfg(debug_assertions)]
        if let Err(e) = JumpContract::post(&before, self) {
            warn!(error = %e, "Jump broke an invariant, restoring previous state");
            *self = before;
            return Err(e);
        }

        debug!(to = step, "Jumped to step");
        Ok(())
    }

    /// Flips the history display order.
    #[instrument(skip(self), fields(ascending = self.ascending))]
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Index of the newest snapshot.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// Whether the history list is shown oldest first.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.history[self.step].board()
    }

    /// Winning line on the current board, if any.
    pub fn current_winner(&self) -> Option<WinningLine> {
        rules::detect_winner(self.current_board())
    }

    /// X moves on even steps.
    pub fn is_x_next(&self) -> bool {
        self.step % 2 == 0
    }

    /// Player whose mark the next move places.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Status of the current board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        let won = self
            .current_winner()
            .and_then(|line| line.player(board).map(|winner| (line, winner)));
        match won {
            Some((line, winner)) => GameStatus::Won { winner, line },
            None if rules::is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress {
                next: self.next_player(),
            },
        }
    }

    /// Whether `index` lies on the current winning line.
    pub fn is_winning_square(&self, index: usize) -> bool {
        rules::is_winning_square(self.current_winner().as_ref(), index)
    }

    /// Squares that can be played from the current step.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.current_winner().is_some() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_board())
        }
    }

    /// History list items in display order.
    #[instrument(skip(self), fields(ascending = self.ascending))]
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let mut items: Vec<_> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, mov)| MoveListItem {
                step,
                description: mov.description(step),
                is_current: step == self.step,
            })
            .collect();

        if !self.ascending {
            items.reverse();
        }
        items
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(indices: &[usize]) -> GameState {
        let mut game = GameState::new();
        for &i in indices {
            game.apply_index(i).expect("legal move");
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert!(game.ascending());
        assert!(game.is_x_next());
        assert_eq!(*game.current_board(), Board::new());
        assert_eq!(game.current_winner(), None);
    }

    #[test]
    fn test_apply_move_returns_coordinates() {
        let mut game = GameState::new();
        let coords = game.apply_move(Position::MiddleRight).expect("legal move");
        assert_eq!(coords, Coordinates::new(3, 2));
        assert_eq!(game.history()[1].position(), Some(coords));
        assert_eq!(
            game.current_board().get(5),
            Some(Square::Occupied(Player::X))
        );
        assert!(!game.is_x_next());
    }

    #[test]
    fn test_marks_alternate() {
        let game = play(&[0, 4, 8]);
        let board = game.current_board();
        assert_eq!(board.get(0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(4), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(8), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_occupied_square_is_rejected_without_change() {
        let mut game = play(&[4]);
        let before = game.clone();
        assert_eq!(
            game.apply_move(Position::Center),
            Err(GameError::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut game = GameState::new();
        assert_eq!(game.apply_index(9), Err(GameError::OutOfBounds(9)));
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_won_board_rejects_moves() {
        let mut game = play(&[0, 4, 1, 3, 2]);
        let before = game.clone();
        assert_eq!(game.apply_index(8), Err(GameError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(GameState::new().status().to_string(), "Next player: X");
        assert_eq!(play(&[4]).status().to_string(), "Next player: O");
        assert_eq!(play(&[0, 4, 1, 3, 2]).status().to_string(), "Winner: X");
        assert_eq!(play(&[3, 0, 4, 1, 8, 2]).status().to_string(), "Winner: O");
        // X O X / O X X / O X O
        assert_eq!(
            play(&[0, 1, 2, 3, 4, 6, 5, 8, 7]).status(),
            GameStatus::Draw
        );
    }

    #[test]
    fn test_full_board_with_winner_is_won() {
        // X O X / O X O / O X X, decided on the last square
        let game = play(&[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert_eq!(game.status().to_string(), "Winner: X");
        assert_eq!(game.current_winner().map(|l| l.indices()), Some([0, 4, 8]));
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut game = play(&[0, 1]);
        let before = game.clone();
        assert_eq!(
            game.jump_to_step(3),
            Err(GameError::StepOutOfRange { step: 3, len: 3 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut game = play(&[0, 1, 2]);
        game.jump_to_step(1).expect("step in range");
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.latest_step(), 3);
        assert!(!game.is_x_next());
    }

    #[test]
    fn test_winning_squares_follow_current_step() {
        let mut game = play(&[0, 4, 1, 3, 2]);
        assert!(game.is_winning_square(0));
        assert!(game.is_winning_square(2));
        assert!(!game.is_winning_square(4));

        game.jump_to_step(4).expect("step in range");
        assert!(!game.is_winning_square(0));
        assert_eq!(game.valid_moves().len(), 5);
    }

    #[test]
    fn test_move_list_order_and_current_marker() {
        let mut game = play(&[4, 0]);
        let items = game.move_list();
        let labels: Vec<_> = items.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(
            labels,
            ["Go to game start", "Go to move #1 (2, 2)", "Go to move #2 (1, 1)"]
        );
        assert!(items[2].is_current);

        game.toggle_order();
        game.jump_to_step(1).expect("step in range");
        let steps: Vec<_> = game.move_list().iter().map(|i| i.step).collect();
        assert_eq!(steps, [2, 1, 0]);
        assert!(game.move_list()[1].is_current);
    }
}
