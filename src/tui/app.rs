//! Application state and logic.

use super::input::{Action, Direction, move_cursor};
use timetravel_tictactoe::{GameState, Position};
use tracing::{debug, info, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The board; arrows move the cursor.
    Board,
    /// The history list; arrows move the selection.
    History,
}

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Leave the loop.
    Quit,
}

/// Main application state.
///
/// The app forwards user input to [`GameState`] and keeps only view state
/// (cursor, focus, list selection, last message) of its own.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    message: Option<String>,
}

impl App {
    /// Creates an app with a fresh game.
    #[instrument]
    pub fn new(ascending: bool) -> Self {
        let mut game = GameState::new();
        if !ascending {
            game.toggle_order();
        }
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            message: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step highlighted in the list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Text for the status bar: the last error if any, else the game status.
    pub fn status_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| self.game.status().to_string())
    }

    /// Row of the selected step in the displayed list.
    pub fn selected_row(&self) -> usize {
        if self.game.ascending() {
            self.selected_step
        } else {
            self.game.latest_step() - self.selected_step
        }
    }

    /// Applies an action.
    #[instrument(skip(self), fields(step = self.game.step(), focus = ?self.focus))]
    pub fn handle(&mut self, action: Action) -> Control {
        match action {
            Action::Quit => {
                info!("Quitting");
                return Control::Quit;
            }
            Action::Navigate(direction) => self.navigate(direction),
            Action::Select => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump(self.selected_step),
            },
            Action::Play(position) => {
                self.cursor = position;
                self.focus = Focus::Board;
                self.play(position);
            }
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected_step = self.game.step();
            }
            Action::ToggleOrder => self.game.toggle_order(),
            Action::Restart => {
                debug!("Restarting game");
                *self = Self::new(self.game.ascending());
            }
        }
        Control::Continue
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::History => {
                // Up means towards the top of the list, whichever order it is in.
                let towards_start = (direction == Direction::Up) == self.game.ascending();
                self.selected_step = match direction {
                    Direction::Up | Direction::Down if towards_start => self.selected_step.saturating_sub(1),
                    Direction::Up | Direction::Down => (self.selected_step + 1).min(self.game.latest_step()),
                    Direction::Left | Direction::Right => self.selected_step,
                };
            }
        }
    }

    fn play(&mut self, position: Position) {
        match self.game.apply_move(position) {
            Ok(coordinates) => {
                debug!(%coordinates, "Move played");
                self.message = None;
                self.selected_step = self.game.step();
            }
            Err(e) => self.message = Some(format!("Invalid move: {}", e)),
        }
    }

    fn jump(&mut self, step: usize) {
        match self.game.jump_to_step(step) {
            Ok(()) => self.message = None,
            Err(e) => self.message = Some(e.to_string()),
        }
    }
}
