//! Pure tic-tac-toe logic with move history and time travel.
//!
//! [`GameState`] records a full board snapshot after every move. Any
//! snapshot can be revisited with [`GameState::jump_to_step`]; playing from
//! an earlier snapshot discards the later ones. The next player, the
//! winner, and the game status are always derived from the displayed
//! snapshot.
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 4, 1, 3, 2] {
//!     game.apply_index(index).unwrap();
//! }
//! assert_eq!(game.current_winner().map(|l| l.indices()), Some([0, 1, 2]));
//! assert_eq!(game.status().winner(), Some(Player::X));
//!
//! game.jump_to_step(2).unwrap();
//! game.apply_index(8).unwrap();
//! assert_eq!(game.history().len(), 4);
//! assert!(matches!(game.status(), GameStatus::InProgress { next: Player::O }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use contracts::{Contract, GameUndecided, JumpContract, MoveContract, SquareIsEmpty, StepExists};
pub use error::{GameError, GameErrorKind};
pub use game::GameState;
pub use history::{Move, MoveListItem};
pub use position::{Coordinates, Position};
pub use rules::{WinningLine, detect_winner};
pub use status::GameStatus;
pub use types::{Board, Player, Square};
