//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! history storage so the game state can call them on any snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, detect_winner, is_winning_square};
