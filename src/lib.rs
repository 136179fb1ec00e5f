//! Time-travel tic-tac-toe application.
//!
//! Wraps the pure game logic in [`timetravel_tictactoe`] with a terminal
//! UI, a non-interactive replay mode, and a TOML settings file.
//!
//! # Architecture
//!
//! - **Cli**: command-line arguments
//! - **Settings**: optional TOML configuration
//! - **Replay**: plays scripted cells and renders the result as text
//! - **Tui**: ratatui front end that reports user input to the game state

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use replay::{ReplayReport, render_report, replay};
