//! Command-line interface for timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Timetravel - tic-tac-toe with move history
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (ignored if missing)
    #[arg(long, global = true, default_value = "timetravel.toml")]
    pub config: PathBuf,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// List history newest first
    #[arg(long, global = true)]
    pub descending: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Play cells in order and print the resulting game
    Replay {
        /// Board indices (0-8, row-major), alternating X then O
        cells: Vec<usize>,

        /// Jump to this history step after playing
        #[arg(long)]
        jump: Option<usize>,
    },
}
