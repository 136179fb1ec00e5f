//! Timetravel - terminal tic-tac-toe with move history.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use timetravel::{Cli, Command, Settings, render_report, replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?.with_descending(cli.descending);
    let command = cli.command.unwrap_or(Command::Play);

    // The TUI owns the terminal, so it only logs to a file.
    let to_stderr = !matches!(command, Command::Play);
    initialize_tracing(&settings, cli.log_file.as_deref(), to_stderr)?;

    match command {
        Command::Play => tui::run(&settings),
        Command::Replay { cells, jump } => {
            info!(cells = cells.len(), ?jump, "Replaying moves");
            let report = replay(&cells, jump, *settings.ascending())?;
            print!("{}", render_report(&report));
            Ok(())
        }
    }
}

fn initialize_tracing(settings: &Settings, log_file: Option<&Path>, to_stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if to_stderr => builder.with_writer(std::io::stderr).init(),
        None => builder.with_writer(std::io::sink).init(),
    }

    Ok(())
}
