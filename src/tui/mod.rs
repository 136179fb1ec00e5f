//! Terminal UI.
//!
//! A blocking crossterm event loop drives an [`App`], which forwards every
//! key press to the game state and redraws from its derived views.

mod app;
mod input;
mod ui;

pub use app::{App, Control, Focus};
pub use input::{Action, Direction, action_for, move_cursor};
pub use ui::draw;

use crate::config::Settings;
use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Raw mode and the alternate screen, undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs the terminal UI until the user quits.
#[instrument(skip(settings))]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting terminal UI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(*settings.ascending());
    let res = run_app(&mut terminal, app);

    info!("Terminal UI closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = action_for(key.code) {
                if app.handle(action) == Control::Quit {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::terminal::is_raw_mode_enabled;

    #[test]
    fn test_guard_leaves_raw_mode_off() {
        // Without a tty `enter` fails before raw mode is on.
        if let Ok(guard) = TerminalGuard::enter() {
            assert!(is_raw_mode_enabled().unwrap_or(true));
            drop(guard);
        }
        assert!(!is_raw_mode_enabled().unwrap_or(false));
    }
}
