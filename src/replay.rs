//! Non-interactive replay of scripted moves.

use std::fmt::Write;
use timetravel_tictactoe::{GameError, GameState};
use tracing::{info, instrument, warn};

/// Outcome of a replay.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// Final game state.
    pub game: GameState,
    /// Cells that were ignored, with the reason.
    pub rejected: Vec<(usize, GameError)>,
}

/// Plays `cells` in order from a fresh game, then optionally jumps.
///
/// Rejected moves are recorded and skipped, the way an interactive board
/// ignores a click on a taken square.
///
/// # Errors
///
/// Fails if `jump` is not a step of the resulting history.
#[instrument]
pub fn replay(cells: &[usize], jump: Option<usize>, ascending: bool) -> Result<ReplayReport, GameError> {
    let mut game = GameState::new();
    if !ascending {
        game.toggle_order();
    }

    let mut rejected = Vec::new();
    for &cell in cells {
        if let Err(e) = game.apply_index(cell) {
            warn!(cell, error = %e, "Skipping move");
            rejected.push((cell, e));
        }
    }

    if let Some(step) = jump {
        game.jump_to_step(step)?;
    }

    info!(moves = game.latest_step(), rejected = rejected.len(), "Replay finished");
    Ok(ReplayReport { game, rejected })
}

/// Renders the board, status, order, and history list as plain text.
///
/// Winning squares are wrapped in brackets and the current step is marked
/// with `>`.
pub fn render_report(report: &ReplayReport) -> String {
    let game = &report.game;
    let mut out = String::new();

    for (cell, error) in &report.rejected {
        let _ = writeln!(out, "Ignored cell {}: {}", cell, error);
    }
    if !report.rejected.is_empty() {
        out.push('\n');
    }

    let board = game.current_board();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let symbol = board.squares()[index].symbol();
                if game.is_winning_square(index) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join("|").trim_end());
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", game.status());
    let _ = writeln!(out, "Order - {}", if game.ascending() { "ASC" } else { "DESC" });
    for item in game.move_list() {
        let marker = if item.is_current { '>' } else { ' ' };
        let _ = writeln!(out, "{} {}. {}", marker, item.step + 1, item.description);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_records_rejections() {
        let report = replay(&[4, 4, 0, 12], None, true).expect("no jump");
        assert_eq!(report.game.latest_step(), 2);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].0, 4);
        assert_eq!(report.rejected[1].1, GameError::OutOfBounds(12));
    }

    #[test]
    fn test_replay_bad_jump() {
        assert_eq!(
            replay(&[4], Some(5), true).unwrap_err(),
            GameError::StepOutOfRange { step: 5, len: 2 }
        );
    }

    #[test]
    fn test_render_winning_game() {
        let report = replay(&[0, 4, 1, 3, 2], None, true).expect("no jump");
        let expected = "\
[X]|[X]|[X]
---+---+---
 O | O |
---+---+---
   |   |

Winner: X
Order - ASC
  1. Go to game start
  2. Go to move #1 (1, 1)
  3. Go to move #2 (2, 2)
  4. Go to move #3 (2, 1)
  5. Go to move #4 (1, 2)
> 6. Go to move #5 (3, 1)
";
        assert_eq!(render_report(&report), expected);
    }

    #[test]
    fn test_render_descending_after_jump() {
        let report = replay(&[4, 0], Some(1), false).expect("step in range");
        let rendered = render_report(&report);
        let list: Vec<&str> = rendered.lines().skip(7).collect();
        assert_eq!(
            list,
            [
                "Order - DESC",
                "  3. Go to move #2 (1, 1)",
                "> 2. Go to move #1 (2, 2)",
                "  1. Go to game start",
            ]
        );
        assert!(rendered.contains("Next player: O"));
    }
}
