//! Single mark invariant: consecutive snapshots differ by one alternating mark.

use super::Invariant;
use crate::{GameState, Player, Position, Square};

/// Invariant: each snapshot adds exactly one mark to the previous one.
///
/// The added square was empty before, holds X after even steps and O after
/// odd ones, and its coordinates are the entry's recorded position.
pub struct SingleMarkPerStepInvariant;

impl Invariant<GameState> for SingleMarkPerStepInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let (before, after) = (pair[0].board(), pair[1].board());
                match before.diff(after).as_slice() {
                    [index] => {
                        before.get(*index) == Some(Square::Empty)
                            && after.get(*index) == Some(Square::Occupied(Player::for_step(k)))
                            && Position::from_index(*index).map(Position::coordinates)
                                == pair[1].position()
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each step adds exactly one alternating mark, X first"
    }
}
