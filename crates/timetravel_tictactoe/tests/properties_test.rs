//! Property-based tests for win detection and history invariants.

use proptest::prelude::*;
use timetravel_tictactoe::invariants::{HistoryInvariants, InvariantSet};
use timetravel_tictactoe::{Board, GameState, Player, Square, detect_winner};

prop_compose! {
    fn arbitrary_board()(cells in prop::array::uniform9(0..3u8)) -> Board {
        Board::from_squares(cells.map(|c| match c {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        }))
    }
}

fn has_line(board: &Board) -> bool {
    let sq = board.squares();
    let same = |a: usize, b: usize, c: usize| {
        sq[a] != Square::Empty && sq[a] == sq[b] && sq[b] == sq[c]
    };
    (0..3).any(|r| same(r * 3, r * 3 + 1, r * 3 + 2))
        || (0..3).any(|c| same(c, c + 3, c + 6))
        || same(0, 4, 8)
        || same(2, 4, 6)
}

proptest! {
    #[test]
    fn winner_iff_collinear_marks(board in arbitrary_board()) {
        prop_assert_eq!(detect_winner(&board).is_some(), has_line(&board));
    }

    #[test]
    fn winning_line_holds_one_mark(board in arbitrary_board()) {
        if let Some(line) = detect_winner(&board) {
            let [a, b, c] = line.indices();
            let sq = board.squares();
            prop_assert!(sq[a] != Square::Empty);
            prop_assert_eq!(sq[a], sq[b]);
            prop_assert_eq!(sq[b], sq[c]);
        }
    }

    #[test]
    fn random_sessions_keep_invariants(
        actions in prop::collection::vec((any::<bool>(), 0..9usize), 0..40)
    ) {
        let mut game = GameState::new();
        for (is_jump, n) in actions {
            let before = game.clone();
            let result = if is_jump {
                game.jump_to_step(n)
            } else {
                game.apply_index(n).map(|_| ())
            };

            if result.is_err() {
                prop_assert_eq!(&game, &before);
            }
            prop_assert!(HistoryInvariants::check_all(&game).is_ok());
            prop_assert_eq!(game.is_x_next(), game.step() % 2 == 0);
            prop_assert!(game.step() < game.history().len());
        }
    }
}
