//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameState, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never touch an
/// occupied square and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl<O> Invariant<GameState<O>> for MonotonicBoardInvariant {
    fn holds(game: &GameState<O>) -> bool {
        let mut reconstructed = Board::new();

        for mov in &game.history {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == game.board
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mode, Move, Player, RandomOpponent};

    fn game() -> GameState<RandomOpponent> {
        GameState::with_opponent(Mode::HumanVsHuman, RandomOpponent::seeded(0))
    }

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&game()));
    }

    #[test]
    fn test_moves_hold() {
        let mut game = game();
        for pos in [0, 4, 8, 2] {
            game.apply_move(pos).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = game();
        game.apply_move(4).unwrap();
        game.board.set(4, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_square_played_twice_violates() {
        let mut game = game();
        game.apply_move(4).unwrap();
        game.history.push(Move::new(Player::O, 4));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
