//! Draw detection logic for tic-tac-toe.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks for a draw: every square is occupied.
///
/// A full board can also hold a winning line, so callers test for a win
/// first and only then ask whether the board is drawn.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;
    use crate::rules::win::check_winner;

    fn full_board(marks: [Player; 9]) -> Board {
        Board::from_squares(marks.map(Square::Occupied))
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(4, Square::Occupied(Player::X));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = full_board([X, O, X, O, X, X, O, X, O]);
        assert!(is_draw(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_winning_board_is_still_full() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = full_board([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), Some(X));
    }
}
