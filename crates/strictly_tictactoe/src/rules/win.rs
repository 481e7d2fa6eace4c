//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// Every winning triple, in canonical order.
///
/// Rows first, then columns, then the two diagonals. Lookups that can
/// match several lines report the earliest one in this order.
#[rustfmt::skip]
pub const WINNING_LINES: [Line; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Shape of a winning line, for views that draw a stroke through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Horizontal line through the given row (0 = top).
    Row(usize),
    /// Vertical line through the given column (0 = left).
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl LineKind {
    /// Classifies a line, or `None` if it is not one of [`WINNING_LINES`].
    #[instrument]
    pub fn of(line: Line) -> Option<Self> {
        let [a, b, c] = line;
        if !WINNING_LINES.contains(&line) {
            return None;
        }
        let kind = if b == a + 1 && c == b + 1 {
            LineKind::Row(a / 3)
        } else if b == a + 3 && c == b + 3 {
            LineKind::Column(a)
        } else if a == 0 {
            LineKind::Diagonal
        } else {
            LineKind::AntiDiagonal
        };
        Some(kind)
    }
}

/// Checks whether `player` owns all three squares of any winning line.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> bool {
    find_winning_line(board, player).is_some()
}

/// Returns the first line in canonical order fully owned by `player`.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board, player: Player) -> Option<Line> {
    let mark = Some(Square::Occupied(player));
    WINNING_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the owner of the first complete line in
/// canonical order, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c) {
            return sq.and_then(Square::player);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!check_win(&board, Player::X));
        assert!(!check_win(&board, Player::O));
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert!(check_win(&board, Player::X));
        assert!(!check_win(&board, Player::O));
        assert_eq!(find_winning_line(&board, Player::X), Some([0, 1, 2]));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        assert_eq!(find_winning_line(&board, Player::O), Some([2, 4, 6]));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::O)]);
        assert!(!check_win(&board, Player::X));
        assert_eq!(find_winning_line(&board, Player::X), None);
    }

    #[test]
    fn test_lowest_ordered_line_wins_tie_break() {
        // X owns the top row, the left column and the main diagonal.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
            (4, Player::X),
            (8, Player::X),
        ]);
        assert_eq!(find_winning_line(&board, Player::X), Some([0, 1, 2]));

        // Middle column and bottom-right diagonal: the column comes first.
        let board = board_with(&[
            (1, Player::O),
            (4, Player::O),
            (7, Player::O),
            (0, Player::O),
            (8, Player::O),
        ]);
        assert_eq!(find_winning_line(&board, Player::O), Some([1, 4, 7]));
    }

    #[test]
    fn test_line_kinds() {
        assert_eq!(LineKind::of([3, 4, 5]), Some(LineKind::Row(1)));
        assert_eq!(LineKind::of([2, 5, 8]), Some(LineKind::Column(2)));
        assert_eq!(LineKind::of([0, 4, 8]), Some(LineKind::Diagonal));
        assert_eq!(LineKind::of([2, 4, 6]), Some(LineKind::AntiDiagonal));
        assert_eq!(LineKind::of([0, 1, 3]), None);
    }
}
