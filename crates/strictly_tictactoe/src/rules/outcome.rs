//! Board evaluation: turning a snapshot into a game outcome.

use super::draw::is_draw;
use super::win::{Line, find_winning_line};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of evaluating a board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameOutcome {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{winner} wins!")]
    Win {
        /// The player who completed the line.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// Board is full and nobody completed a line.
    #[display("Draw!")]
    Draw,
}

impl GameOutcome {
    /// Win or draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            GameOutcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates the board after `mover` has placed a mark.
///
/// Only the player who just moved can have completed a line, so only
/// their lines are checked. The win check runs before the draw check: a
/// move that fills the last square and completes a line is a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Player) -> GameOutcome {
    if let Some(line) = find_winning_line(board, mover) {
        return GameOutcome::Win {
            winner: mover,
            line,
        };
    }

    if is_draw(board) {
        return GameOutcome::Draw;
    }

    GameOutcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;
    use crate::Player::{O, X};

    fn full_board(marks: [Player; 9]) -> Board {
        Board::from_squares(marks.map(Square::Occupied))
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new(), X), GameOutcome::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = full_board([X, O, X, O, O, X, X, X, O]);
        assert_eq!(evaluate(&board, X), GameOutcome::Draw);
    }

    #[test]
    fn test_full_winning_board_is_win_not_draw() {
        let board = full_board([X, X, X, O, O, X, X, O, O]);
        assert_eq!(
            evaluate(&board, X),
            GameOutcome::Win {
                winner: X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = full_board([O, X, X, X, O, O, X, O, O]);
        let first = evaluate(&board, O);
        assert_eq!(first, evaluate(&board, O));
        assert_eq!(first.winner(), Some(O));
        assert_eq!(first.line(), Some([0, 4, 8]));
    }

    #[test]
    fn test_outcome_display() {
        let win = GameOutcome::Win {
            winner: O,
            line: [2, 4, 6],
        };
        assert_eq!(win.to_string(), "O wins!");
        assert_eq!(GameOutcome::Draw.to_string(), "Draw!");
        assert!(win.is_terminal());
        assert!(!GameOutcome::InProgress.is_terminal());
    }
}
