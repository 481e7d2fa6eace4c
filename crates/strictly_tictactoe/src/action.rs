//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The game records every
//! accepted move in its history and hands them to the view as events.

use crate::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The board index (0-8) where the player places their mark.
    pub position: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: usize) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when applying a move.
///
/// A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    InvalidMove(usize),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The position is not on the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(Player::O, 4).to_string(), "O -> 4");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::InvalidMove(3).to_string(),
            "Square 3 is already occupied"
        );
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
        assert!(MoveError::OutOfBounds(9).to_string().contains("out of bounds"));
    }
}
