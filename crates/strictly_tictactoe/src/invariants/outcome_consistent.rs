//! Outcome consistency invariant: the stored outcome matches the board.

use super::Invariant;
use crate::GameState;
use crate::rules::{self, GameOutcome};

/// Invariant: re-evaluating the board for the last mover reproduces the
/// stored outcome.
pub struct OutcomeConsistentInvariant;

impl<O> Invariant<GameState<O>> for OutcomeConsistentInvariant {
    fn holds(game: &GameState<O>) -> bool {
        match game.history.last() {
            Some(last) => rules::evaluate(&game.board, last.player) == game.outcome,
            None => game.outcome == GameOutcome::InProgress,
        }
    }

    fn description() -> &'static str {
        "Stored outcome matches evaluation of the board"
    }
}
