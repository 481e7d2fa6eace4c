//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: Players alternate turns, X first.
///
/// While the game is in progress the player to move is fixed by the
/// number of moves played. Once it is over, the turn stays with whoever
/// moved last.
pub struct AlternatingTurnInvariant;

impl<O> Invariant<GameState<O>> for AlternatingTurnInvariant {
    fn holds(game: &GameState<O>) -> bool {
        let alternates = game
            .history
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.player == if i % 2 == 0 { Player::X } else { Player::O });
        if !alternates {
            return false;
        }

        let expected = match game.history.last() {
            Some(last) if game.outcome.is_terminal() => last.player,
            Some(last) => last.player.opponent(),
            None => Player::X,
        };
        game.to_move == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
