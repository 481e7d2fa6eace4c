//! Computer opponents.
//!
//! The game never reaches for a global RNG. Whatever picks the AI's
//! square is handed to [`GameState`](crate::GameState) as an [`Opponent`],
//! so tests can inject a seeded generator or a scripted player.

use crate::Board;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Something that can choose the AI's next square.
pub trait Opponent {
    /// Picks a position (0-8) to play on `board`.
    ///
    /// Must return an empty square, or `None` when there is none.
    fn select(&mut self, board: &Board) -> Option<usize>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str {
        "AI"
    }
}

/// Opponent that picks uniformly among the empty squares.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    /// Creates an opponent drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomOpponent<ChaCha8Rng> {
    /// Creates a reproducible opponent from a seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an opponent seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    #[instrument(skip_all)]
    fn select(&mut self, board: &Board) -> Option<usize> {
        let empty = board.empty_squares();
        let choice = empty.choose(&mut self.rng).copied();
        debug!(candidates = empty.len(), ?choice, "Random opponent chose position");
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_never_picks_occupied_square() {
        let mut board = Board::new();
        for pos in [0, 1, 2, 4, 6, 8] {
            board.set(pos, Square::Occupied(Player::X));
        }
        let mut opponent = RandomOpponent::seeded(7);
        for _ in 0..200 {
            let pos = opponent.select(&board).expect("empty squares remain");
            assert!([3, 5, 7].contains(&pos));
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let board = Board::from_squares([Square::Occupied(Player::O); 9]);
        let mut opponent = RandomOpponent::seeded(1);
        assert_eq!(opponent.select(&board), None);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomOpponent::seeded(42);
        let mut b = RandomOpponent::seeded(42);
        let picks_a: Vec<_> = (0..20).map(|_| a.select(&board)).collect();
        let picks_b: Vec<_> = (0..20).map(|_| b.select(&board)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_choices_cover_every_empty_square_evenly() {
        let board = Board::new();
        let mut opponent = RandomOpponent::seeded(2024);
        let mut counts = [0usize; 9];
        for _ in 0..9000 {
            let pos = opponent.select(&board).expect("board is empty");
            counts[pos] += 1;
        }
        for count in counts {
            assert!((800..=1200).contains(&count), "skewed counts: {counts:?}");
        }
    }
}
