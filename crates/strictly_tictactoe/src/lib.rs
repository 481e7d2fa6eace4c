//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **GameState**: owns the board, the turn and the mode; applies moves
//! - **Rules**: stateless win/draw evaluation over a board snapshot
//! - **Opponent**: injectable AI that answers in human-vs-AI games
//! - **Invariants**: properties checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameOutcome, GameState, Mode, Player, RandomOpponent};
//!
//! let mut game = GameState::with_opponent(Mode::HumanVsHuman, RandomOpponent::seeded(7));
//! for pos in [0, 3, 1, 4] {
//!     game.apply_move(pos)?;
//! }
//! let outcome = game.apply_move(2)?;
//! assert_eq!(outcome, GameOutcome::Win { winner: Player::X, line: [0, 1, 2] });
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod opponent;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use game::{GameEvent, GameState};
pub use opponent::{Opponent, RandomOpponent};
pub use rules::{GameOutcome, Line, LineKind};
pub use types::{BOARD_SIZE, Board, Mode, Player, Square};
