//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules never mutate the board; [`GameState`](crate::GameState) owns it
//! and feeds snapshots in after every move.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{GameOutcome, evaluate};
pub use win::{Line, LineKind, WINNING_LINES, check_win, check_winner, find_winning_line};
