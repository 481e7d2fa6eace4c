//! The game-state machine.
//!
//! [`GameState`] is the single source of truth for the board, whose turn
//! it is, and whether the game is over. Views call into it with move and
//! start intents and read back snapshots and [`GameEvent`]s to render.

use crate::action::{Move, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::opponent::{Opponent, RandomOpponent};
use crate::rules::{self, GameOutcome};
use crate::{Board, Mode, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Notification for the view about a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game started; clear any previous rendering.
    Started {
        /// Mode of the new game.
        mode: Mode,
    },
    /// A mark was placed.
    Moved(Move),
    /// The game reached a terminal outcome.
    Finished(GameOutcome),
}

/// Tic-tac-toe game engine.
///
/// States: in progress, won, drawn. Won and drawn are terminal; only
/// [`start`](Self::start) or [`restart`](Self::restart) leave them.
///
/// In [`Mode::HumanVsAi`] the human plays X and the injected opponent
/// answers as O inside the same [`apply_move`](Self::apply_move) call.
#[derive(Debug, Clone)]
pub struct GameState<O = RandomOpponent> {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) mode: Mode,
    pub(crate) outcome: GameOutcome,
    pub(crate) history: Vec<Move>,
    opponent: O,
    events: Vec<GameEvent>,
}

impl GameState<RandomOpponent> {
    /// Creates a new game whose AI draws from OS entropy.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self::with_opponent(mode, RandomOpponent::from_entropy())
    }
}

impl<O: Opponent> GameState<O> {
    /// Creates a new game with an injected opponent.
    #[instrument(skip(opponent))]
    pub fn with_opponent(mode: Mode, opponent: O) -> Self {
        let mut game = Self {
            board: Board::new(),
            to_move: Player::X,
            mode,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
            opponent,
            events: Vec::new(),
        };
        game.start(mode);
        game
    }

    /// Starts a fresh game: empty board, X to move.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: Mode) {
        info!(%mode, "Starting new game");
        self.board = Board::new();
        self.to_move = Player::X;
        self.mode = mode;
        self.outcome = GameOutcome::InProgress;
        self.history.clear();
        self.events.push(GameEvent::Started { mode });
    }

    /// Starts a fresh game in the current mode.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn restart(&mut self) {
        self.start(self.mode);
    }

    /// Places the current player's mark at `pos` (0-8).
    ///
    /// Returns the outcome after the move. In human-vs-AI mode a move
    /// that leaves the game in progress is answered by the opponent
    /// before this returns, and the outcome reflects that reply. A reply
    /// that is not an empty square is skipped, as if the opponent had
    /// no choice.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game was already won or drawn.
    /// - [`MoveError::OutOfBounds`] if `pos` is not on the board.
    /// - [`MoveError::InvalidMove`] if the square is occupied.
    ///
    /// A rejected move leaves the game unchanged.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, pos: usize) -> Result<GameOutcome, MoveError> {
        let outcome = self.place(pos)?;

        if outcome.is_terminal() || self.mode.ai_player() != Some(self.to_move) {
            return Ok(outcome);
        }

        match self.opponent.select(&self.board) {
            Some(reply) if self.board.is_empty(reply) => {
                debug!(position = reply, ai = self.opponent.name(), "AI replying");
                self.place(reply)
            }
            Some(reply) => {
                warn!(
                    position = reply,
                    ai = self.opponent.name(),
                    "AI chose an illegal square, skipping reply"
                );
                Ok(outcome)
            }
            None => Ok(outcome),
        }
    }

    /// Validates and applies a single move, then evaluates the board.
    fn place(&mut self, pos: usize) -> Result<GameOutcome, MoveError> {
        if self.outcome.is_terminal() {
            warn!(position = pos, "Move rejected: game is over");
            return Err(MoveError::GameOver);
        }

        match self.board.get(pos) {
            None => {
                warn!(position = pos, "Move rejected: out of bounds");
                return Err(MoveError::OutOfBounds(pos));
            }
            Some(Square::Occupied(_)) => {
                warn!(position = pos, "Move rejected: square occupied");
                return Err(MoveError::InvalidMove(pos));
            }
            Some(Square::Empty) => {}
        }

        let player = self.to_move;
        let action = Move::new(player, pos);
        self.board.set(pos, Square::Occupied(player));
        self.history.push(action);
        self.events.push(GameEvent::Moved(action));
        debug!(%action, "Move applied");

        self.outcome = rules::evaluate(&self.board, player);
        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, "Game finished");
            debug!(board = %self.board.display(), "Final board");
            self.events.push(GameEvent::Finished(self.outcome));
        } else {
            self.to_move = player.opponent();
        }

        debug_assert!(
            GameInvariants::check_all(&*self).is_ok(),
            "game invariants violated after {action}"
        );

        Ok(self.outcome)
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this stays on the player who moved last.
    pub fn current_turn(&self) -> Player {
        self.to_move
    }

    /// True once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the outcome of the last evaluation.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns every accepted move, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The player the AI controls, if this is a human-vs-AI game.
    pub fn ai_player(&self) -> Option<Player> {
        self.mode.ai_player()
    }

    /// Takes the events queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
