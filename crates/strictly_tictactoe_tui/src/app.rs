//! Application state and key handling.

use crate::config::TuiConfig;
use crossterm::event::KeyCode;
use strictly_tictactoe::{
    GameEvent, GameOutcome, GameState, Line, LineKind, Mode, Opponent, RandomOpponent,
};
use tracing::{debug, info, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the game.
    Quit,
}

/// Main application state.
///
/// The game owns the board; the app only keeps what it needs to render:
/// a status line, the winning line and the AI's last square.
pub struct App<O = RandomOpponent> {
    game: GameState<O>,
    status_message: String,
    winning_line: Option<Line>,
    last_ai_move: Option<usize>,
}

impl App<RandomOpponent> {
    /// Creates the app from configuration.
    #[instrument(skip(config), fields(mode = %config.mode(), seed = ?config.seed()))]
    pub fn from_config(config: &TuiConfig) -> Self {
        let opponent = match config.seed() {
            Some(seed) => RandomOpponent::seeded(*seed),
            None => RandomOpponent::from_entropy(),
        };
        Self::new(GameState::with_opponent(*config.mode(), opponent))
    }
}

impl<O: Opponent> App<O> {
    /// Wraps a freshly started game.
    pub fn new(game: GameState<O>) -> Self {
        let mut app = Self {
            game,
            status_message: String::new(),
            winning_line: None,
            last_ai_move: None,
        };
        app.sync();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState<O> {
        &self.game
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The completed line, once someone has won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// The square the AI claimed most recently in this game.
    pub fn last_ai_move(&self) -> Option<usize> {
        self.last_ai_move
    }

    /// Dispatches a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Char('r') => self.game.restart(),
            KeyCode::Char('h') => self.game.start(Mode::HumanVsHuman),
            KeyCode::Char('a') => self.game.start(Mode::HumanVsAi),
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(digit @ 1..=9) => self.make_move(digit as usize - 1),
                _ => debug!(?key, "Ignoring key"),
            },
            _ => debug!(?key, "Ignoring key"),
        }
        self.sync();
        Control::Continue
    }

    /// Makes a move at the given position (0-8).
    fn make_move(&mut self, position: usize) {
        debug!(position, "Making move");
        if let Err(e) = self.game.apply_move(position) {
            self.status_message = format!("Invalid move: {}. Try again.", e);
        }
    }

    /// Folds queued game events into the rendered state.
    fn sync(&mut self) {
        let events = self.game.drain_events();
        if events.is_empty() {
            return;
        }

        for event in events {
            match event {
                GameEvent::Started { .. } => {
                    self.winning_line = None;
                    self.last_ai_move = None;
                }
                GameEvent::Moved(action) => {
                    if self.game.ai_player() == Some(action.player) {
                        self.last_ai_move = Some(action.position);
                    }
                }
                GameEvent::Finished(outcome) => {
                    self.winning_line = outcome.line();
                }
            }
        }

        self.status_message = match self.game.outcome() {
            GameOutcome::InProgress => {
                let mut message = format!(
                    "Player {}'s turn. Press 1-9 to move.",
                    self.game.current_turn()
                );
                if let Some(pos) = self.last_ai_move {
                    message = format!("AI took {}. {}", pos + 1, message);
                }
                message
            }
            outcome @ GameOutcome::Win { line, .. } => format!(
                "{} ({}). Press 'r' to restart or 'q' to quit.",
                outcome,
                describe_line(line)
            ),
            GameOutcome::Draw => "Draw! Press 'r' to restart or 'q' to quit.".to_string(),
        };
    }
}

/// Names a winning line for the status bar.
fn describe_line(line: Line) -> String {
    const ROWS: [&str; 3] = ["top", "middle", "bottom"];
    const COLUMNS: [&str; 3] = ["left", "center", "right"];
    match LineKind::of(line) {
        Some(LineKind::Row(r)) => format!("{} row", ROWS[r]),
        Some(LineKind::Column(c)) => format!("{} column", COLUMNS[c]),
        Some(LineKind::Diagonal) | Some(LineKind::AntiDiagonal) => "diagonal".to_string(),
        None => format!("{:?}", line),
    }
}
