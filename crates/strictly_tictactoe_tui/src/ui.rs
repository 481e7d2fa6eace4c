//! Rendering: board, header and status bar.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{Board, Line, Opponent, Player, Square};

/// Draws the whole screen.
pub fn draw<O: Opponent>(f: &mut Frame, app: &App<O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let game = app.game();
    let header = Paragraph::new(game.mode().label())
        .alignment(Alignment::Center)
        .block(Block::default().title("Tic-Tac-Toe").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    render_board(f, chunks[1], game.board(), app.winning_line(), app.last_ai_move());

    let status = Paragraph::new(app.status_message())
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9 move | h human vs human | a human vs AI | r restart | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

/// Renders the tic-tac-toe board as three rows split by grid lines.
fn render_board(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    winning_line: Option<Line>,
    last_ai_move: Option<usize>,
) {
    let [row0, rule0, row1, rule1, row2] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(center_rect(area, 40, 11));

    let marks = Marks {
        board,
        winning_line,
        last_ai_move,
    };
    marks.render_row(f, row0, 0);
    render_grid_line(f, rule0, Direction::Horizontal);
    marks.render_row(f, row1, 3);
    render_grid_line(f, rule1, Direction::Horizontal);
    marks.render_row(f, row2, 6);
}

/// What a square needs to know to pick its text and style.
struct Marks<'a> {
    board: &'a Board,
    winning_line: Option<Line>,
    last_ai_move: Option<usize>,
}

impl Marks<'_> {
    fn render_row(&self, f: &mut Frame, area: Rect, start: usize) {
        let [left, bar0, middle, bar1, right] = Layout::horizontal([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .areas(area);

        self.render_square(f, left, start);
        render_grid_line(f, bar0, Direction::Vertical);
        self.render_square(f, middle, start + 1);
        render_grid_line(f, bar1, Direction::Vertical);
        self.render_square(f, right, start + 2);
    }

    fn render_square(&self, f: &mut Frame, area: Rect, pos: usize) {
        let (text, style) = square_text(self.board.get(pos).unwrap_or_default(), pos);
        let style = if self.winning_line.is_some_and(|line| line.contains(&pos)) {
            style.bg(Color::Yellow).fg(Color::Black)
        } else if self.last_ai_move == Some(pos) {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        };
        let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}

/// Text and base style for a square; empty squares show their key.
fn square_text(square: Square, pos: usize) -> (String, Style) {
    match square.player() {
        None => ((pos + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Some(player) => {
            let color = match player {
                Player::X => Color::Blue,
                Player::O => Color::Red,
            };
            let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
            (player.to_string(), style)
        }
    }
}

/// Draws one stroke of the grid filling `area`.
fn render_grid_line(f: &mut Frame, area: Rect, direction: Direction) {
    let stroke = match direction {
        Direction::Horizontal => "─".repeat(usize::from(area.width)),
        Direction::Vertical => "│".to_string(),
    };
    let line = Paragraph::new(stroke)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(line, area);
}

/// A `width` x `height` rectangle centered in `area`.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_tictactoe::{GameState, Mode, RandomOpponent};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_square_text() {
        assert_eq!(square_text(Square::Empty, 6).0, "7");
        assert_eq!(square_text(Square::Occupied(Player::O), 6).0, "O");
    }

    #[test]
    fn test_center_rect_is_centered() {
        let area = Rect::new(0, 0, 60, 21);
        assert_eq!(center_rect(area, 40, 11), Rect::new(10, 5, 40, 11));
    }

    #[test]
    fn test_draw_shows_board_and_status() {
        let game = GameState::with_opponent(Mode::HumanVsHuman, RandomOpponent::seeded(0));
        let mut app = App::new(game);
        app.handle_key(KeyCode::Char('5'));
        let text = screen(&app);
        assert!(text.contains("Human vs Human"));
        assert!(text.contains('X'));
        assert!(text.contains("Player O's turn"));
    }
}
