use crate::config::GameMode;
use crate::game::{GameOutcome, GameState, GameStatus, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{self, BoardGeometry};

/// Draw the game screen and return where the board landed so mouse clicks
/// can be mapped back to columns.
pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    mode: GameMode,
) -> BoardGeometry {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, mode, chunks[0]);

    let geometry = BoardGeometry::centered(chunks[1], game_state.board().side_length());
    let hanging = match game_state.status() {
        GameStatus::AwaitingInput(player) => Some(player),
        GameStatus::GameOver(_) => None,
    };
    board_widget::render_board(
        frame,
        game_state.board(),
        geometry,
        selected_column,
        hanging,
        game_state.last_move(),
    );

    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
    geometry
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

/// Banner text and color for the current status.
pub fn status_line(game_state: &GameState) -> (String, Color) {
    match game_state.status() {
        GameStatus::AwaitingInput(player) => (
            format!("Player {} ({}) to move", player.number(), player.name()),
            player_color(player),
        ),
        GameStatus::GameOver(GameOutcome::Winner(player)) => (
            format!("Player {} WINS!!", player.number()),
            player_color(player),
        ),
        GameStatus::GameOver(GameOutcome::Draw) => ("TIE".to_string(), Color::Blue),
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, mode: GameMode, area: Rect) {
    let (status, color) = status_line(game_state);
    let config = game_state.config();
    let title = format!(
        "Connect {}  |  {}x{}  |  {}",
        config.connect_length(),
        config.side_length(),
        config.side_length(),
        mode.label()
    );

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("Mouse: Aim & Click  |  \u{2190}/\u{2192}: Move  |  Enter: Drop  |  1-9: Drop in column");
    let line2 = Line::from("R: Restart  |  N: New setup  |  Q: Quit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
