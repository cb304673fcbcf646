use crate::config::{BoardConfig, GameMode, MAX_SIDE_LENGTH};
use crate::error::ConfigError;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fields on the setup screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    BoardSize,
    ConnectLength,
    Mode,
}

impl SetupField {
    fn next(self) -> Self {
        match self {
            SetupField::BoardSize => SetupField::ConnectLength,
            SetupField::ConnectLength => SetupField::Mode,
            SetupField::Mode => SetupField::BoardSize,
        }
    }

    fn prev(self) -> Self {
        match self {
            SetupField::BoardSize => SetupField::Mode,
            SetupField::ConnectLength => SetupField::BoardSize,
            SetupField::Mode => SetupField::ConnectLength,
        }
    }
}

/// Values chosen on the setup screen before a game starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupState {
    pub side_length: usize,
    pub connect_length: usize,
    pub mode: GameMode,
    pub focus: SetupField,
}

impl SetupState {
    pub fn new(board: BoardConfig, mode: GameMode) -> Self {
        SetupState {
            side_length: board.side_length(),
            connect_length: board.connect_length(),
            mode,
            focus: SetupField::BoardSize,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Step the focused value up or down. The board never shrinks below the
    /// connect length and the connect length never exceeds the board.
    pub fn adjust(&mut self, up: bool) {
        match self.focus {
            SetupField::BoardSize => {
                if up {
                    self.side_length = (self.side_length + 1).min(MAX_SIDE_LENGTH);
                } else {
                    self.side_length = self.side_length.saturating_sub(1).max(self.connect_length);
                }
            }
            SetupField::ConnectLength => {
                if up {
                    self.connect_length = (self.connect_length + 1).min(self.side_length);
                } else {
                    self.connect_length = self.connect_length.saturating_sub(1).max(2);
                }
            }
            SetupField::Mode => {
                let idx = GameMode::ALL
                    .iter()
                    .position(|&m| m == self.mode)
                    .unwrap_or(0);
                let len = GameMode::ALL.len();
                let next = if up { (idx + 1) % len } else { (idx + len - 1) % len };
                self.mode = GameMode::ALL[next];
            }
        }
    }

    pub fn board_config(&self) -> Result<BoardConfig, ConfigError> {
        BoardConfig::new(self.side_length, self.connect_length)
    }
}

pub fn render(frame: &mut Frame, setup: &SetupState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Options
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let header = Paragraph::new("Welcome to Connect N")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    render_options(frame, setup, chunks[1]);

    let controls = Paragraph::new("\u{2191}/\u{2193}: Select  |  \u{2190}/\u{2192}: Change  |  Enter: Play  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[2]);
}

fn option_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let marker = if focused { "\u{25b6} " } else { "  " };
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{marker}{label:<16}"), style),
        Span::styled(format!("\u{25c0} {value} \u{25b6}"), style),
    ])
}

fn render_options(frame: &mut Frame, setup: &SetupState, area: Rect) {
    let lines = vec![
        Line::from(""),
        option_line(
            "Board size",
            format!("{0} x {0}", setup.side_length),
            setup.focus == SetupField::BoardSize,
        ),
        Line::from(""),
        option_line(
            "Connect",
            setup.connect_length.to_string(),
            setup.focus == SetupField::ConnectLength,
        ),
        Line::from(""),
        option_line(
            "Mode",
            setup.mode.label().to_string(),
            setup.focus == SetupField::Mode,
        ),
    ];

    let options = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("New Game"));
    frame.render_widget(options, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> SetupState {
        SetupState::new(BoardConfig::default(), GameMode::Hard)
    }

    #[test]
    fn test_focus_cycles() {
        let mut s = setup();
        s.focus_next();
        assert_eq!(s.focus, SetupField::ConnectLength);
        s.focus_next();
        s.focus_next();
        assert_eq!(s.focus, SetupField::BoardSize);
        s.focus_prev();
        assert_eq!(s.focus, SetupField::Mode);
    }

    #[test]
    fn test_board_size_bounds() {
        let mut s = setup();
        for _ in 0..20 {
            s.adjust(true);
        }
        assert_eq!(s.side_length, MAX_SIDE_LENGTH);
        for _ in 0..20 {
            s.adjust(false);
        }
        assert_eq!(s.side_length, s.connect_length);
        assert!(s.board_config().is_ok());
    }

    #[test]
    fn test_connect_length_bounds() {
        let mut s = setup();
        s.focus = SetupField::ConnectLength;
        for _ in 0..20 {
            s.adjust(true);
        }
        assert_eq!(s.connect_length, s.side_length);
        for _ in 0..20 {
            s.adjust(false);
        }
        assert_eq!(s.connect_length, 2);
        assert!(s.board_config().is_ok());
    }

    #[test]
    fn test_mode_wraps() {
        let mut s = setup();
        s.focus = SetupField::Mode;
        s.adjust(true);
        assert_eq!(s.mode, GameMode::Multiplayer);
        s.adjust(true);
        assert_eq!(s.mode, GameMode::Easy);
        s.adjust(false);
        assert_eq!(s.mode, GameMode::Multiplayer);
    }
}
