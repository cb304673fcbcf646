use crate::ai::{opponent_for, Agent};
use crate::config::{AppConfig, GameMode};
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, MoveRecord, Player};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::board_widget::BoardGeometry;
use super::setup_view::{self, SetupState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Setup,
    Playing,
}

pub struct App {
    screen: Screen,
    setup: SetupState,
    game_state: GameState,
    mode: GameMode,
    seed: Option<u64>,
    opponent: Option<Box<dyn Agent>>,
    selected_column: usize,
    board_geometry: Option<BoardGeometry>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            screen: Screen::Setup,
            setup: SetupState::new(config.board, config.game.mode),
            game_state: GameState::new(config.board),
            mode: config.game.mode,
            seed: config.ai.seed,
            opponent: None,
            selected_column: config.board.center_column(),
            board_geometry: None,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.setup.focus_prev(),
            KeyCode::Down | KeyCode::Tab => self.setup.focus_next(),
            KeyCode::Left => self.setup.adjust(false),
            KeyCode::Right => self.setup.adjust(true),
            KeyCode::Enter | KeyCode::Char(' ') => self.start_game(),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let side = self.game_state.config().side_length();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < side {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < side {
                    self.selected_column = col;
                }
                self.drop_piece(col);
            }
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.selected_column = self.game_state.config().center_column();
                self.message = Some("New game started!".to_string());
                tracing::info!("game restarted");
            }
            KeyCode::Char('n') => {
                self.screen = Screen::Setup;
                self.board_geometry = None;
            }
            _ => {}
        }
    }

    /// The hanging piece follows the pointer; a left click drops it.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.screen != Screen::Playing {
            return;
        }
        let Some(col) = self
            .board_geometry
            .and_then(|g| g.column_at(mouse.column, mouse.row))
        else {
            return;
        };

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.selected_column = col;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.message = None;
                self.selected_column = col;
                self.drop_piece(col);
            }
            _ => {}
        }
    }

    fn start_game(&mut self) {
        let config = match self.setup.board_config() {
            Ok(config) => config,
            Err(e) => {
                self.message = Some(e.to_string());
                return;
            }
        };
        self.mode = self.setup.mode;
        self.opponent = opponent_for(self.mode, self.seed);
        self.game_state = GameState::new(config);
        self.selected_column = config.center_column();
        self.message = None;
        self.screen = Screen::Playing;
        tracing::info!(
            side_length = config.side_length(),
            connect_length = config.connect_length(),
            mode = ?self.mode,
            "game started"
        );
    }

    /// Player controlled by the computer, if any.
    fn computer_player(&self) -> Option<Player> {
        self.opponent.as_ref().map(|_| Player::Yellow)
    }

    /// Drop the human player's piece in `column`, then let the computer reply.
    fn drop_piece(&mut self, column: usize) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if Some(self.game_state.current_player()) == self.computer_player() {
            return;
        }

        let result = self.game_state.apply_move(column);
        if !self.report(result) {
            return;
        }

        if let Some(agent) = self.opponent.as_mut() {
            if !self.game_state.is_terminal() {
                let result = self.game_state.play_agent_move(agent.as_mut());
                self.report(result);
            }
        }
    }

    /// Turn a move result into a user-facing message. Returns whether the
    /// move was applied.
    fn report(&mut self, result: Result<MoveRecord, MoveError>) -> bool {
        match result {
            Ok(record) => {
                if let Some(outcome) = record.outcome {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => {
                            format!("Player {} ({}) wins!", player.number(), player.name())
                        }
                        GameOutcome::Draw => "It's a tie!".to_string(),
                    });
                }
                true
            }
            Err(e) => {
                self.message = Some(format!("{e}, pick another column"));
                tracing::debug!(error = %e, "move rejected");
                false
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Setup => setup_view::render(frame, &self.setup),
            Screen::Playing => {
                let geometry = super::game_view::render(
                    frame,
                    &self.game_state,
                    self.selected_column,
                    &self.message,
                    self.mode,
                );
                self.board_geometry = Some(geometry);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
