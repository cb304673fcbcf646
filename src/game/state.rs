use super::{Board, Player};
use crate::ai::Agent;
use crate::config::BoardConfig;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Where the turn controller currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingInput(Player),
    GameOver(GameOutcome),
}

/// A move that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub row: usize,
    pub column: usize,
    /// Set when this move ended the game.
    pub outcome: Option<GameOutcome>,
}

/// Turn controller: owns the live board and alternates between the two
/// players until someone connects or the board fills up.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    status: GameStatus,
    last_move: Option<(usize, usize)>,
    move_count: usize,
}

impl GameState {
    /// Create initial game state. Red moves first.
    pub fn new(config: BoardConfig) -> Self {
        GameState {
            board: Board::new(config),
            status: GameStatus::AwaitingInput(Player::Red),
            last_move: None,
            move_count: 0,
        }
    }

    /// Start over on an empty board with the same configuration.
    pub fn reset(&mut self) {
        *self = GameState::new(self.board.config());
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Player whose input is awaited, or the player who would have moved
    /// next once the game is over.
    pub fn current_player(&self) -> Player {
        match self.status {
            GameStatus::AwaitingInput(player) => player,
            GameStatus::GameOver(GameOutcome::Winner(player)) => player.other(),
            GameStatus::GameOver(GameOutcome::Draw) => {
                if self.move_count % 2 == 0 {
                    Player::Red
                } else {
                    Player::Yellow
                }
            }
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> BoardConfig {
        self.board.config()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            GameStatus::GameOver(outcome) => Some(outcome),
            GameStatus::AwaitingInput(_) => None,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome() {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Cell filled by the most recent move.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.valid_columns()
    }

    /// Apply the active player's piece to `column`. Rejected moves leave the
    /// state untouched and the same player keeps the turn.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveRecord, MoveError> {
        let player = match self.status {
            GameStatus::AwaitingInput(player) => player,
            GameStatus::GameOver(_) => return Err(MoveError::GameOver),
        };

        let row = self.board.drop_piece(column, player.to_cell())?;
        self.last_move = Some((row, column));
        self.move_count += 1;

        // Check for win
        let outcome = if self.board.check_win(row, column) {
            Some(GameOutcome::Winner(player))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        self.status = match outcome {
            Some(outcome) => GameStatus::GameOver(outcome),
            None => GameStatus::AwaitingInput(player.other()),
        };

        tracing::debug!(player = player.name(), row, column, "move applied");
        if let Some(outcome) = outcome {
            tracing::info!(?outcome, moves = self.move_count, "game over");
        }

        Ok(MoveRecord {
            player,
            row,
            column,
            outcome,
        })
    }

    /// Let `agent` choose a column for the active player and apply it.
    /// The agent may look ahead on the live board but must leave it as it
    /// found it.
    pub fn play_agent_move(&mut self, agent: &mut dyn Agent) -> Result<MoveRecord, MoveError> {
        let player = match self.status {
            GameStatus::AwaitingInput(player) => player,
            GameStatus::GameOver(_) => return Err(MoveError::GameOver),
        };

        let column = agent
            .select_action(&mut self.board, player)
            .ok_or(MoveError::NoLegalMoves)?;
        tracing::debug!(agent = agent.name(), player = player.name(), column, "agent chose column");
        self.apply_move(column)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
