//! Computer-vs-computer play: run complete games between two agents and keep
//! running tallies of the results.

use crate::ai::Agent;
use crate::config::BoardConfig;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Player};

/// Result of a single finished game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub winner: Option<Player>,
    pub game_length: usize,
    pub final_state: GameState,
}

/// Play one game to completion. `red` moves first.
pub fn play_game(
    config: BoardConfig,
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
) -> Result<GameSummary, MoveError> {
    let mut state = GameState::new(config);

    while !state.is_terminal() {
        let agent: &mut dyn Agent = match state.current_player() {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        state.play_agent_move(agent)?;
    }

    let winner = match state.outcome() {
        Some(GameOutcome::Winner(p)) => Some(p),
        _ => None,
    };

    Ok(GameSummary {
        winner,
        game_length: state.move_count(),
        final_state: state,
    })
}

/// Win/draw tallies over a series of games.
#[derive(Debug, Clone, Default)]
pub struct MatchStats {
    red_wins: usize,
    yellow_wins: usize,
    draws: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, summary: &GameSummary) {
        match summary.winner {
            Some(Player::Red) => self.red_wins += 1,
            Some(Player::Yellow) => self.yellow_wins += 1,
            None => self.draws += 1,
        }
        self.total_moves += summary.game_length;
    }

    pub fn games(&self) -> usize {
        self.red_wins + self.yellow_wins + self.draws
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::Red => self.red_wins,
            Player::Yellow => self.yellow_wins,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Share of games won by `player`.
    pub fn win_rate(&self, player: Player) -> f32 {
        if self.games() == 0 {
            return 0.0;
        }
        self.wins(player) as f32 / self.games() as f32
    }

    pub fn draw_rate(&self) -> f32 {
        if self.games() == 0 {
            return 0.0;
        }
        self.draws as f32 / self.games() as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.games() == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{HeuristicAgent, RandomAgent};

    fn summary(winner: Option<Player>, game_length: usize) -> GameSummary {
        GameSummary {
            winner,
            game_length,
            final_state: GameState::default(),
        }
    }

    #[test]
    fn test_play_game_finishes() {
        let mut red = RandomAgent::with_seed(1);
        let mut yellow = RandomAgent::with_seed(2);
        let result = play_game(BoardConfig::default(), &mut red, &mut yellow).unwrap();

        assert!(result.final_state.is_terminal());
        assert_eq!(result.winner, result.final_state.winner());
        assert_eq!(result.game_length, result.final_state.move_count());
        assert!(result.game_length >= 7 && result.game_length <= 49);
    }

    #[test]
    fn test_first_open_agents_on_small_board() {
        // Both sides always pick the leftmost column with room.
        struct FirstOpen;
        impl Agent for FirstOpen {
            fn select_action(
                &mut self,
                board: &mut crate::game::Board,
                _player: Player,
            ) -> Option<usize> {
                board.valid_columns().first().copied()
            }
            fn name(&self) -> &str {
                "FirstOpen"
            }
        }

        // Column 0 ends R Y R (bottom up), column 1 Y R Y, and Red's first
        // piece in column 2 completes the `\` diagonal
        let result = play_game(BoardConfig::new(3, 3).unwrap(), &mut FirstOpen, &mut FirstOpen)
            .unwrap();
        assert_eq!(result.winner, Some(Player::Red));
        assert_eq!(result.game_length, 7);
    }

    #[test]
    fn test_seeded_games_repeat() {
        let config = BoardConfig::new(6, 4).unwrap();
        let a = play_game(
            config,
            &mut HeuristicAgent::with_seed(3),
            &mut RandomAgent::with_seed(4),
        )
        .unwrap();
        let b = play_game(
            config,
            &mut HeuristicAgent::with_seed(3),
            &mut RandomAgent::with_seed(4),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_win_rate() {
        let mut m = MatchStats::new();
        for _ in 0..7 {
            m.record(&summary(Some(Player::Red), 10));
        }
        for _ in 0..3 {
            m.record(&summary(Some(Player::Yellow), 10));
        }
        assert!((m.win_rate(Player::Red) - 0.7).abs() < 1e-6);
        assert_eq!(m.wins(Player::Yellow), 3);
    }

    #[test]
    fn test_draw_rate() {
        let mut m = MatchStats::new();
        m.record(&summary(None, 42));
        m.record(&summary(Some(Player::Red), 10));
        assert!((m.draw_rate() - 0.5).abs() < 1e-6);
        assert_eq!(m.draws(), 1);
    }

    #[test]
    fn test_average_game_length() {
        let mut m = MatchStats::new();
        m.record(&summary(None, 20));
        m.record(&summary(None, 30));
        assert!((m.average_game_length() - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_stats() {
        let m = MatchStats::new();
        assert_eq!(m.games(), 0);
        assert_eq!(m.win_rate(Player::Red), 0.0);
        assert_eq!(m.average_game_length(), 0.0);
    }
}
