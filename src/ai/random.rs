use crate::game::{Board, Player};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from the open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &mut Board, _player: Player) -> Option<usize> {
        let columns = board.valid_columns();
        if columns.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..columns.len());
        Some(columns[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::game::{Cell, GameState};

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let mut board = Board::default();
        let legal = board.valid_columns();

        for _ in 0..100 {
            let action = agent.select_action(&mut board, Player::Red).unwrap();
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_skips_full_columns() {
        let mut board = Board::new(BoardConfig::new(4, 3).unwrap());
        for col in [0, 2, 3] {
            for _ in 0..4 {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }

        for seed in 0..50 {
            let mut agent = RandomAgent::with_seed(seed);
            assert_eq!(agent.select_action(&mut board, Player::Yellow), Some(1));
        }
    }

    #[test]
    fn test_random_agent_on_full_board() {
        let mut board = Board::new(BoardConfig::new(2, 2).unwrap());
        for col in 0..2 {
            for _ in 0..2 {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        let mut agent = RandomAgent::with_seed(3);
        assert_eq!(agent.select_action(&mut board, Player::Red), None);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let mut a = RandomAgent::with_seed(11);
        let mut b = RandomAgent::with_seed(11);
        let mut board = Board::default();
        for _ in 0..20 {
            assert_eq!(
                a.select_action(&mut board, Player::Red),
                b.select_action(&mut board, Player::Red)
            );
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::default();

        let mut turn = 0;
        while !state.is_terminal() {
            if turn % 2 == 0 {
                state.play_agent_move(&mut agent1).unwrap();
            } else {
                state.play_agent_move(&mut agent2).unwrap();
            }
            turn += 1;
        }

        assert!(state.is_terminal());
        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
