use crate::config::GameMode;
use crate::game::{Board, Player};

use super::{HeuristicAgent, RandomAgent};

/// Universal interface for computer players.
pub trait Agent {
    /// Select a column for `player` on the live board, or `None` when every
    /// column is full. Implementations may place and remove hypothetical
    /// pieces but must hand the board back unchanged.
    fn select_action(&mut self, board: &mut Board, player: Player) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Computer opponent for a game mode, `None` when both sides are human.
pub fn opponent_for(mode: GameMode, seed: Option<u64>) -> Option<Box<dyn Agent>> {
    match (mode, seed) {
        (GameMode::Easy, Some(seed)) => Some(Box::new(RandomAgent::with_seed(seed))),
        (GameMode::Easy, None) => Some(Box::new(RandomAgent::new())),
        (GameMode::Hard, Some(seed)) => Some(Box::new(HeuristicAgent::with_seed(seed))),
        (GameMode::Hard, None) => Some(Box::new(HeuristicAgent::new())),
        (GameMode::Multiplayer, _) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_for_modes() {
        assert_eq!(opponent_for(GameMode::Easy, Some(1)).unwrap().name(), "Random");
        assert_eq!(opponent_for(GameMode::Hard, None).unwrap().name(), "Heuristic");
        assert!(opponent_for(GameMode::Multiplayer, Some(1)).is_none());
    }
}
