use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// A candidate must beat this score to replace the random default column.
pub const SCORE_FLOOR: i64 = -10_000;

/// One-ply agent: tries every open column, scores the resulting position and
/// keeps the best. The default pick is a random open column, so it only
/// survives when every candidate scores at or below [`SCORE_FLOOR`].
pub struct HeuristicAgent {
    rng: StdRng,
    heuristic: Box<dyn Heuristic>,
}

impl HeuristicAgent {
    pub fn new() -> Self {
        HeuristicAgent {
            rng: StdRng::from_os_rng(),
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        HeuristicAgent {
            rng: StdRng::seed_from_u64(seed),
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(seed: u64, heuristic: Box<dyn Heuristic>) -> Self {
        HeuristicAgent {
            rng: StdRng::seed_from_u64(seed),
            heuristic,
        }
    }

    /// Score of the position after `player` drops into each open column, in
    /// column order. Each candidate is placed and removed again, so the board
    /// is unchanged on return.
    pub fn score_candidates(&self, board: &mut Board, player: Player) -> Vec<(usize, i64)> {
        let heuristic = &self.heuristic;
        board
            .valid_columns()
            .into_iter()
            .filter_map(|col| {
                board
                    .with_piece(col, player.to_cell(), |b, _| heuristic.evaluate(b, player))
                    .ok()
                    .map(|score| (col, score))
            })
            .collect()
    }

    /// Column with the strictly highest score. Ties keep the earliest column;
    /// the starting column is picked at random among the open ones.
    pub fn pick_best_move(&mut self, board: &mut Board, player: Player) -> Option<usize> {
        let columns = board.valid_columns();
        if columns.is_empty() {
            return None;
        }

        let mut best_col = columns[self.rng.random_range(0..columns.len())];
        let mut best_score = SCORE_FLOOR;
        let candidates = self.score_candidates(board, player);
        for &(col, score) in &candidates {
            if score > best_score {
                best_score = score;
                best_col = col;
            }
        }

        tracing::trace!(player = player.name(), ?candidates, "candidate scores");
        tracing::debug!(player = player.name(), column = best_col, score = best_score, "best move");
        Some(best_col)
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HeuristicAgent {
    fn select_action(&mut self, board: &mut Board, player: Player) -> Option<usize> {
        self.pick_best_move(board, player)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
