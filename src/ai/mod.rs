//! Computer players: the [`Agent`] trait, the window-scoring heuristic and
//! the two strategies built on it.

mod agent;
mod greedy;
pub mod heuristic;
mod random;

pub use agent::{opponent_for, Agent};
pub use greedy::{HeuristicAgent, SCORE_FLOOR};
pub use heuristic::{Heuristic, WindowHeuristic};
pub use random::RandomAgent;
