//! Core Connect-N game logic: board representation, axes, player types, and
//! the turn controller.

mod axis;
mod board;
mod player;
mod state;

pub use axis::Axis;
pub use board::{Board, Cell};
pub use player::Player;
pub use state::{GameOutcome, GameState, GameStatus, MoveRecord};
