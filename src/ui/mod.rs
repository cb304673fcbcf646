//! Terminal UI: a setup screen for board size, connect length and mode,
//! then the game screen with keyboard and mouse input.

mod app;
pub mod board_widget;
mod game_view;
pub mod setup_view;

pub use app::App;
