//! # Connect N
//!
//! Connect Four generalized to any square board up to 11x11 and any winning
//! run length. Two people can share the terminal, or one can face a computer
//! opponent that either plays randomly or scores every column with a
//! window-counting heuristic.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, line scanning, player, turn controller
//! - [`ai`]: Agent trait, random and heuristic opponents
//! - [`arena`]: Computer-vs-computer games and result tallies
//! - [`ui`]: Terminal UI: setup screen and game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
