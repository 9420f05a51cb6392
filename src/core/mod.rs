//! Core data model: sides, cells, board, moves, state, RNG, configuration.
//!
//! Everything here is plain data. Rules live in [`crate::rules`], move
//! selection in [`crate::ai`].

pub mod board;
pub mod config;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use board::Board;
pub use config::{GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH, MAX_BOARD_SIZE};
pub use moves::{Move, Pos};
pub use player::{Cell, Side, SideMap};
pub use rng::GameRng;
pub use state::GameState;
