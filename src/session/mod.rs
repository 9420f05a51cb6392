//! Session layer: modes, human/AI turn order, logical undo, and scores.
//!
//! A [`Session`] wraps one [`GameState`](crate::core::GameState) at a time.
//! In AI modes the human plays Black and the AI plays White; the caller asks
//! for the AI's reply with [`Session::ai_turn`] after each human move.

pub mod config;
pub mod context;
pub mod mode;
pub mod scoreboard;

pub use config::SessionConfig;
pub use context::Session;
pub use mode::GameMode;
pub use scoreboard::Scoreboard;
