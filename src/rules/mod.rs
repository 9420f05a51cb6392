//! Game rules: placement, undo, replay, and win detection.
//!
//! - [`engine`]: the state transitions on [`crate::core::GameState`]
//! - [`win`]: run measurement and the last-move win check, shared with the AI

pub mod engine;
pub mod win;

pub use engine::GameResult;
pub use win::Axis;
