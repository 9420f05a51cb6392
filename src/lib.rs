//! # connect-six
//!
//! A six-in-a-row board game engine with a tiered AI opponent.
//!
//! ## Design Principles
//!
//! 1. **Rules Own the State**: `GameState` is only changed through `place`,
//!    `undo`, and replay. Failed operations leave it untouched.
//!
//! 2. **Last-Move Win Detection**: Only runs through the stone just placed
//!    are measured, along four axes.
//!
//! 3. **Injected Randomness**: The AI draws from a seedable `GameRng`, so
//!    every decision is reproducible.
//!
//! ## Architecture
//!
//! - **Persistent History**: Moves live in an `im` vector that doubles as
//!   the undo stack and the replay source.
//!
//! - **Tactical Cascade**: The strongest AI tier tries, in order, an immediate
//!   win, a block, extending a long run, then the heuristic score.
//!
//! ## Modules
//!
//! - `core`: Sides, cells, board, moves, state, RNG, configuration
//! - `rules`: Placement, undo, replay, and win detection
//! - `ai`: Random, heuristic, and tactical move selection
//! - `session`: Modes, human/AI turn order, logical undo, scoreboards
//! - `record`: Game records (NDJSON) and the resume snapshot
//! - `error`: Error types

pub mod ai;
pub mod core;
pub mod error;
pub mod record;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, GameConfig, GameRng, GameState, Move, Pos, Side, SideMap,
};

pub use crate::rules::{Axis, GameResult};

pub use crate::ai::{AiEngine, Decision, DecisionReason, Difficulty, MovePolicy};

pub use crate::session::{GameMode, Scoreboard, Session, SessionConfig};

pub use crate::record::{GameRecord, RecordStore, ResumeSnapshot};

pub use crate::error::{ConfigError, GameError, RecordError, SessionError};
