//! Tiered move selection.
//!
//! ## Components
//!
//! - [`AiEngine`]: entry point, dispatches on [`Difficulty`]
//! - [`MovePolicy`]: one implementation per tier
//!   - [`RandomPolicy`]: uniform over empty cells
//!   - [`HeuristicPolicy`]: run-length score plus jitter
//!   - [`TacticalPolicy`]: win, block, threat, then heuristic
//! - [`eval`]: the scoring function shared by the heuristic tiers
//!
//! ## Determinism
//!
//! The only source of randomness is the [`GameRng`](crate::core::GameRng)
//! passed into each call. The same seed and board always give the same move.

pub mod config;
pub mod eval;
pub mod policy;
pub mod search;

pub use config::{Difficulty, HEURISTIC_JITTER, TACTICAL_JITTER};
pub use policy::{
    Decision, DecisionReason, HeuristicPolicy, MovePolicy, RandomPolicy, TacticalPolicy,
};
pub use search::AiEngine;
