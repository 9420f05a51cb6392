//! Resume snapshots for a game left unfinished.
//!
//! A snapshot carries the move history plus the values the game core does
//! not interpret: the session mode code and elapsed seconds. The undo counter
//! and side to move come back exactly as saved.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameState, Side};
use crate::error::RecordError;

use super::history::{decode_moves, encode_moves, side_code, side_from_code, MoveEntry};

/// An in-progress game, saved so it can be picked up later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSnapshot {
    /// Session mode code (opaque here).
    pub mode: u8,

    /// Seconds played so far (opaque here).
    pub elapsed: u64,

    /// Side to move code (1 or 2).
    pub current: u8,

    /// Logical undo requests so far.
    pub undo: u32,

    /// Moves in play order.
    pub moves: Vec<MoveEntry>,
}

impl ResumeSnapshot {
    /// Capture `state` together with the caller's opaque values.
    #[must_use]
    pub fn capture(state: &GameState, mode: u8, elapsed: u64) -> Self {
        Self {
            mode,
            elapsed,
            current: side_code(state.current_player()),
            undo: state.undo_count(),
            moves: encode_moves(state.moves()),
        }
    }

    /// Rebuild the game as an open game.
    ///
    /// The side to move is the saved one; an unrecognised code falls back to
    /// move-count parity.
    pub fn restore(&self, config: GameConfig) -> Result<GameState, RecordError> {
        let moves = decode_moves(&self.moves)?;
        let next = side_from_code(self.current).ok();

        let mut state = GameState::replay(config, &moves, next)?;
        state.finished = false;
        state.winner = None;
        state.undo_count = self.undo;
        if next.is_none() {
            state.current_player = Side::from_parity(state.move_count());
        }
        Ok(state)
    }

    /// Encode for storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from storage.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
