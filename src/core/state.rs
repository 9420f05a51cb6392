//! Game state: board, turn, outcome, and move history.
//!
//! ## Invariants
//!
//! After every operation:
//! - `moves.len()` equals the number of stones on the board
//! - `winner.is_some()` implies `finished`
//! - every recorded move lies on the board
//!
//! The state is only mutated through the rules engine
//! ([`crate::rules::engine`]): `place`, `undo`, and replay.

use im::Vector;

use crate::error::ConfigError;

use super::board::Board;
use super::config::GameConfig;
use super::moves::Move;
use super::player::Side;

/// Complete state of one game.
///
/// Uses an `im` persistent vector for the move history so cloning a state
/// (replays, AI what-ifs, snapshots) stays cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) current_player: Side,
    pub(crate) finished: bool,
    pub(crate) winner: Option<Side>,
    pub(crate) undo_count: u32,
    pub(crate) moves: Vector<Move>,
}

impl GameState {
    /// Create an empty game. Black moves first.
    ///
    /// `config` is taken as given; use [`GameState::try_new`] for values that
    /// have not been validated yet.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            config,
            current_player: Side::Black,
            finished: false,
            winner: None,
            undo_count: 0,
            moves: Vector::new(),
        }
    }

    /// Validate `config`, then create an empty game.
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose stone the next `place` will put down.
    #[must_use]
    pub fn current_player(&self) -> Side {
        self.current_player
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Winner of a finished game; `None` while open or after a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Logical undo requests made in this game.
    ///
    /// Maintained by the session layer, not by `undo` itself.
    #[must_use]
    pub fn undo_count(&self) -> u32 {
        self.undo_count
    }

    pub fn set_undo_count(&mut self, count: u32) {
        self.undo_count = count;
    }

    /// Move history in play order.
    #[must_use]
    pub fn moves(&self) -> &Vector<Move> {
        &self.moves
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.moves.back()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
