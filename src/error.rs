//! Error types.
//!
//! All errors are local and recoverable: a failed operation reports what went
//! wrong and leaves the game state untouched. What to do about it (ignore,
//! prompt, log) is up to the caller.

use std::path::PathBuf;

/// Errors from the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} board")]
    InvalidCoordinate { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("game is already finished")]
    GameFinished,

    #[error("no moves to undo")]
    NothingToUndo,
}

/// Errors from the session layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("it is the AI's turn to move")]
    NotYourTurn,

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

/// Errors from the record store and record conversion.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid side code {0} (expected 1 or 2)")]
    InvalidSide(u8),

    #[error("invalid winner code {0} (expected 0, 1 or 2)")]
    InvalidWinner(u8),

    #[error("invalid game mode code {0} (expected 1-4)")]
    InvalidMode(u8),

    #[error("no record at index {0}")]
    NotFound(usize),

    #[error("record does not replay: {0}")]
    Replay(#[from] GameError),
}
