//! Board geometry and win condition.
//!
//! The reference game is 19×19 with six in a row to win. Both numbers are
//! configurable so tests can use tiny boards where no six fits.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default board dimension.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Default run length required to win.
pub const DEFAULT_WIN_LENGTH: usize = 6;

/// Largest supported board dimension.
pub const MAX_BOARD_SIZE: usize = 64;

/// Rules configuration shared by the rules engine and the AI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board dimension N (the board is N×N).
    pub board_size: usize,

    /// Contiguous same-colour stones needed to win.
    pub win_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

impl GameConfig {
    /// Set the board dimension.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the winning run length.
    #[must_use]
    pub fn with_win_length(mut self, length: usize) -> Self {
        self.win_length = length;
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Opponent run length the tactical AI treats as a threat.
    #[must_use]
    pub fn threat_threshold(&self) -> usize {
        if self.win_length > 2 {
            self.win_length - 2
        } else {
            2
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "game.board_size must be in 1..={MAX_BOARD_SIZE}, got {}",
                self.board_size
            )));
        }
        if self.win_length < 2 {
            return Err(ConfigError::Validation(format!(
                "game.win_length must be >= 2, got {}",
                self.win_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 19);
        assert_eq!(config.win_length, 6);
        assert_eq!(config.cell_count(), 361);
        assert_eq!(config.threat_threshold(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default().with_board_size(7).with_win_length(4);

        assert_eq!(config.board_size, 7);
        assert_eq!(config.win_length, 4);
        assert_eq!(config.threat_threshold(), 2);
    }

    #[test]
    fn test_threat_threshold_floor() {
        let config = GameConfig::default().with_win_length(2);
        assert_eq!(config.threat_threshold(), 2);
    }

    #[test]
    fn test_validation_rejects_bad_sizes() {
        assert!(GameConfig::default().with_board_size(0).validate().is_err());
        assert!(GameConfig::default().with_board_size(65).validate().is_err());
        assert!(GameConfig::default().with_win_length(1).validate().is_err());
        assert!(GameConfig::default().with_board_size(4).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_board_size(15);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
