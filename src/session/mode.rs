//! Who plays whom.

use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;
use crate::core::Side;
use crate::error::RecordError;

/// Session mode: two humans, or a human (Black) against the AI (White).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GameMode {
    #[default]
    TwoPlayer,
    VersusAi(Difficulty),
}

impl GameMode {
    /// Side the AI plays in AI modes.
    pub const AI_SIDE: Side = Side::White;

    /// The AI's side, if this mode has one.
    #[must_use]
    pub const fn ai_side(self) -> Option<Side> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VersusAi(_) => Some(Self::AI_SIDE),
        }
    }

    #[must_use]
    pub const fn is_versus_ai(self) -> bool {
        matches!(self, GameMode::VersusAi(_))
    }

    /// Numeric code used in resume snapshots: 1 for two players, 2-4 for
    /// AI levels 1-3.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            GameMode::TwoPlayer => 1,
            GameMode::VersusAi(d) => d.level() + 1,
        }
    }

    /// Parse a snapshot mode code.
    pub fn from_code(code: u8) -> Result<Self, RecordError> {
        match code {
            1 => Ok(GameMode::TwoPlayer),
            2..=4 => Ok(GameMode::VersusAi(Difficulty::from_level(code - 1))),
            other => Err(RecordError::InvalidMode(other)),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::TwoPlayer => f.write_str("two-player"),
            GameMode::VersusAi(d) => write!(f, "ai-{d}"),
        }
    }
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("two-player") {
            return Ok(GameMode::TwoPlayer);
        }
        s.strip_prefix("ai-")
            .ok_or_else(|| format!("unknown game mode '{s}' (expected two-player or ai-<difficulty>)"))?
            .parse()
            .map(GameMode::VersusAi)
    }
}

impl TryFrom<String> for GameMode {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<GameMode> for String {
    fn from(mode: GameMode) -> Self {
        mode.to_string()
    }
}
