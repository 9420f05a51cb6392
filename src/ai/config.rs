//! AI difficulty tiers and their tuning constants.

use serde::{Deserialize, Serialize};

/// Exclusive upper bound of the tie-break jitter added by the heuristic tier.
pub const HEURISTIC_JITTER: u32 = 5;

/// Exclusive upper bound of the jitter used by the tactical tier's fallback.
pub const TACTICAL_JITTER: u32 = 3;

/// AI strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Random,
    /// Best cell under the run-length heuristic.
    Heuristic,
    /// Win, block, threat mitigation, then heuristic.
    #[default]
    Tactical,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Random, Difficulty::Heuristic, Difficulty::Tactical];

    /// Map a numeric level to a tier: 1 and below is random, 2 heuristic,
    /// anything higher tactical.
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        match level {
            0 | 1 => Difficulty::Random,
            2 => Difficulty::Heuristic,
            _ => Difficulty::Tactical,
        }
    }

    /// Numeric level (1-3).
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Difficulty::Random => 1,
            Difficulty::Heuristic => 2,
            Difficulty::Tactical => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Random => "random",
            Difficulty::Heuristic => "heuristic",
            Difficulty::Tactical => "tactical",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown difficulty '{s}' (expected random, heuristic or tactical)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_level() {
        assert_eq!(Difficulty::from_level(0), Difficulty::Random);
        assert_eq!(Difficulty::from_level(1), Difficulty::Random);
        assert_eq!(Difficulty::from_level(2), Difficulty::Heuristic);
        assert_eq!(Difficulty::from_level(3), Difficulty::Tactical);
        assert_eq!(Difficulty::from_level(9), Difficulty::Tactical);
    }

    #[test]
    fn test_level_round_trip() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_level(d.level()), d);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Tactical".parse::<Difficulty>(), Ok(Difficulty::Tactical));
        assert_eq!("random".parse::<Difficulty>(), Ok(Difficulty::Random));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Difficulty::Heuristic).unwrap();
        assert_eq!(json, "\"heuristic\"");
        let back: Difficulty = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Difficulty::Heuristic);
    }
}
