//! Win tallies kept across the games of one session.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};
use crate::rules::GameResult;

use super::mode::GameMode;

/// Wins per side, tracked separately for two-player and versus-AI games.
///
/// Draws are not tallied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    two_player: SideMap<u32>,
    versus_ai: SideMap<u32>,
}

impl Scoreboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a finished game.
    pub fn record(&mut self, mode: GameMode, result: GameResult) {
        if let GameResult::Winner(side) = result {
            self.tally_mut(mode)[side] += 1;
        }
    }

    /// Wins per side for the table `mode` belongs to.
    #[must_use]
    pub fn score(&self, mode: GameMode) -> &SideMap<u32> {
        if mode.is_versus_ai() {
            &self.versus_ai
        } else {
            &self.two_player
        }
    }

    #[must_use]
    pub fn wins(&self, mode: GameMode, side: Side) -> u32 {
        self.score(mode)[side]
    }

    /// Zero every tally.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn tally_mut(&mut self, mode: GameMode) -> &mut SideMap<u32> {
        if mode.is_versus_ai() {
            &mut self.versus_ai
        } else {
            &mut self.two_player
        }
    }
}
