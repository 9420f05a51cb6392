//! Board coordinates and recorded moves.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// A board coordinate. Row-major ordering matches the AI's scan order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A stone placed by `mover` at (`row`, `col`).
///
/// Moves are appended to the game history in play order and never change
/// afterwards; the history is both the undo stack and the replay source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub mover: Side,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, col: usize, mover: Side) -> Self {
        Self { row, col, mover }
    }

    #[must_use]
    pub const fn pos(&self) -> Pos {
        Pos::new(self.row, self.col)
    }
}
