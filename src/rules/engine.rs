//! State transitions: placing stones, undoing them, and replaying histories.
//!
//! These are the only operations that mutate a [`GameState`]. Each one either
//! succeeds completely or returns an error with the state untouched.

use tracing::debug;

use crate::core::{Cell, GameConfig, GameState, Move, Pos, Side};
use crate::error::GameError;

use super::win;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The side that completed a winning run.
    Winner(Side),
    /// Board filled with no winning run.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

impl GameState {
    /// Check whether (`row`, `col`) lies on the board.
    #[must_use]
    pub fn within_bounds(&self, row: usize, col: usize) -> bool {
        self.board.contains(Pos::new(row, col))
    }

    /// True once every cell holds a stone.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.moves.len() == self.config.cell_count()
    }

    /// Outcome of a finished game, `None` while it is still open.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.finished {
            return None;
        }
        Some(match self.winner {
            Some(side) => GameResult::Winner(side),
            None => GameResult::Draw,
        })
    }

    /// Place a stone for the side to move.
    ///
    /// On success the move is appended to the history and the game either
    /// ends (win or full board) or passes to the other side.
    ///
    /// ```
    /// use connect_six::core::{GameState, Side};
    /// use connect_six::error::GameError;
    ///
    /// let mut state = GameState::default();
    /// state.place(9, 9).unwrap();
    /// assert_eq!(state.current_player(), Side::White);
    /// assert_eq!(state.place(9, 9), Err(GameError::CellOccupied { row: 9, col: 9 }));
    /// ```
    pub fn place(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::GameFinished);
        }
        if !self.within_bounds(row, col) {
            return Err(GameError::InvalidCoordinate {
                row,
                col,
                size: self.config.board_size,
            });
        }
        let pos = Pos::new(row, col);
        if !self.board.get(pos).is_empty() {
            return Err(GameError::CellOccupied { row, col });
        }

        let mover = self.current_player;
        self.board.set(pos, Cell::from(mover));
        self.moves.push_back(Move::new(row, col, mover));
        debug!(row, col, side = %mover, ply = self.moves.len(), "stone placed");

        if let Some(winner) = win::check(&self.board, pos, self.config.win_length) {
            self.finished = true;
            self.winner = Some(winner);
            debug!(side = %winner, "winning run completed");
        } else if self.is_full() {
            self.finished = true;
            self.winner = None;
            debug!("board full, game drawn");
        } else {
            self.current_player = mover.opponent();
        }
        Ok(())
    }

    /// Take back the last move.
    ///
    /// The removed move's mover is to play again (Black on an empty history),
    /// and the game is reopened even if the removed move had won it.
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.try_undo().is_ok()
    }

    /// Like [`GameState::undo`], returning the removed move.
    pub fn try_undo(&mut self) -> Result<Move, GameError> {
        let last = self.moves.pop_back().ok_or(GameError::NothingToUndo)?;

        self.board.set(last.pos(), Cell::Empty);
        self.current_player = if self.moves.is_empty() {
            Side::Black
        } else {
            last.mover
        };
        self.finished = false;
        self.winner = None;
        debug!(row = last.row, col = last.col, side = %last.mover, "move undone");
        Ok(last)
    }

    /// Rebuild a game by replaying `moves` in order.
    ///
    /// Each move is played by its recorded mover rather than by strict
    /// alternation, so histories shaped by undo still replay. Afterwards the
    /// side to move is `next_player`, or the side implied by move-count parity
    /// when none is given.
    pub fn replay<'a, I>(
        config: GameConfig,
        moves: I,
        next_player: Option<Side>,
    ) -> Result<GameState, GameError>
    where
        I: IntoIterator<Item = &'a Move>,
    {
        let mut state = GameState::new(config);
        for mv in moves {
            state.current_player = mv.mover;
            state.finished = false;
            state.winner = None;
            state.place(mv.row, mv.col)?;
        }
        state.current_player = next_player.unwrap_or_else(|| Side::from_parity(state.moves.len()));
        Ok(state)
    }
}
