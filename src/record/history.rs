//! Finished-game records and their wire format.
//!
//! One record is one JSON object, written on a single line:
//!
//! ```text
//! {"time":"2024-05-01 20:15:03","winner":1,"undo":2,"moves":[{"p":1,"r":9,"c":9},...]}
//! ```
//!
//! Sides are encoded as 1 (Black) and 2 (White); a winner of 0 means a draw.
//! Records written before undo tracking existed have no `undo` field and load
//! with an undo count of 0.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameState, Move, Side};
use crate::error::RecordError;

/// Timestamp format used in records.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wire code for a side.
#[must_use]
pub const fn side_code(side: Side) -> u8 {
    match side {
        Side::Black => 1,
        Side::White => 2,
    }
}

/// Parse a wire side code.
pub fn side_from_code(code: u8) -> Result<Side, RecordError> {
    match code {
        1 => Ok(Side::Black),
        2 => Ok(Side::White),
        other => Err(RecordError::InvalidSide(other)),
    }
}

/// Wire code for a game outcome: 0 for no winner.
#[must_use]
pub const fn winner_code(winner: Option<Side>) -> u8 {
    match winner {
        Some(side) => side_code(side),
        None => 0,
    }
}

fn winner_from_code(code: u8) -> Result<Option<Side>, RecordError> {
    match code {
        0 => Ok(None),
        1 | 2 => side_from_code(code).map(Some),
        other => Err(RecordError::InvalidWinner(other)),
    }
}

/// One move as stored on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Mover code.
    pub p: u8,
    /// Row.
    pub r: usize,
    /// Column.
    pub c: usize,
}

impl From<&Move> for MoveEntry {
    fn from(mv: &Move) -> Self {
        Self {
            p: side_code(mv.mover),
            r: mv.row,
            c: mv.col,
        }
    }
}

impl TryFrom<MoveEntry> for Move {
    type Error = RecordError;

    fn try_from(entry: MoveEntry) -> Result<Self, Self::Error> {
        Ok(Move::new(entry.r, entry.c, side_from_code(entry.p)?))
    }
}

/// Decode a list of wire moves.
pub fn decode_moves(entries: &[MoveEntry]) -> Result<Vec<Move>, RecordError> {
    entries.iter().map(|&e| Move::try_from(e)).collect()
}

/// Encode a move history for the wire.
pub fn encode_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> Vec<MoveEntry> {
    moves.into_iter().map(MoveEntry::from).collect()
}

/// A finished game: when it was played, who won, how often undo was used,
/// and every move in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Local time the record was made (`YYYY-MM-DD HH:MM:SS`).
    pub time: String,

    /// Winner code (0 = draw).
    pub winner: u8,

    /// Logical undo requests made during the game.
    #[serde(default)]
    pub undo: u32,

    /// Moves in play order.
    pub moves: Vec<MoveEntry>,
}

impl GameRecord {
    /// Capture a game, stamped with the current local time.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            time: chrono::Local::now().format(TIME_FORMAT).to_string(),
            winner: winner_code(state.winner()),
            undo: state.undo_count(),
            moves: encode_moves(state.moves()),
        }
    }

    /// Replace the timestamp.
    #[must_use]
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Decoded winner.
    pub fn winner(&self) -> Result<Option<Side>, RecordError> {
        winner_from_code(self.winner)
    }

    /// Decoded moves.
    pub fn moves(&self) -> Result<Vec<Move>, RecordError> {
        decode_moves(&self.moves)
    }

    /// Rebuild the finished game.
    ///
    /// Moves are replayed with their recorded movers; the result is marked
    /// finished with the recorded winner and undo count, and the side to move
    /// follows move-count parity.
    pub fn replay(&self, config: GameConfig) -> Result<GameState, RecordError> {
        let moves = self.moves()?;
        let winner = self.winner()?;

        let mut state = GameState::replay(config, &moves, None)?;
        state.finished = true;
        state.winner = winner;
        state.undo_count = self.undo;
        Ok(state)
    }

    /// Serialize as a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse one JSON line.
    pub fn from_json_line(line: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(line.trim())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pos;

    fn won_game() -> GameState {
        let mut state = GameState::default();
        for c in 0..5 {
            state.place(0, c).unwrap();
            state.place(1, c).unwrap();
        }
        state.place(0, 5).unwrap();
        state
    }

    #[test]
    fn test_side_codes() {
        assert_eq!(side_code(Side::Black), 1);
        assert_eq!(side_code(Side::White), 2);
        assert_eq!(side_from_code(2).unwrap(), Side::White);
        assert!(matches!(side_from_code(3), Err(RecordError::InvalidSide(3))));
        assert_eq!(winner_code(None), 0);
    }

    #[test]
    fn test_wire_format() {
        let mut state = GameState::default();
        state.place(9, 9).unwrap();
        state.place(9, 10).unwrap();
        let record = GameRecord::from_state(&state).with_time("2024-01-02 03:04:05");

        assert_eq!(
            record.to_json_line().unwrap(),
            r#"{"time":"2024-01-02 03:04:05","winner":0,"undo":0,"moves":[{"p":1,"r":9,"c":9},{"p":2,"r":9,"c":10}]}"#
        );
    }

    #[test]
    fn test_missing_undo_defaults_to_zero() {
        let line = r#"{"time":"t","winner":2,"moves":[{"p":1,"r":0,"c":0}]}"#;
        let record = GameRecord::from_json_line(line).unwrap();
        assert_eq!(record.undo, 0);
        assert_eq!(record.winner().unwrap(), Some(Side::White));
    }

    #[test]
    fn test_replay_round_trip() {
        let mut state = won_game();
        state.set_undo_count(2);
        let record = GameRecord::from_state(&state);

        let replayed = record.replay(GameConfig::default()).unwrap();
        assert_eq!(replayed.board(), state.board());
        assert_eq!(replayed.winner(), Some(Side::Black));
        assert!(replayed.is_finished());
        assert_eq!(replayed.move_count(), 11);
        assert_eq!(replayed.undo_count(), 2);
        // 11 moves: parity says White would move next.
        assert_eq!(replayed.current_player(), Side::White);
    }

    #[test]
    fn test_replay_rejects_bad_codes() {
        let record = GameRecord {
            time: "t".into(),
            winner: 7,
            undo: 0,
            moves: vec![],
        };
        assert!(matches!(
            record.replay(GameConfig::default()),
            Err(RecordError::InvalidWinner(7))
        ));

        let record = GameRecord {
            time: "t".into(),
            winner: 0,
            undo: 0,
            moves: vec![MoveEntry { p: 0, r: 1, c: 1 }],
        };
        assert!(matches!(
            record.replay(GameConfig::default()),
            Err(RecordError::InvalidSide(0))
        ));
    }

    #[test]
    fn test_replay_rejects_off_board_move() {
        let record = GameRecord {
            time: "t".into(),
            winner: 0,
            undo: 0,
            moves: vec![MoveEntry { p: 1, r: 30, c: 1 }],
        };
        assert!(matches!(
            record.replay(GameConfig::default()),
            Err(RecordError::Replay(_))
        ));
    }

    #[test]
    fn test_move_entry_conversion() {
        let mv = Move::new(4, 5, Side::White);
        let entry = MoveEntry::from(&mv);
        assert_eq!(entry, MoveEntry { p: 2, r: 4, c: 5 });
        assert_eq!(Move::try_from(entry).unwrap().pos(), Pos::new(4, 5));
    }
}
