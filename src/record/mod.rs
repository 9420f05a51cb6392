//! Persistence: finished-game records and the resume snapshot.
//!
//! The game core only needs records to round-trip moves, movers, winner, and
//! undo count; everything else (timestamps, mode codes, elapsed time) is
//! carried through unchanged.

pub mod history;
pub mod resume;
pub mod store;

pub use history::{side_code, side_from_code, winner_code, GameRecord, MoveEntry, TIME_FORMAT};
pub use resume::ResumeSnapshot;
pub use store::{RecordStore, RECORDS_FILE, RESUME_FILE};
