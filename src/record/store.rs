//! On-disk storage for game records and the resume snapshot.
//!
//! ## Layout
//!
//! - `records.json`: newline-delimited JSON, one [`GameRecord`] per line,
//!   appended as games finish. Records are addressed by 0-based line index.
//! - `resume.bin`: the single [`ResumeSnapshot`], bincode-encoded.
//!
//! The directory is created on first write.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::RecordError;

use super::history::GameRecord;
use super::resume::ResumeSnapshot;

/// File name of the record log.
pub const RECORDS_FILE: &str = "records.json";

/// File name of the resume snapshot.
pub const RESUME_FILE: &str = "resume.bin";

const RECORDS_TMP_FILE: &str = "records.tmp";

/// Record log and resume snapshot rooted at one directory.
#[derive(Clone, Debug)]
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn records_path(&self) -> PathBuf {
        self.dir.join(RECORDS_FILE)
    }

    #[must_use]
    pub fn resume_path(&self) -> PathBuf {
        self.dir.join(RESUME_FILE)
    }

    fn ensure_dir(&self) -> Result<(), RecordError> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Read the record log, treating a missing file as empty.
    fn read_lines(&self) -> Result<Vec<String>, RecordError> {
        match fs::read_to_string(self.records_path()) {
            Ok(content) => Ok(content.lines().map(str::to_owned).collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    // === Records ===

    /// Append a finished game to the log.
    pub fn append(&self, record: &GameRecord) -> Result<(), RecordError> {
        self.ensure_dir()?;
        let line = record.to_json_line()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.records_path())?;
        writeln!(file, "{line}")?;
        info!(
            path = %self.records_path().display(),
            moves = record.moves.len(),
            winner = record.winner,
            "game record saved"
        );
        Ok(())
    }

    /// Number of records in the log.
    pub fn count(&self) -> Result<usize, RecordError> {
        Ok(self.read_lines()?.len())
    }

    /// Load the record at `index`.
    pub fn load(&self, index: usize) -> Result<GameRecord, RecordError> {
        let lines = self.read_lines()?;
        let line = lines.get(index).ok_or(RecordError::NotFound(index))?;
        GameRecord::from_json_line(line)
    }

    /// All readable records in log order. Corrupt lines are skipped.
    pub fn list(&self) -> Result<Vec<GameRecord>, RecordError> {
        let records = self
            .read_lines()?
            .iter()
            .enumerate()
            .filter_map(|(index, line)| match GameRecord::from_json_line(line) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(index, error = %e, "skipping unreadable game record");
                    None
                }
            })
            .collect();
        Ok(records)
    }

    /// Remove the record at `index`. Returns `false` if there was none.
    ///
    /// The remaining lines are written to a temporary file that then replaces
    /// the log.
    pub fn delete(&self, index: usize) -> Result<bool, RecordError> {
        let mut lines = self.read_lines()?;
        if index >= lines.len() {
            return Ok(false);
        }
        lines.remove(index);

        let tmp = self.dir.join(RECORDS_TMP_FILE);
        {
            let mut out = fs::File::create(&tmp)?;
            for line in &lines {
                writeln!(out, "{line}")?;
            }
            out.sync_all()?;
        }
        fs::rename(&tmp, self.records_path())?;
        info!(index, remaining = lines.len(), "game record deleted");
        Ok(true)
    }

    /// Remove every record.
    pub fn clear(&self) -> Result<(), RecordError> {
        self.ensure_dir()?;
        fs::File::create(self.records_path())?;
        info!("game records cleared");
        Ok(())
    }

    // === Resume snapshot ===

    /// True if a non-empty snapshot file exists.
    #[must_use]
    pub fn has_resume(&self) -> bool {
        fs::metadata(self.resume_path())
            .map(|m| m.len() > 0)
            .unwrap_or(false)
    }

    /// Save `snapshot`, replacing any previous one.
    pub fn save_resume(&self, snapshot: &ResumeSnapshot) -> Result<(), RecordError> {
        self.ensure_dir()?;
        fs::write(self.resume_path(), snapshot.to_bytes()?)?;
        info!(moves = snapshot.moves.len(), elapsed = snapshot.elapsed, "resume snapshot saved");
        Ok(())
    }

    /// Load the saved snapshot, if any.
    pub fn load_resume(&self) -> Result<Option<ResumeSnapshot>, RecordError> {
        match fs::read(self.resume_path()) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => ResumeSnapshot::from_bytes(&bytes).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete the snapshot. A missing snapshot is not an error.
    pub fn clear_resume(&self) -> Result<(), RecordError> {
        match fs::remove_file(self.resume_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
