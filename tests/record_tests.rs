//! Record store integration tests: saving, listing, deleting and replaying
//! games, plus the resume snapshot.

use std::fs;

use connect_six::ai::Difficulty;
use connect_six::core::{GameConfig, GameState, Side};
use connect_six::error::RecordError;
use connect_six::record::{GameRecord, RecordStore, ResumeSnapshot, TIME_FORMAT};
use connect_six::session::{GameMode, Scoreboard, Session, SessionConfig};

fn won_by(side: Side) -> GameState {
    let mut state = GameState::default();
    if side == Side::White {
        state.place(10, 10).unwrap();
    }
    // The winner fills row 0, the loser row 1.
    for c in 0..6 {
        state.place(0, c).unwrap();
        if state.is_finished() {
            break;
        }
        state.place(1, c).unwrap();
    }
    state
}

fn drawn() -> GameState {
    let mut state = GameState::new(GameConfig::default().with_board_size(3));
    for r in 0..3 {
        for c in 0..3 {
            state.place(r, c).unwrap();
        }
    }
    state
}

// =============================================================================
// Records
// =============================================================================

#[test]
fn test_save_and_reload_games() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path());

    let black_win = won_by(Side::Black);
    let white_win = won_by(Side::White);
    assert_eq!(black_win.winner(), Some(Side::Black));
    assert_eq!(white_win.winner(), Some(Side::White));

    store.append(&GameRecord::from_state(&black_win)).unwrap();
    store.append(&GameRecord::from_state(&white_win)).unwrap();
    assert_eq!(store.count().unwrap(), 2);

    let replayed = store.load(1).unwrap().replay(GameConfig::default()).unwrap();
    assert_eq!(replayed.board(), white_win.board());
    assert_eq!(replayed.winner(), Some(Side::White));
    assert_eq!(replayed.move_count(), white_win.move_count());
    assert!(replayed.is_finished());
}

#[test]
fn test_draw_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path());
    let state = drawn();

    store.append(&GameRecord::from_state(&state)).unwrap();
    let record = store.load(0).unwrap();
    assert_eq!(record.winner, 0);

    let replayed = record.replay(*state.config()).unwrap();
    assert!(replayed.is_finished());
    assert_eq!(replayed.winner(), None);
    assert_eq!(replayed.move_count(), 9);
}

#[test]
fn test_timestamp_format() {
    let record = GameRecord::from_state(&won_by(Side::Black));
    assert!(chrono::NaiveDateTime::parse_from_str(&record.time, TIME_FORMAT).is_ok());
}

#[test]
fn test_records_file_is_one_json_object_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path());
    store.append(&GameRecord::from_state(&won_by(Side::Black))).unwrap();
    store.append(&GameRecord::from_state(&drawn())).unwrap();

    let content = fs::read_to_string(store.records_path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value["moves"].is_array());
        assert!(value["winner"].is_u64());
        assert!(value["undo"].is_u64());
    }
}

#[test]
fn test_reads_records_without_undo_field() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path());
    fs::write(
        store.records_path(),
        "{\"time\":\"2023-01-01 10:00:00\",\"winner\":1,\"moves\":[{\"p\":1,\"r\":9,\"c\":9}]}\n",
    )
    .unwrap();

    let record = store.load(0).unwrap();
    assert_eq!(record.undo, 0);
    assert_eq!(record.winner().unwrap(), Some(Side::Black));
    assert_eq!(record.replay(GameConfig::default()).unwrap().undo_count(), 0);
}

#[test]
fn test_delete_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path());
    for time in ["a", "b", "c"] {
        store
            .append(&GameRecord::from_state(&drawn()).with_time(time))
            .unwrap();
    }

    assert!(store.delete(1).unwrap());
    assert!(!store.delete(5).unwrap());

    let times: Vec<String> = store.list().unwrap().into_iter().map(|r| r.time).collect();
    assert_eq!(times, vec!["a", "c"]);
    assert!(matches!(store.load(2), Err(RecordError::NotFound(2))));
}

#[test]
fn test_clear_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path());
    store.append(&GameRecord::from_state(&drawn())).unwrap();

    store.clear().unwrap();
    assert_eq!(store.count().unwrap(), 0);
    assert!(store.list().unwrap().is_empty());
}

// =============================================================================
// Resume Snapshot
// =============================================================================

#[test]
fn test_resume_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path());

    let config = SessionConfig::default()
        .with_mode(GameMode::VersusAi(Difficulty::Heuristic))
        .with_seed(11)
        .with_data_dir(dir.path());
    let mut session = Session::new(&config, Scoreboard::new()).unwrap();
    session.play(9, 9).unwrap();
    session.ai_turn().unwrap().unwrap();
    session.play(3, 3).unwrap();
    session.ai_turn().unwrap().unwrap();
    assert!(session.undo());

    store.save_resume(&session.snapshot(300)).unwrap();
    assert!(store.has_resume());

    let snapshot = store.load_resume().unwrap().unwrap();
    let (resumed, elapsed) = Session::resume(&config, &snapshot, Scoreboard::new()).unwrap();
    assert_eq!(elapsed, 300);
    assert_eq!(resumed.mode(), GameMode::VersusAi(Difficulty::Heuristic));
    assert_eq!(resumed.state(), session.state());
    assert_eq!(resumed.state().undo_count(), 1);
    assert_eq!(resumed.state().current_player(), Side::Black);

    store.clear_resume().unwrap();
    assert!(!store.has_resume());
    assert!(store.load_resume().unwrap().is_none());
}

#[test]
fn test_resume_replaces_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path());

    let mut state = GameState::default();
    state.place(1, 1).unwrap();
    store.save_resume(&ResumeSnapshot::capture(&state, 1, 5)).unwrap();
    state.place(2, 2).unwrap();
    store.save_resume(&ResumeSnapshot::capture(&state, 1, 9)).unwrap();

    let snapshot = store.load_resume().unwrap().unwrap();
    assert_eq!(snapshot.elapsed, 9);
    assert_eq!(snapshot.restore(GameConfig::default()).unwrap(), state);
}

#[test]
fn test_corrupt_resume_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::new(dir.path());
    fs::write(store.resume_path(), [0xff]).unwrap();

    assert!(store.has_resume());
    assert!(matches!(store.load_resume(), Err(RecordError::Bincode(_))));
}
