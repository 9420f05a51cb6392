//! One player-facing session: a game at a time plus the running scores.
//!
//! The [`Scoreboard`] belongs to the caller. It is handed to each session and
//! taken back with [`Session::into_scoreboard`], so tallies carry across
//! modes and resumed games.

use tracing::{debug, info};

use crate::ai::{AiEngine, Decision};
use crate::core::{GameConfig, GameRng, GameState, Side};
use crate::error::{ConfigError, RecordError, SessionError};
use crate::record::{GameRecord, ResumeSnapshot};

use super::config::SessionConfig;
use super::mode::GameMode;
use super::scoreboard::Scoreboard;

/// Drives games in one mode, alternating human and AI turns when needed.
///
/// ```
/// use connect_six::ai::Difficulty;
/// use connect_six::session::{GameMode, Scoreboard, Session, SessionConfig};
///
/// let config = SessionConfig::default()
///     .with_mode(GameMode::VersusAi(Difficulty::Tactical))
///     .with_seed(7);
/// let mut session = Session::new(&config, Scoreboard::new()).unwrap();
///
/// session.play(9, 9).unwrap();
/// assert!(session.is_ai_turn());
/// let reply = session.ai_turn().unwrap();
/// assert!(reply.is_some());
/// assert_eq!(session.state().move_count(), 2);
///
/// // Nothing concluded yet, so the caller gets an empty tally back.
/// assert_eq!(session.into_scoreboard(), Scoreboard::new());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    mode: GameMode,
    state: GameState,
    rng: GameRng,
    ai: Option<AiEngine>,
    scoreboard: Scoreboard,
    concluded: bool,
}

impl Session {
    /// Start a session with an empty board, tallying into `scoreboard`.
    pub fn new(config: &SessionConfig, scoreboard: Scoreboard) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::try_new(config.game)?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self::with_state(config.mode, state, rng, scoreboard))
    }

    fn with_state(mode: GameMode, state: GameState, rng: GameRng, scoreboard: Scoreboard) -> Self {
        let ai = match mode {
            GameMode::TwoPlayer => None,
            GameMode::VersusAi(difficulty) => {
                Some(AiEngine::new(difficulty).with_config(*state.config()))
            }
        };
        Self {
            mode,
            state,
            rng,
            ai,
            scoreboard,
            concluded: false,
        }
    }

    /// Pick up a saved game, tallying into `scoreboard`. Returns the session
    /// and the elapsed seconds stored with the snapshot.
    pub fn resume(
        config: &SessionConfig,
        snapshot: &ResumeSnapshot,
        scoreboard: Scoreboard,
    ) -> Result<(Self, u64), RecordError> {
        let mode = GameMode::from_code(snapshot.mode)?;
        let state = snapshot.restore(config.game)?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(%mode, moves = state.move_count(), elapsed = snapshot.elapsed, "game resumed");
        Ok((Self::with_state(mode, state, rng, scoreboard), snapshot.elapsed))
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.state.config()
    }

    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// End the session, handing the scores back to the caller.
    #[must_use]
    pub fn into_scoreboard(self) -> Scoreboard {
        self.scoreboard
    }

    #[must_use]
    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    /// True once [`Session::conclude`] has tallied the current game.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.concluded
    }

    /// True when the game is open and the AI is to move.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        !self.state.is_finished() && self.mode.ai_side() == Some(self.state.current_player())
    }

    /// Place a stone for the human whose turn it is.
    pub fn play(&mut self, row: usize, col: usize) -> Result<(), SessionError> {
        if self.is_ai_turn() {
            return Err(SessionError::NotYourTurn);
        }
        self.state.place(row, col)?;
        Ok(())
    }

    /// Let the AI move if it is its turn.
    ///
    /// Returns what it played, or `None` when it is not the AI's turn. A
    /// placement the rules reject is reported as an error.
    pub fn ai_turn(&mut self) -> Result<Option<Decision>, SessionError> {
        if !self.is_ai_turn() {
            return Ok(None);
        }
        let Some(engine) = self.ai.as_ref() else {
            return Ok(None);
        };
        let Some(decision) = engine.choose(&self.state, &mut self.rng) else {
            return Ok(None);
        };
        self.state.place(decision.pos.row, decision.pos.col)?;
        Ok(Some(decision))
    }

    /// One logical undo request.
    ///
    /// Against the AI this takes back the AI's reply as well, so the human is
    /// to move again. Counts as a single undo in `undo_count`.
    pub fn undo(&mut self) -> bool {
        if self.concluded {
            return false;
        }
        if !self.state.undo() {
            return false;
        }
        if self.is_ai_turn() {
            self.state.undo();
        }
        let count = self.state.undo_count() + 1;
        self.state.set_undo_count(count);
        debug!(undo_count = count, moves = self.state.move_count(), "undo requested");
        true
    }

    /// Tally a finished game and hand back its record.
    ///
    /// Returns `None` while the game is open or if it was already concluded.
    pub fn conclude(&mut self) -> Option<GameRecord> {
        if self.concluded {
            return None;
        }
        let result = self.state.result()?;
        self.scoreboard.record(self.mode, result);
        self.concluded = true;

        let score = self.scoreboard.score(self.mode);
        info!(
            mode = %self.mode,
            result = ?result,
            moves = self.state.move_count(),
            black = score[Side::Black],
            white = score[Side::White],
            "game concluded"
        );
        Some(GameRecord::from_state(&self.state))
    }

    /// Start a fresh game under the same rules; scores carry over.
    pub fn new_game(&mut self) {
        self.state = GameState::new(*self.state.config());
        self.concluded = false;
        debug!(mode = %self.mode, "new game");
    }

    /// Capture the open game for later [`Session::resume`].
    #[must_use]
    pub fn snapshot(&self, elapsed_secs: u64) -> ResumeSnapshot {
        ResumeSnapshot::capture(&self.state, self.mode.code(), elapsed_secs)
    }
}
