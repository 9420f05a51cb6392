//! The AI entry point: pick a cell for a side at a given difficulty.

use tracing::debug;

use crate::core::{Board, GameConfig, GameRng, GameState, Pos, Side};

use super::config::Difficulty;
use super::policy::{Decision, HeuristicPolicy, MovePolicy, RandomPolicy, TacticalPolicy};

/// Move selector for one difficulty tier.
///
/// Pure with respect to the board: the caller applies the returned cell with
/// [`GameState::place`], exactly like a human move.
///
/// ```
/// use connect_six::ai::{AiEngine, Difficulty};
/// use connect_six::core::{GameRng, GameState};
///
/// let mut state = GameState::default();
/// state.place(9, 9).unwrap();
///
/// let engine = AiEngine::new(Difficulty::Tactical);
/// let mut rng = GameRng::new(42);
/// let decision = engine.choose(&state, &mut rng).unwrap();
/// state.place(decision.pos.row, decision.pos.col).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct AiEngine {
    difficulty: Difficulty,
    config: GameConfig,
}

impl AiEngine {
    /// Create an engine for the default 19×19, six-to-win rules.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            config: GameConfig::default(),
        }
    }

    /// Use different rules (board size is taken from the board itself; the
    /// win length and threat threshold come from here).
    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Choose a cell for `side`. `None` when the board is full.
    pub fn select_move(&self, board: &Board, side: Side, rng: &mut GameRng) -> Option<Pos> {
        self.decide(board, side, rng).map(|d| d.pos)
    }

    /// Choose a cell for `side` and report which rule chose it.
    pub fn decide(&self, board: &Board, side: Side, rng: &mut GameRng) -> Option<Decision> {
        decide_with(self.difficulty, board, side, &self.config, rng)
    }

    /// Choose a move for the side to move in `state`, using the state's own
    /// rules. `None` once the game is finished or the board is full.
    pub fn choose(&self, state: &GameState, rng: &mut GameRng) -> Option<Decision> {
        if state.is_finished() {
            return None;
        }
        decide_with(
            self.difficulty,
            state.board(),
            state.current_player(),
            state.config(),
            rng,
        )
    }
}

fn decide_with(
    difficulty: Difficulty,
    board: &Board,
    side: Side,
    config: &GameConfig,
    rng: &mut GameRng,
) -> Option<Decision> {
    let decision = match difficulty {
        Difficulty::Random => RandomPolicy.select(board, side, config, rng),
        Difficulty::Heuristic => HeuristicPolicy::default().select(board, side, config, rng),
        Difficulty::Tactical => TacticalPolicy::default().select(board, side, config, rng),
    };

    match &decision {
        Some(d) => debug!(
            %difficulty,
            side = %side,
            row = d.pos.row,
            col = d.pos.col,
            reason = %d.reason,
            "AI selected move"
        ),
        None => debug!(%difficulty, side = %side, "AI found no empty cell"),
    }
    decision
}
