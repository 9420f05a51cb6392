//! Move selection policies, one per difficulty tier.
//!
//! Policies are trait-based so tiers compose: the tactical cascade falls back
//! to the heuristic policy when no tactical rule fires. All policies scan
//! empty cells in row-major order and never mutate the board they are given.

use crate::core::{Board, Cell, GameConfig, GameRng, Pos, Side};
use crate::rules::win;

use super::config::{HEURISTIC_JITTER, TACTICAL_JITTER};
use super::eval::{score_cell, threat_length};

/// Why a policy picked its cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecisionReason {
    /// Uniform random choice.
    Random,
    /// Highest heuristic score.
    Heuristic,
    /// The move completes a winning run.
    Win,
    /// The opponent would win here next move.
    Block,
    /// The opponent's longest potential run passes through here.
    Threat,
}

impl std::fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DecisionReason::Random => "random",
            DecisionReason::Heuristic => "heuristic",
            DecisionReason::Win => "win",
            DecisionReason::Block => "block",
            DecisionReason::Threat => "threat",
        };
        f.write_str(name)
    }
}

/// A chosen cell together with the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decision {
    pub pos: Pos,
    pub reason: DecisionReason,
}

impl Decision {
    #[must_use]
    pub const fn new(pos: Pos, reason: DecisionReason) -> Self {
        Self { pos, reason }
    }
}

/// Strategy for choosing a cell for `side`.
///
/// Returns `None` only when the board has no empty cell.
pub trait MovePolicy {
    fn select(
        &self,
        board: &Board,
        side: Side,
        config: &GameConfig,
        rng: &mut GameRng,
    ) -> Option<Decision>;
}

/// Tier 1: any empty cell, uniformly.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn select(
        &self,
        board: &Board,
        _side: Side,
        _config: &GameConfig,
        rng: &mut GameRng,
    ) -> Option<Decision> {
        let empty: Vec<Pos> = board.empty_cells().collect();
        rng.choose(&empty)
            .map(|&pos| Decision::new(pos, DecisionReason::Random))
    }
}

/// Tier 2: maximise the run-length score plus a small random jitter.
///
/// Ties (after jitter) go to the first cell in row-major order.
#[derive(Clone, Debug)]
pub struct HeuristicPolicy {
    /// Jitter is drawn from `0..jitter`; 0 disables it.
    pub jitter: u32,
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self {
            jitter: HEURISTIC_JITTER,
        }
    }
}

impl HeuristicPolicy {
    #[must_use]
    pub fn with_jitter(jitter: u32) -> Self {
        Self { jitter }
    }
}

impl MovePolicy for HeuristicPolicy {
    fn select(
        &self,
        board: &Board,
        side: Side,
        config: &GameConfig,
        rng: &mut GameRng,
    ) -> Option<Decision> {
        let mut best: Option<(Pos, u32)> = None;

        for pos in board.empty_cells() {
            let mut score = score_cell(board, pos, side, config.win_length);
            if self.jitter > 0 {
                score += rng.gen_range(0..self.jitter);
            }
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
        }

        best.map(|(pos, _)| Decision::new(pos, DecisionReason::Heuristic))
    }
}

/// Tier 3: the tactical cascade.
///
/// In priority order:
/// 1. the first cell that wins outright
/// 2. the **last** cell (row-major) where the opponent would win
/// 3. the first cell carrying the opponent's longest potential run, if that
///    run reaches [`GameConfig::threat_threshold`]
/// 4. the heuristic policy with a narrower jitter
#[derive(Clone, Debug)]
pub struct TacticalPolicy {
    fallback: HeuristicPolicy,
}

impl Default for TacticalPolicy {
    fn default() -> Self {
        Self {
            fallback: HeuristicPolicy::with_jitter(TACTICAL_JITTER),
        }
    }
}

impl TacticalPolicy {
    /// First empty cell where a `side` stone wins.
    fn find_win(scratch: &mut Board, side: Side, win_length: usize) -> Option<Pos> {
        let empty: Vec<Pos> = scratch.empty_cells().collect();
        empty
            .into_iter()
            .find(|&pos| wins_at(scratch, pos, side, win_length))
    }

    /// Last empty cell where an `opponent` stone wins.
    fn find_block(scratch: &mut Board, opponent: Side, win_length: usize) -> Option<Pos> {
        let empty: Vec<Pos> = scratch.empty_cells().collect();
        let mut block = None;
        for pos in empty {
            if wins_at(scratch, pos, opponent, win_length) {
                block = Some(pos);
            }
        }
        block
    }

    /// First empty cell with the opponent's longest potential run.
    fn find_threat(board: &Board, opponent: Side) -> Option<(Pos, usize)> {
        let mut best: Option<(Pos, usize)> = None;
        for pos in board.empty_cells() {
            let len = threat_length(board, pos, opponent);
            if best.map_or(true, |(_, l)| len > l) {
                best = Some((pos, len));
            }
        }
        best
    }
}

/// Simulate `side` playing `pos` on the scratch board and undo it again.
fn wins_at(scratch: &mut Board, pos: Pos, side: Side, win_length: usize) -> bool {
    scratch.set(pos, Cell::from(side));
    let won = win::check(scratch, pos, win_length) == Some(side);
    scratch.set(pos, Cell::Empty);
    won
}

impl MovePolicy for TacticalPolicy {
    fn select(
        &self,
        board: &Board,
        side: Side,
        config: &GameConfig,
        rng: &mut GameRng,
    ) -> Option<Decision> {
        let opponent = side.opponent();
        let mut scratch = board.clone();

        if let Some(pos) = Self::find_win(&mut scratch, side, config.win_length) {
            return Some(Decision::new(pos, DecisionReason::Win));
        }
        if let Some(pos) = Self::find_block(&mut scratch, opponent, config.win_length) {
            return Some(Decision::new(pos, DecisionReason::Block));
        }
        if let Some((pos, len)) = Self::find_threat(board, opponent) {
            if len >= config.threat_threshold() {
                return Some(Decision::new(pos, DecisionReason::Threat));
            }
        }
        self.fallback.select(board, side, config, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, stones: &[(usize, usize, Side)]) -> Board {
        let mut board = Board::new(size);
        for &(r, c, side) in stones {
            board.set(Pos::new(r, c), Cell::from(side));
        }
        board
    }

    #[test]
    fn test_random_policy_picks_empty_cell() {
        let board = board_with(3, &[(0, 0, Side::Black), (1, 1, Side::White)]);
        let mut rng = GameRng::new(1);

        for _ in 0..20 {
            let d = RandomPolicy
                .select(&board, Side::Black, &GameConfig::default(), &mut rng)
                .unwrap();
            assert!(board.get(d.pos).is_empty());
            assert_eq!(d.reason, DecisionReason::Random);
        }
    }

    #[test]
    fn test_policies_on_full_board() {
        let config = GameConfig::default().with_board_size(1);
        let board = board_with(1, &[(0, 0, Side::Black)]);
        let mut rng = GameRng::new(1);

        assert!(RandomPolicy.select(&board, Side::White, &config, &mut rng).is_none());
        assert!(HeuristicPolicy::default().select(&board, Side::White, &config, &mut rng).is_none());
        assert!(TacticalPolicy::default().select(&board, Side::White, &config, &mut rng).is_none());
    }

    #[test]
    fn test_heuristic_without_jitter_prefers_first_max() {
        let board = Board::new(19);
        let mut rng = GameRng::new(3);
        let d = HeuristicPolicy::with_jitter(0)
            .select(&board, Side::Black, &GameConfig::default(), &mut rng)
            .unwrap();
        // Every cell scores 76 on an empty board.
        assert_eq!(d.pos, Pos::new(0, 0));
    }

    #[test]
    fn test_heuristic_extends_own_run() {
        let board = board_with(19, &[(9, 9, Side::Black), (9, 10, Side::Black), (9, 11, Side::Black)]);
        let mut rng = GameRng::new(3);
        let d = HeuristicPolicy::with_jitter(0)
            .select(&board, Side::Black, &GameConfig::default(), &mut rng)
            .unwrap();
        assert_eq!(d.pos, Pos::new(9, 8));
    }

    #[test]
    fn test_find_block_takes_last_candidate() {
        let stones: Vec<_> = (5..10).map(|c| (4, c, Side::Black)).collect();
        let mut board = board_with(19, &stones);
        assert_eq!(
            TacticalPolicy::find_block(&mut board, Side::Black, 6),
            Some(Pos::new(4, 10))
        );
        // The scratch board is restored after simulation.
        assert_eq!(board.stone_count(), 5);
    }

    #[test]
    fn test_find_win_takes_first_candidate() {
        let stones: Vec<_> = (5..10).map(|c| (4, c, Side::White)).collect();
        let mut board = board_with(19, &stones);
        assert_eq!(
            TacticalPolicy::find_win(&mut board, Side::White, 6),
            Some(Pos::new(4, 4))
        );
    }

    #[test]
    fn test_threat_below_threshold_falls_back() {
        let board = board_with(19, &[(9, 9, Side::Black), (9, 10, Side::Black)]);
        let mut rng = GameRng::new(5);
        let d = TacticalPolicy::default()
            .select(&board, Side::White, &GameConfig::default(), &mut rng)
            .unwrap();
        assert_eq!(d.reason, DecisionReason::Heuristic);
    }

    #[test]
    fn test_threat_at_threshold() {
        let board = board_with(
            19,
            &[(9, 9, Side::Black), (9, 10, Side::Black), (9, 11, Side::Black)],
        );
        let mut rng = GameRng::new(5);
        let d = TacticalPolicy::default()
            .select(&board, Side::White, &GameConfig::default(), &mut rng)
            .unwrap();
        assert_eq!(d, Decision::new(Pos::new(9, 8), DecisionReason::Threat));
    }
}
