//! Run-length scoring of candidate cells.
//!
//! A cell is worth more the longer the runs through it: the AI's own run if
//! it played there (attack) and the opponent's run through the same cell
//! (defence). Completing a run outright dominates everything else.

use crate::core::{Board, Cell, Pos, Side};
use crate::rules::win::{longest_run, run_length};
use crate::rules::Axis;

/// Bonus for an axis where the AI's stone would complete a winning run.
pub const WIN_SCORE: u32 = 100_000;

/// Bonus for an axis where the opponent would complete a winning run.
pub const BLOCK_SCORE: u32 = 90_000;

/// Multiplier for the squared own run on an axis.
pub const SELF_WEIGHT: u32 = 10;

/// Multiplier for the squared opponent run on an axis.
pub const OPP_WEIGHT: u32 = 9;

/// Heuristic value of `side` playing the empty cell `pos`, without jitter.
#[must_use]
pub fn score_cell(board: &Board, pos: Pos, side: Side, win_length: usize) -> u32 {
    let own = Cell::from(side);
    let opp = Cell::from(side.opponent());

    Axis::ALL
        .iter()
        .map(|&axis| {
            let self_run = run_length(board, pos, axis, own);
            let opp_run = run_length(board, pos, axis, opp);
            axis_term(self_run, win_length, WIN_SCORE, SELF_WEIGHT)
                + axis_term(opp_run, win_length, BLOCK_SCORE, OPP_WEIGHT)
        })
        .sum()
}

fn axis_term(run: usize, win_length: usize, complete: u32, weight: u32) -> u32 {
    if run >= win_length {
        complete
    } else {
        let run = run as u32;
        run * run * weight
    }
}

/// Longest run `side` would have through `pos` if it played there.
#[must_use]
pub fn threat_length(board: &Board, pos: Pos, side: Side) -> usize {
    longest_run(board, pos, Cell::from(side))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_score() {
        let board = Board::new(19);
        // Each axis: 1*1*10 + 1*1*9.
        assert_eq!(score_cell(&board, Pos::new(9, 9), Side::Black, 6), 76);
    }

    #[test]
    fn test_own_neighbour_raises_score() {
        let mut board = Board::new(19);
        board.set(Pos::new(9, 9), Cell::Black);

        // Horizontal own run 2 (40) + three axes of 10, opponent runs all 1.
        assert_eq!(score_cell(&board, Pos::new(9, 10), Side::Black, 6), 40 + 30 + 36);
        // Same cell from White's view: own runs 1, opponent horizontal run 2.
        assert_eq!(score_cell(&board, Pos::new(9, 10), Side::White, 6), 40 + 36 + 27);
    }

    #[test]
    fn test_winning_and_blocking_bonuses() {
        let mut board = Board::new(19);
        for c in 0..5 {
            board.set(Pos::new(0, c), Cell::White);
        }
        let target = Pos::new(0, 5);

        let as_white = score_cell(&board, target, Side::White, 6);
        let as_black = score_cell(&board, target, Side::Black, 6);
        assert!(as_white >= WIN_SCORE);
        assert!(as_black >= BLOCK_SCORE);
        assert!(as_white > as_black);
    }

    #[test]
    fn test_threat_length() {
        let mut board = Board::new(19);
        for r in 3..6 {
            board.set(Pos::new(r, 7), Cell::Black);
        }
        assert_eq!(threat_length(&board, Pos::new(6, 7), Side::Black), 4);
        assert_eq!(threat_length(&board, Pos::new(6, 7), Side::White), 1);
    }
}
