//! Win detection anchored to the last-placed stone.
//!
//! A move can only complete a run through its own cell, so the detector walks
//! the four axes out from that cell and never rescans the board.

use crate::core::{Board, Cell, Pos, Side};

/// One of the four undirected lines through a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right ("\").
    Diagonal,
    /// Bottom-left to top-right ("/").
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Unit step (row, col) in the axis' positive direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (-1, 1),
        }
    }
}

/// Length of the run of `cell` through `pos` along `axis`.
///
/// The anchor always counts as 1 whatever it holds, so the same walk measures
/// a stone that was just placed and a stone that is only being considered.
#[must_use]
pub fn run_length(board: &Board, pos: Pos, axis: Axis, cell: Cell) -> usize {
    let (dr, dc) = axis.delta();
    1 + walk(board, pos, dr, dc, cell) + walk(board, pos, -dr, -dc, cell)
}

fn walk(board: &Board, pos: Pos, dr: isize, dc: isize, cell: Cell) -> usize {
    let mut count = 0;
    let mut r = pos.row as isize + dr;
    let mut c = pos.col as isize + dc;
    while board.in_bounds(r, c) && board.get(Pos::new(r as usize, c as usize)) == cell {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Longest run through `pos` over all four axes.
#[must_use]
pub fn longest_run(board: &Board, pos: Pos, cell: Cell) -> usize {
    Axis::ALL
        .iter()
        .map(|&axis| run_length(board, pos, axis, cell))
        .max()
        .unwrap_or(1)
}

/// Report the winner if the stone at `pos` completes a run of `win_length`.
///
/// Only meaningful right after a stone was placed at `pos`; an empty anchor
/// reports no winner.
#[must_use]
pub fn check(board: &Board, pos: Pos, win_length: usize) -> Option<Side> {
    let cell = board.get(pos);
    let side = cell.side()?;

    Axis::ALL
        .iter()
        .any(|&axis| run_length(board, pos, axis, cell) >= win_length)
        .then_some(side)
}
