//! The N×N grid of cells.
//!
//! Cells are stored row-major in a flat `Vec`. The board does no rule
//! checking of its own; `GameState` is the only owner allowed to mutate it
//! during play, and the AI mutates private copies for simulation.

use serde::{Deserialize, Serialize};

use super::moves::Pos;
use super::player::Cell;

/// Square grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Board dimension N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check a possibly negative coordinate against the board edges.
    #[must_use]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        let n = self.size as isize;
        row >= 0 && row < n && col >= 0 && col < n
    }

    /// Check a coordinate against the board edges.
    #[must_use]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get the cell at `pos`.
    ///
    /// Panics if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Set the cell at `pos`.
    ///
    /// Panics if `pos` is off the board.
    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Iterate over empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(i, _)| Pos::new(i / size, i % size))
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(self.contains(pos), "position {pos} is off a {0}x{0} board", self.size);
        pos.row * self.size + pos.col
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.size == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.size) {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
