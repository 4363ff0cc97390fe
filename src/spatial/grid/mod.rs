//! Grid - dense row-major board of cells
//!
//! One flat `Vec<Cell>` sized once at construction:
//! idx = y * columns + x
//!
//! Positions outside `[0, columns) x [0, rows)` are never stored; neighbour
//! counting clips them instead of wrapping around.

use crate::core::LifeError;
use crate::domain::Cell;

mod indexing;
mod accessors;
mod neighbors;
mod random;

pub use neighbors::NEIGHBOR_OFFSETS;

pub const DEFAULT_FILL_PROBABILITY: f64 = 0.5;

/// Largest board accepted: 2^24 cells (16 MiB per generation buffer).
/// Keeps `columns * rows` inside a wasm32 `usize` and the `u32` counters.
pub const MAX_CELLS: u64 = 1 << 24;

/// Board of `columns x rows` cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: u32,
    rows: u32,
    size: usize,

    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid. `columns * rows` must not exceed `MAX_CELLS`; session
    /// configs are validated against it before a grid is built.
    pub fn new(columns: u32, rows: u32) -> Self {
        assert!(
            (columns as u64) * (rows as u64) <= MAX_CELLS,
            "{}x{} grid exceeds {} cells",
            columns,
            rows,
            MAX_CELLS
        );
        let size = (columns as usize) * (rows as usize);
        Self {
            columns,
            rows,
            size,
            cells: vec![Cell::Dead; size],
        }
    }

    /// Build a grid from `(x, y)` coordinates of live cells.
    pub fn with_alive(columns: u32, rows: u32, alive: &[(i32, i32)]) -> Result<Self, LifeError> {
        let mut grid = Self::new(columns, rows);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive)?;
        }
        Ok(grid)
    }

    /// Same dimensions, all dead. Used by the engine for the next generation.
    pub fn empty_like(&self) -> Self {
        Self::new(self.columns, self.rows)
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Number of live cells (full scan)
    pub fn living_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_alive()).count() as u32
    }
}

#[cfg(test)]
mod tests;
