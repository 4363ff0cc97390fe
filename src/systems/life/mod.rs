//! Life Engine - one B3/S23 generation per call
//!
//! Reads the current grid only, writes a brand new one. Neighbour counts are
//! never affected by cells already transitioned in the same pass.

use crate::domain::Cell;
use crate::grid::Grid;

/// Result of one `advance`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub grid: Grid,
    /// Cells that were alive *before* the transition
    pub living: u32,
    /// Cells that were dead *before* the transition
    pub dead: u32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LifeEngine;

impl LifeEngine {
    pub fn new() -> Self {
        LifeEngine
    }

    /// Compute the next generation of `grid`.
    ///
    /// `living`/`dead` count the population the rule was applied to, so
    /// `living + dead == columns * rows` always holds.
    pub fn advance(&self, grid: &Grid) -> Generation {
        let mut next = grid.empty_like();
        let mut living = 0u32;
        let mut dead = 0u32;

        let columns = grid.columns();
        for y in 0..grid.rows() {
            let row_start = grid.index(0, y);
            for x in 0..columns {
                let idx = row_start + x as usize;
                let cell = grid.get_idx(idx);
                let neighbors = grid.live_neighbors(x, y);

                match cell {
                    Cell::Alive => living += 1,
                    Cell::Dead => dead += 1,
                }

                let next_cell = cell.next(neighbors);
                if next_cell.is_alive() {
                    next.set_idx(idx, next_cell);
                }
            }
        }

        Generation { grid: next, living, dead }
    }
}
