use log::debug;

use crate::core::LifeError;
use crate::domain::Cell;

use super::Board;

/// Overwrite one cell. Counters are left alone until the next advance.
pub(super) fn set_cell(board: &mut Board, x: i32, y: i32, cell: Cell) -> Result<(), LifeError> {
    board.grid.set(x, y, cell)
}

pub(super) fn toggle_cell(board: &mut Board, x: i32, y: i32) -> Result<Cell, LifeError> {
    let next = board.grid.get(x, y)?.toggled();
    board.grid.set(x, y, next)?;
    Ok(next)
}

pub(super) fn randomize_board(board: &mut Board) {
    board.grid.randomize(board.config.fill_probability, &mut board.rng);
}

pub(super) fn clear_board(board: &mut Board) {
    board.grid.clear();
}

/// Idempotent
pub(super) fn set_paused(board: &mut Board, paused: bool) {
    if board.paused != paused {
        debug!("session {}", if paused { "paused" } else { "resumed" });
    }
    board.paused = paused;
}

/// Floor division by the cell size; may land outside the grid.
pub(super) fn cell_at_pixel(board: &Board, px: f64, py: f64) -> (i32, i32) {
    let size = board.geometry.cell_size as f64;
    (pixel_to_cell(px, size), pixel_to_cell(py, size))
}

/// NaN/infinite input maps to -1 so it is reported as out of bounds
/// instead of saturating onto a real cell.
fn pixel_to_cell(pixel: f64, cell_size: f64) -> i32 {
    if !pixel.is_finite() {
        return -1;
    }
    (pixel / cell_size).floor() as i32
}

pub(super) fn hover(board: &mut Board, px: f64, py: f64) -> Option<(i32, i32)> {
    let (x, y) = cell_at_pixel(board, px, py);
    board.hover = board.grid.in_bounds(x, y).then_some((x, y));
    board.hover
}
