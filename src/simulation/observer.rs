use crate::grid::Grid;

use super::FrameSnapshot;

/// Hooks for the external collaborators (renderer, statistics chart).
///
/// All methods default to no-ops so an observer only implements what it
/// cares about.
pub trait SessionObserver {
    /// Every delivered frame, paused or not. The renderer redraws here.
    fn on_frame(&mut self, _snapshot: &FrameSnapshot, _grid: &Grid) {}

    /// Once per generation actually advanced; never while paused.
    fn on_generation(&mut self, _generation: u64, _living: u32, _dead: u32) {}

    /// The session was rebuilt with new dimensions.
    fn on_reset(&mut self, _columns: u32, _rows: u32) {}
}
