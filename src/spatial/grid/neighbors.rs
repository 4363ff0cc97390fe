use super::*;

/// Moore neighbourhood: W, E, N, S and the four diagonals
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

impl Grid {
    /// Live neighbours of `(x, y)`, in `[0, 8]`.
    ///
    /// Positions past an edge count as dead, so corners see at most 3
    /// candidates and edges at most 5.
    pub fn count_live_neighbors(&self, x: i32, y: i32) -> Result<u8, LifeError> {
        self.checked_index(x, y)?;
        Ok(self.live_neighbors(x as u32, y as u32))
    }

    /// Hot path for the engine pass. Caller guarantees `(x, y)` is in range.
    #[inline]
    pub fn live_neighbors(&self, x: u32, y: u32) -> u8 {
        debug_assert!(
            x < self.columns && y < self.rows,
            "live_neighbors: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.columns,
            self.rows
        );
        let mut count = 0u8;
        for &(dx, dy) in NEIGHBOR_OFFSETS.iter() {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if !self.in_bounds(nx, ny) {
                continue;
            }
            let idx = self.index(nx as u32, ny as u32);
            if fast!(self.cells, [idx]).is_alive() {
                count += 1;
            }
        }
        count
    }
}
