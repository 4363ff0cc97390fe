use super::super::*;

impl Grid {
    // === Checked access ===
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, LifeError> {
        let idx = self.checked_index(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), LifeError> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Out-of-range reads as dead (clipped edge)
    #[inline]
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.cells[self.index(x as u32, y as u32)].is_alive()
    }

    // === Index access for the engine pass ===
    #[inline]
    pub fn get_idx(&self, idx: usize) -> Cell {
        *fast!(self.cells, [idx])
    }

    #[inline]
    pub fn set_idx(&mut self, idx: usize, cell: Cell) {
        fast!(self.cells, [idx] = cell);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row `y` as a slice, `None` past the last row
    pub fn row(&self, y: u32) -> Option<&[Cell]> {
        if y >= self.rows {
            return None;
        }
        let start = self.index(0, y);
        Some(&self.cells[start..start + self.columns as usize])
    }
}
