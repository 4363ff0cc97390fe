use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn columns(&self) -> u32 { self.columns }

    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.columns as usize) + (x as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.columns as usize) as u32;
        let y = (idx / self.columns as usize) as u32;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as i64) < self.columns as i64 && y >= 0 && (y as i64) < self.rows as i64
    }

    /// Index of `(x, y)` or `OutOfBounds`
    #[inline]
    pub fn checked_index(&self, x: i32, y: i32) -> Result<usize, LifeError> {
        if self.in_bounds(x, y) {
            Ok(self.index(x as u32, y as u32))
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                columns: self.columns,
                rows: self.rows,
            })
        }
    }
}
