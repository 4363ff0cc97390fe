use super::super::*;

impl Grid {
    // === Raw pointer for JS interop ===
    // `Cell` is repr(u8), so JS can view this as a Uint8Array of 0/1.
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.as_ptr() as *const u8
    }

    /// Cell states as bytes (0 = dead, 1 = alive), row-major, no copy
    pub fn cell_bytes(&self) -> &[u8] {
        // SAFETY: `Cell` is repr(u8) and every variant is a valid u8
        unsafe { std::slice::from_raw_parts(self.cells.as_ptr() as *const u8, self.cells.len()) }
    }
}
