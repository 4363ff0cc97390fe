use serde::{Deserialize, Serialize};

/// State of a single board position.
///
/// `repr(u8)` so the grid's backing buffer can be handed to JS as a
/// `Uint8Array` (0 = dead, 1 = alive).
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Standard B3/S23 transition given the live neighbour count.
    #[inline]
    pub fn next(self, live_neighbors: u8) -> Cell {
        match (self, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
            (Cell::Dead, 3) => Cell::Alive,                     // Birth
            _ => Cell::Dead,
        }
    }

    #[inline]
    pub fn toggled(self) -> Cell {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
