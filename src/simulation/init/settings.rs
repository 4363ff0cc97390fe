use serde::{Deserialize, Serialize};

use crate::core::LifeError;
use crate::grid::{DEFAULT_FILL_PROBABILITY, MAX_CELLS};

/// What the host passes in at initialization/reset.
///
/// Sizes are signed so that bad UI input (e.g. a negative number typed into a
/// field) is reported as a configuration error instead of wrapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Board width in pixels
    pub width: i32,
    /// Board height in pixels
    pub height: i32,
    /// Edge length of one cell in pixels
    pub cell_size: i32,
    /// Target frames (and generations) per second
    pub fps: i32,
    /// Alive probability for `randomize_board`
    #[serde(default = "default_fill_probability")]
    pub fill_probability: f64,
    /// Fixed RNG seed; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_fill_probability() -> f64 {
    DEFAULT_FILL_PROBABILITY
}

/// Validated, unsigned view of a `SessionConfig`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    pub columns: u32,
    pub rows: u32,
    pub cell_size: u32,
    pub fps: u32,
}

impl SessionConfig {
    pub fn new(width: i32, height: i32, cell_size: i32, fps: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
            fps,
            fill_probability: DEFAULT_FILL_PROBABILITY,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fill_probability(mut self, probability: f64) -> Self {
        self.fill_probability = probability;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, LifeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// `columns = width / cell_size`, `rows = height / cell_size`, truncated.
    pub fn geometry(&self) -> Result<BoardGeometry, LifeError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(LifeError::invalid(format!(
                "board size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.cell_size <= 0 {
            return Err(LifeError::invalid(format!(
                "cell size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.fps <= 0 {
            return Err(LifeError::invalid(format!("fps must be at least 1, got {}", self.fps)));
        }
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(LifeError::invalid(format!(
                "fill probability must be within [0, 1], got {}",
                self.fill_probability
            )));
        }

        let columns = (self.width / self.cell_size) as u32;
        let rows = (self.height / self.cell_size) as u32;
        if columns == 0 || rows == 0 {
            return Err(LifeError::invalid(format!(
                "a {}x{} board holds no {}px cells",
                self.width, self.height, self.cell_size
            )));
        }
        let cells = columns as u64 * rows as u64;
        if cells > MAX_CELLS {
            return Err(LifeError::invalid(format!(
                "{}x{} cells exceeds the {} cell limit",
                columns, rows, MAX_CELLS
            )));
        }

        Ok(BoardGeometry {
            columns,
            rows,
            cell_size: self.cell_size as u32,
            fps: self.fps as u32,
        })
    }
}
