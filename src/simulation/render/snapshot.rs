use serde::Serialize;
use wasm_bindgen::prelude::*;

/// What the renderer pulls once per delivered frame.
///
/// Cell states are not copied here; read them through the grid (or the
/// zero-copy `cells_ptr` buffer on the JS side).
#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    pub(super) generation: u64,
    pub(super) living: u32,
    pub(super) dead: u32,
    pub(super) columns: u32,
    pub(super) rows: u32,
    pub(super) cell_size: u32,
    pub(super) elapsed_ms: f64,
    pub(super) measured_fps: f64,
    pub(super) frame_count: u32,
    pub(super) paused: bool,
    pub(super) hover: Option<(i32, i32)>,
}

impl FrameSnapshot {
    pub fn hover(&self) -> Option<(i32, i32)> {
        self.hover
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[wasm_bindgen]
impl FrameSnapshot {
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
    #[wasm_bindgen(getter)]
    pub fn living(&self) -> u32 { self.living }
    #[wasm_bindgen(getter)]
    pub fn dead(&self) -> u32 { self.dead }
    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> u32 { self.columns }
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.rows }
    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> u32 { self.cell_size }
    #[wasm_bindgen(getter)]
    pub fn elapsed_ms(&self) -> f64 { self.elapsed_ms }
    #[wasm_bindgen(getter)]
    pub fn measured_fps(&self) -> f64 { self.measured_fps }
    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> u32 { self.frame_count }
    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.paused }
    #[wasm_bindgen(getter)]
    pub fn hover_x(&self) -> Option<i32> { self.hover.map(|(x, _)| x) }
    #[wasm_bindgen(getter)]
    pub fn hover_y(&self) -> Option<i32> { self.hover.map(|(_, y)| y) }
}
