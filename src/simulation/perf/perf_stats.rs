use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Timing of the last delivered frame. All zeros while perf is disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfStats {
    pub(super) advance_ms: f64,
    pub(super) tick_ms: f64,
    pub(super) cells_processed: u32,
    pub(super) frames_delivered: u32,
    pub(super) callbacks_skipped: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    /// Life engine pass only
    #[wasm_bindgen(getter)]
    pub fn advance_ms(&self) -> f64 { self.advance_ms }
    /// Whole frame: tick plus observer notifications
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 { self.cells_processed }
    #[wasm_bindgen(getter)]
    pub fn frames_delivered(&self) -> u32 { self.frames_delivered }
    #[wasm_bindgen(getter)]
    pub fn callbacks_skipped(&self) -> u32 { self.callbacks_skipped }
}
