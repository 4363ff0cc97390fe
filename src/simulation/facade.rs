use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use js_sys::{Function, Uint8Array};
use log::{info, warn};
use wasm_bindgen::prelude::*;

use crate::domain::Cell;
use crate::grid::Grid;
use crate::timing::{AnimationFrameClock, FrameCallback};

use super::perf_stats::PerfStats;
use super::{FrameSnapshot, SessionConfig, SessionCore, SessionObserver};

type SharedCore = Rc<RefCell<Option<SessionCore<AnimationFrameClock>>>>;

/// JS functions registered through `set_on_*`
#[derive(Default)]
struct JsCallbacks {
    frame: Option<Function>,
    generation: Option<Function>,
    reset: Option<Function>,
}

/// Forwards session events to the JS callbacks. Functions are cloned out
/// before the call so JS may re-register from inside a callback.
struct JsObserver {
    callbacks: Rc<RefCell<JsCallbacks>>,
}

impl SessionObserver for JsObserver {
    fn on_frame(&mut self, snapshot: &FrameSnapshot, grid: &Grid) {
        let Some(f) = self.callbacks.borrow().frame.clone() else { return };
        // Copied: the session is borrowed for the whole frame and the next
        // advance replaces the buffer behind `cells_ptr`
        let cells = Uint8Array::from(grid.cell_bytes());
        if let Err(e) = f.call2(&JsValue::NULL, &JsValue::from(snapshot.clone()), &cells) {
            warn!("on_frame callback threw: {:?}", e);
        }
    }

    fn on_generation(&mut self, generation: u64, living: u32, dead: u32) {
        let Some(f) = self.callbacks.borrow().generation.clone() else { return };
        if let Err(e) = f.call3(
            &JsValue::NULL,
            &JsValue::from_f64(generation as f64),
            &JsValue::from_f64(living as f64),
            &JsValue::from_f64(dead as f64),
        ) {
            warn!("on_generation callback threw: {:?}", e);
        }
    }

    fn on_reset(&mut self, columns: u32, rows: u32) {
        let Some(f) = self.callbacks.borrow().reset.clone() else { return };
        if let Err(e) = f.call2(
            &JsValue::NULL,
            &JsValue::from_f64(columns as f64),
            &JsValue::from_f64(rows as f64),
        ) {
            warn!("on_reset callback threw: {:?}", e);
        }
    }
}

/// Browser-facing session driven by `requestAnimationFrame`.
///
/// The JS callbacks run while the session is mid-frame; they should use the
/// values they are handed instead of calling back into this object.
#[wasm_bindgen]
pub struct Session {
    core: SharedCore,
    clock: AnimationFrameClock,
    callbacks: Rc<RefCell<JsCallbacks>>,
}

impl Session {
    fn with_config(config: SessionConfig) -> Result<Session, JsValue> {
        let clock = AnimationFrameClock::new()?;
        let callbacks = Rc::new(RefCell::new(JsCallbacks::default()));

        let mut core = SessionCore::new(config, clock.clone())?;
        core.add_observer(Box::new(JsObserver { callbacks: callbacks.clone() }));

        let shared: SharedCore = Rc::new(RefCell::new(Some(core)));
        clock.set_callback(frame_callback(Rc::downgrade(&shared)));

        if let Some(core) = shared.borrow_mut().as_mut() {
            core.start()?;
        }
        info!("session started");

        Ok(Session { core: shared, clock, callbacks })
    }

    fn core(&self) -> Result<Ref<'_, SessionCore<AnimationFrameClock>>, JsValue> {
        let slot = self
            .core
            .try_borrow()
            .map_err(|_| JsValue::from_str("session is busy delivering a frame"))?;
        Ref::filter_map(slot, Option::as_ref).map_err(|_| JsValue::from_str("session destroyed"))
    }

    fn core_mut(&self) -> Result<RefMut<'_, SessionCore<AnimationFrameClock>>, JsValue> {
        let slot = self
            .core
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("session is busy delivering a frame"))?;
        RefMut::filter_map(slot, Option::as_mut).map_err(|_| JsValue::from_str("session destroyed"))
    }
}

#[wasm_bindgen]
impl Session {
    /// Create and start a paused session on a `width x height` pixel board
    #[wasm_bindgen(constructor)]
    pub fn new(width: i32, height: i32, cell_size: i32, fps: i32) -> Result<Session, JsValue> {
        Self::with_config(SessionConfig::new(width, height, cell_size, fps))
    }

    /// Same as the constructor, from a `SessionConfig` JSON document
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Session, JsValue> {
        let config = SessionConfig::from_json(&json)?;
        Self::with_config(config)
    }

    // === Callbacks ===

    /// `fn(snapshot: FrameSnapshot, cells: Uint8Array)`, every delivered frame.
    /// `cells` is a row-major copy of the board (0 = dead, 1 = alive).
    pub fn set_on_frame(&self, callback: Option<Function>) {
        self.callbacks.borrow_mut().frame = callback;
    }

    /// `fn(generation, living, dead)`, every advanced generation
    pub fn set_on_generation(&self, callback: Option<Function>) {
        self.callbacks.borrow_mut().generation = callback;
    }

    /// `fn(columns, rows)`, after a successful reset
    pub fn set_on_reset(&self, callback: Option<Function>) {
        self.callbacks.borrow_mut().reset = callback;
    }

    // === Getters ===
    #[wasm_bindgen(getter)]
    pub fn columns(&self) -> Result<u32, JsValue> { Ok(self.core()?.columns()) }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> Result<u32, JsValue> { Ok(self.core()?.rows()) }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> Result<u32, JsValue> { Ok(self.core()?.geometry().cell_size) }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> Result<u64, JsValue> { Ok(self.core()?.generation()) }

    #[wasm_bindgen(getter)]
    pub fn living(&self) -> Result<u32, JsValue> { Ok(self.core()?.living()) }

    #[wasm_bindgen(getter)]
    pub fn dead(&self) -> Result<u32, JsValue> { Ok(self.core()?.dead()) }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> Result<bool, JsValue> { Ok(self.core()?.is_paused()) }

    #[wasm_bindgen(getter)]
    pub fn measured_fps(&self) -> Result<f64, JsValue> { Ok(self.core()?.scheduler().measured_fps()) }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> Result<u32, JsValue> { Ok(self.core()?.scheduler().frame_count()) }

    /// Whether `(x, y)` is alive
    pub fn cell(&self, x: i32, y: i32) -> Result<bool, JsValue> {
        Ok(self.core()?.cell(x, y)?.is_alive())
    }

    /// Pointer to the cell buffer, one byte per cell, row-major (for JS rendering).
    /// Invalidated by every advance and by reset.
    pub fn cells_ptr(&self) -> Result<*const u8, JsValue> {
        Ok(self.core()?.grid().cells_ptr())
    }

    pub fn cells_len(&self) -> Result<usize, JsValue> {
        Ok(self.core()?.grid().size())
    }

    pub fn snapshot(&self) -> Result<FrameSnapshot, JsValue> {
        Ok(self.core()?.snapshot())
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        Ok(self.core()?.snapshot().to_json())
    }

    /// `Elapsed time= ... secs @ ... fps.`
    pub fn status_text(&self) -> Result<String, JsValue> {
        Ok(self.core()?.status_line())
    }

    /// `Generation: ... Cells: ... Current living cells: ... Current dead cells: ...`
    pub fn game_status_text(&self) -> Result<String, JsValue> {
        Ok(self.core()?.game_status_line())
    }

    // === UI operations ===
    pub fn set_cell(&self, x: i32, y: i32, alive: bool) -> Result<(), JsValue> {
        self.core_mut()?.set_cell(x, y, Cell::from(alive))?;
        Ok(())
    }

    /// Flip `(x, y)`; returns the new state
    pub fn toggle_cell(&self, x: i32, y: i32) -> Result<bool, JsValue> {
        Ok(self.core_mut()?.toggle_cell(x, y)?.is_alive())
    }

    pub fn randomize_board(&self) -> Result<(), JsValue> {
        self.core_mut()?.randomize_board();
        Ok(())
    }

    pub fn clear_board(&self) -> Result<(), JsValue> {
        self.core_mut()?.clear_board();
        Ok(())
    }

    pub fn pause(&self) -> Result<(), JsValue> {
        self.core_mut()?.pause();
        Ok(())
    }

    pub fn resume(&self) -> Result<(), JsValue> {
        self.core_mut()?.resume();
        Ok(())
    }

    /// Returns the new pause state
    pub fn toggle_pause(&self) -> Result<bool, JsValue> {
        Ok(self.core_mut()?.toggle_pause())
    }

    /// Pointer moved to a board-relative pixel. Returns whether it is over a cell.
    pub fn hover(&self, px: f64, py: f64) -> Result<bool, JsValue> {
        Ok(self.core_mut()?.hover(px, py).is_some())
    }

    pub fn clear_hover(&self) -> Result<(), JsValue> {
        self.core_mut()?.clear_hover();
        Ok(())
    }

    /// Pointer pressed at a board-relative pixel: bring that cell to life
    pub fn set_cell_at_pixel(&self, px: f64, py: f64) -> Result<(), JsValue> {
        self.core_mut()?.set_cell_at_pixel(px, py)?;
        Ok(())
    }

    /// Rebuild with new dimensions. On error the current session keeps running.
    pub fn reset(&self, width: i32, height: i32, cell_size: i32, fps: i32) -> Result<(), JsValue> {
        let mut core = self.core_mut()?;
        let config = SessionConfig {
            width,
            height,
            cell_size,
            fps,
            ..core.config().clone()
        };
        core.reset(config)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = resetFromConfigJson)]
    pub fn reset_from_config_json(&self, json: String) -> Result<(), JsValue> {
        let config = SessionConfig::from_json(&json)?;
        self.core_mut()?.reset(config)?;
        Ok(())
    }

    // === Perf ===

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&self, enabled: bool) -> Result<(), JsValue> {
        self.core_mut()?.enable_perf_metrics(enabled);
        Ok(())
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> Result<PerfStats, JsValue> {
        Ok(self.core()?.perf_stats())
    }

    /// Stop the scheduler and release the frame callback. Further calls fail.
    pub fn destroy(&self) -> Result<(), JsValue> {
        let mut slot = self
            .core
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("cannot destroy a session from inside its own frame"))?;
        if let Some(mut core) = slot.take() {
            core.stop();
            core.clear_observers();
            info!("session destroyed");
        }
        drop(slot);
        self.clock.clear_callback();
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = self.destroy() {
            warn!("session drop: {:?}", e);
        }
    }
}

fn frame_callback(core: Weak<RefCell<Option<SessionCore<AnimationFrameClock>>>>) -> FrameCallback {
    Closure::wrap(Box::new(move |now: f64| {
        let Some(core) = core.upgrade() else { return };
        let Ok(mut slot) = core.try_borrow_mut() else {
            warn!("frame callback re-entered; skipped");
            return;
        };
        if let Some(session) = slot.as_mut() {
            session.on_frame(now);
        }
    }) as Box<dyn FnMut(f64)>)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::timing::ClockSource;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Deliver one host frame far enough ahead to fire, as the rAF closure does
    fn deliver_frame(session: &Session) {
        let now = session.clock.now() + 1000.0;
        if let Some(core) = session.core.borrow_mut().as_mut() {
            assert!(core.on_frame(now));
        }
    }

    #[wasm_bindgen_test]
    fn frame_callback_receives_cells_of_the_ticked_board() {
        let session = Session::new(30, 30, 10, 10).unwrap();
        session.set_cell(1, 0, true).unwrap();
        session.set_cell(1, 1, true).unwrap();
        session.set_cell(1, 2, true).unwrap();
        session.resume().unwrap();

        let record = Function::new_with_args(
            "snapshot, cells",
            "globalThis.lifeboardFrame = { paused: snapshot.paused, cells: Array.from(cells) };",
        );
        session.set_on_frame(Some(record));
        deliver_frame(&session);

        let frame = js_sys::Reflect::get(&js_sys::global(), &"lifeboardFrame".into()).unwrap();
        let cells = js_sys::Reflect::get(&frame, &"cells".into()).unwrap();
        let cells: Vec<u8> = js_sys::Array::from(&cells)
            .iter()
            .map(|v| v.as_f64().unwrap() as u8)
            .collect();
        // Vertical blinker became horizontal on the middle row
        assert_eq!(cells, vec![0, 0, 0, 1, 1, 1, 0, 0, 0]);
        assert_eq!(session.generation().unwrap(), 1);
    }
}
