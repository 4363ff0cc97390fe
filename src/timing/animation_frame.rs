//! `requestAnimationFrame` clock for the browser host

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::core::LifeError;

use super::clock::{ClockSource, FrameHandle};

pub type FrameCallback = Closure<dyn FnMut(f64)>;

/// Browser clock. Every registration re-uses the one installed callback.
///
/// Clones share the callback slot, so the facade can install the closure
/// after the session (which owns its own clone) has been built.
#[derive(Clone)]
pub struct AnimationFrameClock {
    window: web_sys::Window,
    performance: Option<web_sys::Performance>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationFrameClock {
    pub fn new() -> Result<Self, LifeError> {
        let window = web_sys::window().ok_or_else(|| LifeError::Host("no global `window`".into()))?;
        let performance = window.performance();
        Ok(Self {
            window,
            performance,
            callback: Rc::new(RefCell::new(None)),
        })
    }

    pub fn set_callback(&self, callback: FrameCallback) {
        *self.callback.borrow_mut() = Some(callback);
    }

    /// Drop the JS closure. Must not be called from inside the callback.
    pub fn clear_callback(&self) {
        self.callback.borrow_mut().take();
    }
}

impl ClockSource for AnimationFrameClock {
    fn now(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }

    fn request_frame(&mut self) -> Result<FrameHandle, LifeError> {
        let slot = self.callback.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| LifeError::Host("animation frame callback not installed".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| LifeError::Host(format!("requestAnimationFrame failed: {e:?}")))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", handle.0, e);
        }
    }
}
