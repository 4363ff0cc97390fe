use std::cell::RefCell;
use std::rc::Rc;

use crate::core::LifeError;

/// Ticket for one registered host callback, used to cancel it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Anything that can deliver monotonically increasing timestamps (ms) and
/// accept a cancellable "call me on the next frame" registration.
///
/// The browser implementation is `requestAnimationFrame`; tests use
/// `ManualClock`.
pub trait ClockSource {
    fn now(&self) -> f64;

    /// Register for the next host frame callback.
    fn request_frame(&mut self) -> Result<FrameHandle, LifeError>;

    /// Cancel a registration made by `request_frame`.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Default)]
struct ManualClockState {
    now: f64,
    next_handle: i32,
    requested: u32,
    pending: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

/// Synthetic clock: time only moves when the test says so.
///
/// Clones share state, so a test can keep one copy while the scheduler owns
/// another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ManualClockState>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        let clock = Self::default();
        clock.set_now(start_ms);
        clock
    }

    pub fn set_now(&self, ms: f64) {
        self.state.borrow_mut().now = ms;
    }

    /// Move time forward and return the new timestamp.
    pub fn advance(&self, ms: f64) -> f64 {
        let mut state = self.state.borrow_mut();
        state.now += ms;
        state.now
    }

    /// Total `request_frame` calls so far
    pub fn requested(&self) -> u32 {
        self.state.borrow().requested
    }

    /// Registrations neither delivered nor cancelled
    pub fn pending(&self) -> Vec<FrameHandle> {
        self.state.borrow().pending.clone()
    }

    pub fn cancelled(&self) -> Vec<FrameHandle> {
        self.state.borrow().cancelled.clone()
    }

    /// Take every pending registration, as the host does when it runs a frame.
    pub fn take_pending(&self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.state.borrow_mut().pending)
    }
}

impl ClockSource for ManualClock {
    fn now(&self) -> f64 {
        self.state.borrow().now
    }

    fn request_frame(&mut self) -> Result<FrameHandle, LifeError> {
        let mut state = self.state.borrow_mut();
        state.next_handle += 1;
        state.requested += 1;
        let handle = FrameHandle(state.next_handle);
        state.pending.push(handle);
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut state = self.state.borrow_mut();
        state.pending.retain(|h| *h != handle);
        state.cancelled.push(handle);
    }
}
