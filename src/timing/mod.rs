//! Fixed-rate scheduler driven by a variable-rate host frame callback
//!
//! The host (e.g. `requestAnimationFrame` at ~60 Hz) calls `on_frame` with its
//! timestamp. The scheduler re-registers every time and only delivers a tick
//! once a full target interval has elapsed. The next-fire baseline keeps the
//! remainder (`now - elapsed % interval`) so late callbacks do not slow the
//! achieved rate down.

use log::{debug, warn};

use crate::core::LifeError;

mod clock;
mod animation_frame;

pub use animation_frame::{AnimationFrameClock, FrameCallback};
pub use clock::{ClockSource, FrameHandle, ManualClock};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    /// Terminal. A stopped scheduler is replaced, never restarted.
    Stopped,
}

pub struct Scheduler<C: ClockSource> {
    clock: C,
    state: SchedulerState,

    target_fps: u32,
    interval_ms: f64,

    start_time: f64,
    last_fire: f64,
    elapsed_ms: f64,
    frame_count: u32,
    measured_fps: f64,
    /// Host callbacks that arrived before the interval elapsed
    skipped_callbacks: u32,

    pending: Option<FrameHandle>,
}

impl<C: ClockSource> Scheduler<C> {
    pub fn new(clock: C, target_fps: u32) -> Result<Self, LifeError> {
        if target_fps == 0 {
            return Err(LifeError::invalid("fps must be at least 1"));
        }
        Ok(Self {
            clock,
            state: SchedulerState::Idle,
            target_fps,
            interval_ms: 1000.0 / target_fps as f64,
            start_time: 0.0,
            last_fire: 0.0,
            elapsed_ms: 0.0,
            frame_count: 0,
            measured_fps: 0.0,
            skipped_callbacks: 0,
            pending: None,
        })
    }

    /// `Idle -> Running`: stamp the start time and register for the first
    /// host callback. Ignored in any other state.
    pub fn start(&mut self) -> Result<(), LifeError> {
        if self.state != SchedulerState::Idle {
            warn!("scheduler start ignored in state {:?}", self.state);
            return Ok(());
        }
        let now = self.clock.now();
        self.start_time = now;
        self.last_fire = now;
        self.pending = Some(self.clock.request_frame()?);
        self.state = SchedulerState::Running;
        debug!("scheduler started at {} fps ({:.2} ms interval)", self.target_fps, self.interval_ms);
        Ok(())
    }

    /// `Running -> Stopped`. Cancels the queued host callback; any callback
    /// the host still delivers afterwards is ignored.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.clock.cancel_frame(handle);
        }
        if self.state != SchedulerState::Stopped {
            debug!("scheduler stopped after {} frames", self.frame_count);
        }
        self.state = SchedulerState::Stopped;
    }

    /// Handle one host callback at timestamp `now`.
    ///
    /// Returns `true` when `tick` was delivered.
    pub fn on_frame<F: FnOnce()>(&mut self, now: f64, tick: F) -> bool {
        if self.state != SchedulerState::Running {
            return false;
        }

        // Yield back to the host: always ask for the next callback
        self.pending = match self.clock.request_frame() {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("could not register next frame: {e}");
                None
            }
        };

        let elapsed = now - self.last_fire;
        if elapsed < self.interval_ms {
            self.skipped_callbacks = self.skipped_callbacks.saturating_add(1);
            return false;
        }

        self.last_fire = now - (elapsed % self.interval_ms);
        self.frame_count += 1;

        tick();

        let since_start = now - self.start_time;
        self.elapsed_ms = since_start;
        self.measured_fps = if since_start > 0.0 {
            self.frame_count as f64 / (since_start / 1000.0)
        } else {
            0.0
        };
        true
    }

    // === Metrics ===
    pub fn state(&self) -> SchedulerState { self.state }

    pub fn is_running(&self) -> bool { self.state == SchedulerState::Running }

    pub fn target_fps(&self) -> u32 { self.target_fps }

    pub fn interval_ms(&self) -> f64 { self.interval_ms }

    /// Time from start to the last delivered tick
    pub fn elapsed_ms(&self) -> f64 { self.elapsed_ms }

    pub fn frame_count(&self) -> u32 { self.frame_count }

    /// Display only; nothing feeds back on it
    pub fn measured_fps(&self) -> f64 { self.measured_fps }

    pub fn skipped_callbacks(&self) -> u32 { self.skipped_callbacks }

    pub fn pending_frame(&self) -> Option<FrameHandle> { self.pending }

    pub fn clock(&self) -> &C { &self.clock }

    /// `Elapsed time= 1.23 secs @ 9.98 fps.`
    pub fn status_line(&self) -> String {
        format!(
            "Elapsed time= {} secs @ {} fps.",
            round2(self.elapsed_ms / 1000.0),
            round2(self.measured_fps)
        )
    }
}

impl<C: ClockSource> Drop for Scheduler<C> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests;
