//! Session - one running Game of Life board
//!
//! Composes Grid + LifeEngine + Scheduler. The host owns exactly one
//! session and drives it through `on_frame`; everything else (drawing, DOM
//! events, the chart) talks to it through the operations below and
//! `SessionObserver`.
//!
//! Split in two so the scheduler can hand a tick closure the rest of the
//! session without aliasing itself:
//! - `SessionCore` owns the scheduler and the observers
//! - `Board` owns grid, counters, pause flag and perf state

use rand::rngs::StdRng;

use crate::core::LifeError;
use crate::domain::Cell;
use crate::grid::Grid;
use crate::systems::life::LifeEngine;
use crate::timing::{ClockSource, Scheduler, SchedulerState};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "render/snapshot.rs"]
mod snapshot;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod observer;
mod facade;

pub use facade::Session;
pub use observer::SessionObserver;
pub use perf_stats::PerfStats;
pub use settings::{BoardGeometry, SessionConfig};
pub use snapshot::FrameSnapshot;

use perf_timer::PerfTimer;

/// Simulation state the tick operates on
pub(crate) struct Board {
    config: SessionConfig,
    geometry: BoardGeometry,
    grid: Grid,
    engine: LifeEngine,
    rng: StdRng,

    // State
    paused: bool,
    generation: u64,
    living: u32,
    dead: u32,
    hover: Option<(i32, i32)>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

pub struct SessionCore<C: ClockSource> {
    scheduler: Scheduler<C>,
    board: Board,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl<C: ClockSource> SessionCore<C> {
    /// Validate `config` and build an all-dead, paused session whose
    /// scheduler has not started yet.
    pub fn new(config: SessionConfig, clock: C) -> Result<Self, LifeError> {
        init::create_session_core(config, clock)
    }

    /// `new` followed by `start`: the session is live and waiting for host
    /// frames, still paused so the board can be seeded.
    pub fn initialize(config: SessionConfig, clock: C) -> Result<Self, LifeError> {
        let mut session = Self::new(config, clock)?;
        session.start()?;
        Ok(session)
    }

    pub fn start(&mut self) -> Result<(), LifeError> {
        self.scheduler.start()
    }

    /// Tear the scheduler down; no tick is delivered after this.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Replace this session with a fresh one built from `config`.
    ///
    /// All-or-nothing: the replacement is validated and started before the
    /// current scheduler is stopped, so an error leaves this session running
    /// as it was. Only the clock and the observers are carried over.
    pub fn reset(&mut self, config: SessionConfig) -> Result<(), LifeError>
    where
        C: Clone,
    {
        init::reset_session_core(self, config)
    }

    // === Observers ===
    pub fn add_observer(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    // === Frame driving ===

    /// Host frame callback. Returns `true` when a tick was delivered.
    pub fn on_frame(&mut self, now: f64) -> bool {
        step::on_frame(self, now)
    }

    /// Scheduler tick target. Advances one generation unless paused;
    /// returns whether it did.
    pub fn tick(&mut self) -> bool {
        step::tick(&mut self.board, &mut self.observers)
    }

    // === UI operations ===
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), LifeError> {
        commands::set_cell(&mut self.board, x, y, cell)
    }

    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<Cell, LifeError> {
        commands::toggle_cell(&mut self.board, x, y)
    }

    pub fn randomize_board(&mut self) {
        commands::randomize_board(&mut self.board)
    }

    pub fn clear_board(&mut self) {
        commands::clear_board(&mut self.board)
    }

    pub fn pause(&mut self) {
        commands::set_paused(&mut self.board, true)
    }

    pub fn resume(&mut self) {
        commands::set_paused(&mut self.board, false)
    }

    pub fn toggle_pause(&mut self) -> bool {
        let paused = !self.board.paused;
        commands::set_paused(&mut self.board, paused);
        paused
    }

    /// Grid coordinate under a board-relative pixel position
    pub fn cell_at_pixel(&self, px: f64, py: f64) -> (i32, i32) {
        commands::cell_at_pixel(&self.board, px, py)
    }

    /// Remember the hovered cell for the renderer; `None` off the board.
    pub fn hover(&mut self, px: f64, py: f64) -> Option<(i32, i32)> {
        commands::hover(&mut self.board, px, py)
    }

    pub fn clear_hover(&mut self) {
        self.board.hover = None;
    }

    /// Bring the cell under a pixel to life (pointer-down seeding)
    pub fn set_cell_at_pixel(&mut self, px: f64, py: f64) -> Result<(i32, i32), LifeError> {
        let (x, y) = self.cell_at_pixel(px, py);
        self.set_cell(x, y, Cell::Alive)?;
        Ok((x, y))
    }

    // === Perf ===

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.board.perf_enabled = enabled;
        if !enabled {
            self.board.perf_stats.reset();
        }
    }

    /// Last frame perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.board.perf_stats.clone()
    }

    // === Read access for the renderer ===
    pub fn grid(&self) -> &Grid { &self.board.grid }

    pub fn cell(&self, x: i32, y: i32) -> Result<Cell, LifeError> {
        self.board.grid.get(x, y)
    }

    pub fn config(&self) -> &SessionConfig { &self.board.config }

    pub fn geometry(&self) -> BoardGeometry { self.board.geometry }

    pub fn columns(&self) -> u32 { self.board.geometry.columns }

    pub fn rows(&self) -> u32 { self.board.geometry.rows }

    pub fn generation(&self) -> u64 { self.board.generation }

    pub fn living(&self) -> u32 { self.board.living }

    pub fn dead(&self) -> u32 { self.board.dead }

    pub fn is_paused(&self) -> bool { self.board.paused }

    pub fn hovered(&self) -> Option<(i32, i32)> { self.board.hover }

    pub fn scheduler(&self) -> &Scheduler<C> { &self.scheduler }

    pub fn scheduler_state(&self) -> SchedulerState { self.scheduler.state() }

    pub fn snapshot(&self) -> FrameSnapshot {
        step::snapshot(&self.board, &self.scheduler)
    }

    /// `Generation: 3 Cells: 1200 Current living cells: 41 Current dead cells: 1159`
    pub fn game_status_line(&self) -> String {
        format!(
            "Generation: {} Cells: {} Current living cells: {} Current dead cells: {}",
            self.board.generation,
            self.board.grid.size(),
            self.board.living,
            self.board.dead
        )
    }

    pub fn status_line(&self) -> String {
        self.scheduler.status_line()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
