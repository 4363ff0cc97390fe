//! Lifeboard Engine - Conway's Game of Life in WASM
//!
//! Architecture:
//! - core/          - Errors, logging, safety macros
//! - domain/        - Cell states and the B3/S23 rule
//! - spatial/       - Grid storage and neighbourhoods
//! - systems/       - Life engine (one generation per call)
//! - timing/        - Fixed-rate scheduler over host frame callbacks
//! - simulation/    - Session orchestration + JS facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod timing;
pub mod simulation;

pub use spatial::grid;
pub use systems::life;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_console_logger(log::LevelFilter::Info);
    log::info!("Lifeboard WASM engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::LifeError;
pub use domain::Cell;
pub use grid::Grid;
pub use life::{Generation, LifeEngine};
pub use simulation::{
    BoardGeometry, FrameSnapshot, PerfStats, Session, SessionConfig, SessionCore, SessionObserver,
};
pub use timing::{ClockSource, FrameHandle, ManualClock, Scheduler, SchedulerState};
