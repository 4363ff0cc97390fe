use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::LifeError;
use crate::grid::Grid;
use crate::systems::life::LifeEngine;
use crate::timing::{ClockSource, Scheduler};

use super::perf_stats::PerfStats;
use super::{Board, SessionConfig, SessionCore};

pub(super) fn create_board(config: SessionConfig) -> Result<Board, LifeError> {
    let geometry = config.geometry()?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let grid = Grid::new(geometry.columns, geometry.rows);

    Ok(Board {
        config,
        geometry,
        grid,
        engine: LifeEngine::new(),
        rng,

        paused: true,
        generation: 0,
        living: 0,
        dead: 0,
        hover: None,

        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

pub(super) fn create_session_core<C: ClockSource>(
    config: SessionConfig,
    clock: C,
) -> Result<SessionCore<C>, LifeError> {
    let board = create_board(config)?;
    let scheduler = Scheduler::new(clock, board.geometry.fps)?;
    debug!(
        "session created: {}x{} cells of {}px at {} fps",
        board.geometry.columns, board.geometry.rows, board.geometry.cell_size, board.geometry.fps
    );
    Ok(SessionCore {
        scheduler,
        board,
        observers: Vec::new(),
    })
}

pub(super) fn reset_session_core<C: ClockSource + Clone>(
    session: &mut SessionCore<C>,
    config: SessionConfig,
) -> Result<(), LifeError> {
    // Build and start the replacement first; on error nothing below runs
    let mut next = create_session_core(config, session.scheduler.clock().clone())?;
    next.start()?;

    session.scheduler.stop();
    next.observers = std::mem::take(&mut session.observers);
    *session = next;

    let (columns, rows) = (session.board.geometry.columns, session.board.geometry.rows);
    for observer in session.observers.iter_mut() {
        observer.on_reset(columns, rows);
    }
    info!("session reset to {}x{} cells", columns, rows);
    Ok(())
}
