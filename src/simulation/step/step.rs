use crate::timing::{ClockSource, Scheduler};

use super::{Board, FrameSnapshot, PerfTimer, SessionCore, SessionObserver};

pub(super) fn on_frame<C: ClockSource>(session: &mut SessionCore<C>, now: f64) -> bool {
    let SessionCore { scheduler, board, observers } = session;

    let perf_on = board.perf_enabled;
    let frame_start = PerfTimer::start_if(perf_on);

    let fired = scheduler.on_frame(now, || {
        tick(board, observers);
    });

    if perf_on {
        board.perf_stats.callbacks_skipped = scheduler.skipped_callbacks();
    }
    if !fired {
        return false;
    }

    // Renderer pulls the freshly ticked state, paused or not
    let frame = snapshot(board, scheduler);
    for observer in observers.iter_mut() {
        observer.on_frame(&frame, &board.grid);
    }

    if perf_on {
        board.perf_stats.frames_delivered = scheduler.frame_count();
        if let Some(start) = frame_start {
            board.perf_stats.tick_ms = start.elapsed_ms();
        }
    }
    true
}

pub(super) fn tick(board: &mut Board, observers: &mut [Box<dyn SessionObserver>]) -> bool {
    if board.paused {
        return false;
    }

    let (generation, advance_ms) =
        PerfTimer::measure(board.perf_enabled, || board.engine.advance(&board.grid));
    if let Some(ms) = advance_ms {
        board.perf_stats.advance_ms = ms;
        board.perf_stats.cells_processed = board.grid.size() as u32;
    }

    board.grid = generation.grid;
    board.generation += 1;
    board.living = generation.living;
    board.dead = generation.dead;

    for observer in observers.iter_mut() {
        observer.on_generation(board.generation, board.living, board.dead);
    }
    true
}

pub(super) fn snapshot<C: ClockSource>(board: &Board, scheduler: &Scheduler<C>) -> FrameSnapshot {
    FrameSnapshot {
        generation: board.generation,
        living: board.living,
        dead: board.dead,
        columns: board.geometry.columns,
        rows: board.geometry.rows,
        cell_size: board.geometry.cell_size,
        elapsed_ms: scheduler.elapsed_ms(),
        measured_fps: scheduler.measured_fps(),
        frame_count: scheduler.frame_count(),
        paused: board.paused,
        hover: board.hover,
    }
}
