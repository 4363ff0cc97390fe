use lifeboard_engine::{
    Cell, FrameSnapshot, Grid, ManualClock, SessionConfig, SessionCore, SessionObserver,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Default)]
struct Chart {
    points: Vec<(u64, u32, u32)>,
}

struct SharedChart(std::rc::Rc<std::cell::RefCell<Chart>>);

impl SessionObserver for SharedChart {
    fn on_generation(&mut self, generation: u64, living: u32, dead: u32) {
        self.0.borrow_mut().points.push((generation, living, dead));
    }

    fn on_reset(&mut self, _columns: u32, _rows: u32) {
        self.0.borrow_mut().points.clear();
    }
}

struct FrameCounter(std::rc::Rc<std::cell::Cell<u32>>);

impl SessionObserver for FrameCounter {
    fn on_frame(&mut self, snapshot: &FrameSnapshot, grid: &Grid) {
        assert_eq!(snapshot.columns(), grid.columns());
        self.0.set(self.0.get() + 1);
    }
}

/// Drive the session with 60 Hz host callbacks for `seconds`
fn run_host(session: &mut SessionCore<ManualClock>, clock: &ManualClock, seconds: u32) -> u32 {
    let mut delivered = 0;
    for _ in 0..seconds * 60 {
        let now = clock.advance(1000.0 / 60.0);
        clock.take_pending();
        if session.on_frame(now) {
            delivered += 1;
        }
    }
    delivered
}

#[test]
fn random_board_runs_at_target_rate() {
    init_logging();
    let clock = ManualClock::new(0.0);
    let config = SessionConfig::new(640, 480, 8, 12).with_seed(2024);
    let mut session = SessionCore::initialize(config, clock.clone()).unwrap();

    let chart = std::rc::Rc::new(std::cell::RefCell::new(Chart::default()));
    let frames = std::rc::Rc::new(std::cell::Cell::new(0));
    session.add_observer(Box::new(SharedChart(chart.clone())));
    session.add_observer(Box::new(FrameCounter(frames.clone())));

    session.randomize_board();
    session.resume();
    let delivered = run_host(&mut session, &clock, 10);

    assert_eq!(frames.get(), delivered);
    assert_eq!(session.generation(), delivered as u64);
    assert!((session.scheduler().measured_fps() - 12.0).abs() < 0.5);

    let chart = chart.borrow();
    assert_eq!(chart.points.len(), delivered as usize);
    for (i, &(generation, living, dead)) in chart.points.iter().enumerate() {
        assert_eq!(generation, i as u64 + 1);
        assert_eq!(living + dead, 80 * 60);
    }
}

#[test]
fn reset_mid_run_clears_chart_and_keeps_driving() {
    init_logging();
    let clock = ManualClock::new(0.0);
    let mut session =
        SessionCore::initialize(SessionConfig::new(100, 100, 10, 20).with_seed(1), clock.clone()).unwrap();
    let chart = std::rc::Rc::new(std::cell::RefCell::new(Chart::default()));
    session.add_observer(Box::new(SharedChart(chart.clone())));

    session.randomize_board();
    session.resume();
    run_host(&mut session, &clock, 1);
    assert!(!chart.borrow().points.is_empty());

    session.reset(SessionConfig::new(60, 60, 20, 20)).unwrap();
    assert!(chart.borrow().points.is_empty());
    assert_eq!((session.columns(), session.rows()), (3, 3));

    // Vertical blinker on the new 3x3 board
    for y in 0..3 {
        session.set_cell(1, y, Cell::Alive).unwrap();
    }
    session.resume();
    run_host(&mut session, &clock, 1);

    let chart = chart.borrow();
    assert!(!chart.points.is_empty());
    assert!(chart.points.iter().all(|&(_, living, _)| living == 3));
    assert_eq!(clock.pending().len(), 1);
}
