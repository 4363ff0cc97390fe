use std::cell::Cell;

use super::*;

fn running(fps: u32) -> (Scheduler<ManualClock>, ManualClock) {
    let clock = ManualClock::new(0.0);
    let mut scheduler = Scheduler::new(clock.clone(), fps).unwrap();
    scheduler.start().unwrap();
    (scheduler, clock)
}

/// Feed `count` host callbacks spaced `step_ms` apart; return which ones fired.
fn feed(scheduler: &mut Scheduler<ManualClock>, clock: &ManualClock, step_ms: f64, count: u32) -> Vec<u32> {
    let mut fired = Vec::new();
    for k in 1..=count {
        let now = clock.advance(step_ms);
        // The host consumes the registration it is about to deliver
        clock.take_pending();
        let ticks = Cell::new(0);
        if scheduler.on_frame(now, || ticks.set(ticks.get() + 1)) {
            fired.push(k);
        }
        assert!(ticks.get() <= 1);
    }
    fired
}

#[test]
fn zero_fps_is_rejected() {
    let result = Scheduler::new(ManualClock::new(0.0), 0);
    assert!(matches!(result, Err(LifeError::InvalidConfiguration(_))));
}

#[test]
fn start_registers_first_host_callback() {
    let clock = ManualClock::new(5.0);
    let mut scheduler = Scheduler::new(clock.clone(), 30).unwrap();
    assert_eq!(scheduler.state(), SchedulerState::Idle);
    assert_eq!(clock.requested(), 0);

    scheduler.start().unwrap();
    assert_eq!(scheduler.state(), SchedulerState::Running);
    assert_eq!(clock.pending().len(), 1);
    assert!((scheduler.interval_ms() - 33.333).abs() < 0.01);
}

#[test]
fn ten_fps_on_sixty_hz_fires_about_every_sixth_callback() {
    let (mut scheduler, clock) = running(10);
    let fired = feed(&mut scheduler, &clock, 16.0, 600);

    assert_eq!(&fired[..6], &[7, 13, 19, 25, 32, 38]);
    for pair in fired.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap == 6 || gap == 7, "gap {gap}");
    }
    assert_eq!(scheduler.frame_count() as usize, fired.len());
    assert!((scheduler.measured_fps() - 10.0).abs() < 0.2, "fps {}", scheduler.measured_fps());
}

#[test]
fn measured_fps_converges_towards_target() {
    let (mut scheduler, clock) = running(10);
    feed(&mut scheduler, &clock, 16.0, 20);
    let early = (scheduler.measured_fps() - 10.0).abs();
    feed(&mut scheduler, &clock, 16.0, 2_000);
    let late = (scheduler.measured_fps() - 10.0).abs();
    assert!(late <= early, "early error {early}, late error {late}");
    assert!(late < 0.05);
}

#[test]
fn late_callback_keeps_phase() {
    let (mut scheduler, clock) = running(10);

    clock.set_now(150.0);
    assert!(scheduler.on_frame(150.0, || {}));
    // Baseline is 100, not 150, so 200 is already a full interval
    clock.set_now(200.0);
    assert!(scheduler.on_frame(200.0, || {}));
    clock.set_now(290.0);
    assert!(!scheduler.on_frame(290.0, || {}));
    clock.set_now(300.0);
    assert!(scheduler.on_frame(300.0, || {}));
    assert_eq!(scheduler.frame_count(), 3);
}

#[test]
fn every_callback_reregisters_even_without_a_tick() {
    let (mut scheduler, clock) = running(10);
    let before = clock.requested();
    feed(&mut scheduler, &clock, 16.0, 5);
    assert_eq!(clock.requested(), before + 5);
    assert_eq!(scheduler.frame_count(), 0);
    assert_eq!(scheduler.skipped_callbacks(), 5);
}

#[test]
fn stop_cancels_pending_and_silences_later_callbacks() {
    let (mut scheduler, clock) = running(10);
    let fired = feed(&mut scheduler, &clock, 16.0, 30);
    assert!(!fired.is_empty());
    let frames = scheduler.frame_count();

    let pending = scheduler.pending_frame().unwrap();
    scheduler.stop();
    assert_eq!(scheduler.state(), SchedulerState::Stopped);
    assert!(clock.pending().is_empty());
    assert_eq!(clock.cancelled(), vec![pending]);

    let requested = clock.requested();
    let after = feed(&mut scheduler, &clock, 16.0, 100);
    assert!(after.is_empty());
    assert_eq!(scheduler.frame_count(), frames);
    assert_eq!(clock.requested(), requested);
}

#[test]
fn stopped_scheduler_does_not_restart() {
    let (mut scheduler, clock) = running(10);
    scheduler.stop();
    scheduler.start().unwrap();
    assert_eq!(scheduler.state(), SchedulerState::Stopped);
    assert!(clock.pending().is_empty());
}

#[test]
fn idle_scheduler_ignores_callbacks() {
    let clock = ManualClock::new(0.0);
    let mut scheduler = Scheduler::new(clock.clone(), 10).unwrap();
    assert!(!scheduler.on_frame(1_000.0, || panic!("must not tick")));
    assert_eq!(clock.requested(), 0);
}

#[test]
fn dropping_a_running_scheduler_cancels_its_callback() {
    let (scheduler, clock) = running(10);
    drop(scheduler);
    assert!(clock.pending().is_empty());
    assert_eq!(clock.cancelled().len(), 1);
}

#[test]
fn status_line_rounds_to_two_decimals() {
    let (mut scheduler, clock) = running(3);
    clock.set_now(1_000.0);
    assert!(scheduler.on_frame(1_000.0, || {}));
    assert_eq!(scheduler.status_line(), "Elapsed time= 1 secs @ 1 fps.");

    clock.set_now(1_500.0);
    assert!(scheduler.on_frame(1_500.0, || {}));
    // 2 frames / 1.5 s
    assert_eq!(scheduler.status_line(), "Elapsed time= 1.5 secs @ 1.33 fps.");
}
