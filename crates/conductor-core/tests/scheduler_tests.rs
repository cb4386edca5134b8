// Frame pacing: running state and the tempo-coupled motion clock.

use conductor_core::*;

fn running() -> FrameScheduler {
    let mut s = FrameScheduler::new(MOTION_TIME_SCALE, MAX_FRAME_DT_SECS);
    assert!(s.start());
    s
}

#[test]
fn nothing_advances_before_start() {
    let mut s = FrameScheduler::new(MOTION_TIME_SCALE, MAX_FRAME_DT_SECS);
    assert!(!s.is_running());
    assert_eq!(s.advance(16.0, 1.0), None);
    assert_eq!(s.motion_time(), 0.0);
}

#[test]
fn first_frame_after_start_has_zero_dt() {
    let mut s = running();
    let first = s.advance(12_345.0, 2.0).expect("running");
    assert_eq!(first.dt_secs, 0.0);
    assert_eq!(first.motion_time, 0.0);

    let next = s.advance(12_361.0, 1.0).expect("running");
    assert!((next.dt_secs - 0.016).abs() < 1e-9);
}

#[test]
fn motion_clock_advances_by_dt_times_rate() {
    let mut fast = running();
    let mut slow = running();
    fast.advance(0.0, 2.0);
    slow.advance(0.0, 0.5);
    for k in 1..=60 {
        let now = k as f64 * 16.0;
        fast.advance(now, 2.0);
        slow.advance(now, 0.5);
    }
    // 60 frames of 16ms
    assert!((fast.motion_time() - 0.96 * 2.0).abs() < 1e-9);
    assert!((slow.motion_time() - 0.96 * 0.5).abs() < 1e-9);
}

#[test]
fn rate_change_never_jumps_the_clock() {
    let mut s = running();
    s.advance(0.0, 0.3);
    let before = s.advance(1000.0 * MAX_FRAME_DT_SECS, 0.3).expect("running");
    let after = s.advance(1000.0 * MAX_FRAME_DT_SECS + 16.0, 2.5).expect("running");
    let step = after.motion_time - before.motion_time;
    assert!((step - 0.016 * 2.5).abs() < 1e-9, "step {step}");
}

#[test]
fn backgrounded_tab_is_clamped_to_one_max_step() {
    let mut s = running();
    s.advance(0.0, 1.0);
    let t = s.advance(30_000.0, 2.0).expect("running");
    assert_eq!(t.dt_secs, MAX_FRAME_DT_SECS);
    assert!((t.motion_time - MAX_FRAME_DT_SECS * 2.0).abs() < 1e-9);
}

#[test]
fn clock_going_backwards_does_not_rewind_motion() {
    let mut s = running();
    s.advance(100.0, 1.0);
    s.advance(116.0, 1.0);
    let t = s.advance(50.0, 1.0).expect("running");
    assert_eq!(t.dt_secs, 0.0);
    assert!((t.motion_time - 0.016).abs() < 1e-9);
}

#[test]
fn stop_ends_advancing_and_restart_keeps_the_clock() {
    let mut s = running();
    s.advance(0.0, 1.0);
    s.advance(50.0, 1.0);
    s.stop();
    assert!(!s.is_running());
    assert_eq!(s.advance(66.0, 1.0), None);

    let kept = s.motion_time();
    assert!(s.start());
    assert!(!s.start(), "already running");
    // time spent stopped is not counted
    let t = s.advance(10_000.0, 1.0).expect("running");
    assert_eq!(t.dt_secs, 0.0);
    assert_eq!(t.motion_time, kept);
}
