// Pointer speed mapping and the Active/Idle state machine.

use conductor_core::*;

fn mapper() -> (InputMapper, Session) {
    let cfg = EngineConfig::default();
    (
        InputMapper::new(cfg.rate, cfg.activity),
        Session::new(Viewport::new(1280.0, 800.0)),
    )
}

#[test]
fn rate_curve_is_monotonic_and_bounded() {
    let curve = RateCurve::default();
    let mut prev = curve.playback_rate(0.0);
    for step in 0..=1000 {
        let speed = step as f32 * 0.005;
        let r = curve.playback_rate(speed);
        assert!(r >= prev, "rate decreased at speed {speed}: {prev} -> {r}");
        assert!(r >= curve.min_rate && r <= curve.max_rate);
        prev = r;
    }
}

#[test]
fn rate_curve_is_continuous_at_thresholds() {
    let curve = RateCurve::default();
    let eps = 1e-4;
    for threshold in [curve.low_speed, curve.high_speed] {
        let below = curve.playback_rate(threshold - eps);
        let at = curve.playback_rate(threshold);
        let above = curve.playback_rate(threshold + eps);
        assert!((at - below).abs() < 1e-3, "jump below {threshold}");
        assert!((above - at).abs() < 1e-3, "jump above {threshold}");
    }
}

#[test]
fn rate_curve_tail_is_gentler_than_middle() {
    let curve = RateCurve::default();
    let mid = curve.playback_rate(1.5) - curve.playback_rate(1.4);
    let tail = curve.playback_rate(2.6) - curve.playback_rate(2.5);
    assert!(tail < mid);
}

#[test]
fn rate_curve_ignores_nonsense_speeds() {
    let curve = RateCurve::default();
    assert_eq!(curve.playback_rate(f32::NAN), curve.min_rate);
    assert_eq!(curve.playback_rate(-3.0), curve.min_rate);
    assert_eq!(curve.playback_rate(f32::INFINITY), curve.max_rate);
}

#[test]
fn fast_and_slow_moves_hit_the_rate_limits() {
    let (mut m, mut s) = mapper();
    assert_eq!(m.on_sample(&mut s, PointerSample::new(0.0, 0.0, 0.0)), RateUpdate::First);

    // 300px in 100ms
    match m.on_sample(&mut s, PointerSample::new(300.0, 0.0, 100.0)) {
        RateUpdate::Updated { speed, rate } => {
            assert!((speed - 3.0).abs() < 1e-5);
            assert_eq!(rate, 2.5);
        }
        other => panic!("expected update, got {other:?}"),
    }
    assert_eq!(s.playback_rate, 2.5);

    // 5px in 100ms
    m.on_sample(&mut s, PointerSample::new(305.0, 0.0, 200.0));
    assert_eq!(s.playback_rate, 0.3);
}

#[test]
fn zero_or_negative_elapsed_time_skips_the_rate() {
    let (mut m, mut s) = mapper();
    m.on_sample(&mut s, PointerSample::new(0.0, 0.0, 10.0));
    m.on_sample(&mut s, PointerSample::new(300.0, 0.0, 110.0));
    let before = s.playback_rate;

    assert_eq!(
        m.on_sample(&mut s, PointerSample::new(900.0, 0.0, 110.0)),
        RateUpdate::Skipped
    );
    assert_eq!(
        m.on_sample(&mut s, PointerSample::new(10.0, 0.0, 50.0)),
        RateUpdate::Skipped
    );
    assert_eq!(s.playback_rate, before);
    // position is still tracked
    assert_eq!(s.pointer, Some(glam::Vec2::new(10.0, 0.0)));
}

#[test]
fn pointer_speed_none_without_elapsed_time() {
    let a = PointerSample::new(0.0, 0.0, 5.0);
    let b = PointerSample::new(3.0, 4.0, 5.0);
    assert_eq!(pointer_speed(&a, &b), None);
    let c = PointerSample::new(3.0, 4.0, 10.0);
    assert_eq!(pointer_speed(&a, &c), Some(1.0));
}

#[test]
fn session_starts_idle_with_hint_hidden() {
    let (m, s) = mapper();
    assert_eq!(s.activity, Activity::Idle);
    assert!(!s.hint_visible);
    assert_eq!(s.energy, 0.0);
    assert_eq!(s.pointer, None);
    assert_eq!(m.idle_deadline(), None);
}

#[test]
fn sample_activates_and_idle_timer_deactivates() {
    let (mut m, mut s) = mapper();
    m.on_sample(&mut s, PointerSample::new(10.0, 10.0, 0.0));
    assert_eq!(s.activity, Activity::Active);
    assert_eq!(s.energy, ENERGY_ACTIVE);
    assert!(!s.hint_visible);
    assert_eq!(m.idle_deadline(), Some(IDLE_DELAY_MS));

    assert!(!m.idle_elapsed(&mut s, 50.0));
    assert!(s.is_active());

    assert!(m.idle_elapsed(&mut s, 100.0));
    assert_eq!(s.activity, Activity::Idle);
    assert_eq!(s.energy, ENERGY_IDLE);
    assert!(s.hint_visible);
    assert_eq!(m.idle_deadline(), None);

    // firing again is a no-op
    assert!(!m.idle_elapsed(&mut s, 500.0));
}

#[test]
fn new_sample_cancels_pending_idle() {
    let (mut m, mut s) = mapper();
    m.on_sample(&mut s, PointerSample::new(10.0, 10.0, 0.0));
    m.on_sample(&mut s, PointerSample::new(12.0, 10.0, 60.0));

    // the timer armed by the first sample fires at 100 and must be ignored
    assert!(!m.idle_elapsed(&mut s, 100.0));
    assert!(s.is_active());
    assert!(m.idle_elapsed(&mut s, 160.0));
    assert!(!s.is_active());

    // idle -> active on the next sample
    m.on_sample(&mut s, PointerSample::new(20.0, 10.0, 400.0));
    assert!(s.is_active());
    assert!(!s.hint_visible);
}
