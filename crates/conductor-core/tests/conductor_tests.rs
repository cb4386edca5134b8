// Session-level behavior: loop start/stop, audio retries, idle volume.

use conductor_core::*;
use glam::Vec2;

#[derive(Default)]
struct FakeAudio {
    volume: f32,
    rate: f32,
    paused: bool,
    reject: bool,
    play_requests: usize,
    pauses: usize,
}

impl FakeAudio {
    fn paused() -> Self {
        Self {
            paused: true,
            ..Self::default()
        }
    }
}

impl AudioOutput for FakeAudio {
    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
    fn set_playback_rate(&mut self, rate: f32) {
        self.rate = rate;
    }
    fn is_paused(&self) -> bool {
        self.paused
    }
    fn request_play(&mut self) -> Result<(), AudioError> {
        self.play_requests += 1;
        if self.reject {
            return Err(AudioError::Rejected("NotAllowedError".into()));
        }
        self.paused = false;
        Ok(())
    }
    fn pause(&mut self) {
        self.paused = true;
        self.pauses += 1;
    }
}

#[derive(Default)]
struct CountingSurface {
    size: Option<Viewport>,
    clears: usize,
    disks: usize,
}

impl TrailSurface for CountingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.size = Some(viewport);
    }
    fn clear(&mut self) {
        self.clears += 1;
        self.disks = 0;
    }
    fn fill_disk(&mut self, _center: Vec2, _radius: f32, _rgb: [u8; 3], _alpha: f32) {
        self.disks += 1;
    }
}

const VIEW: Viewport = Viewport::new(1024.0, 768.0);

fn conductor(audio: FakeAudio) -> Conductor<FakeAudio> {
    let anchors = [
        Vec2::new(200.0, 200.0),
        Vec2::new(500.0, 200.0),
        Vec2::new(800.0, 200.0),
        Vec2::new(500.0, 500.0),
    ];
    Conductor::new(EngineConfig::default(), &anchors, VIEW, audio).expect("valid config")
}

#[test]
fn frames_do_nothing_before_the_first_pointer_move() {
    let mut c = conductor(FakeAudio::paused());
    let mut surface = CountingSurface::default();
    assert!(!c.is_running());
    assert_eq!(c.frame(0.0, &mut surface), FrameOutcome::Stop);
    assert_eq!(surface.clears, 0);
}

#[test]
fn first_pointer_move_starts_the_loop_once() {
    let mut c = conductor(FakeAudio::paused());
    let first = c.pointer_moved(10.0, 10.0, 0.0);
    assert!(first.start_loop);
    assert_eq!(first.rate, RateUpdate::First);
    assert_eq!(first.idle_deadline_ms, IDLE_DELAY_MS);

    let second = c.pointer_moved(20.0, 10.0, 16.0);
    assert!(!second.start_loop);
    assert!(c.is_running());
}

#[test]
fn frame_moves_entities_and_paints_the_trail() {
    let mut c = conductor(FakeAudio::paused());
    let mut surface = CountingSurface::default();
    c.pointer_moved(10.0, 10.0, 0.0);
    c.pointer_moved(60.0, 10.0, 16.0);

    assert_eq!(c.frame(16.0, &mut surface), FrameOutcome::Continue);
    assert_eq!(c.frame(32.0, &mut surface), FrameOutcome::Continue);
    assert_eq!(c.transforms().len(), 4);
    assert_eq!(surface.clears, 2);
    assert_eq!(surface.disks, 2);

    // after the lifetime the trail is gone but the surface is still cleared
    assert_eq!(c.frame(2000.0, &mut surface), FrameOutcome::Continue);
    assert_eq!(surface.clears, 3);
    assert_eq!(surface.disks, 0);
    assert!(c.trail().is_empty());
}

#[test]
fn pointer_move_drives_audio_volume_and_rate() {
    let mut c = conductor(FakeAudio::paused());
    c.pointer_moved(0.0, 0.0, 0.0);
    c.pointer_moved(300.0, 0.0, 100.0);
    assert_eq!(c.audio().rate, 2.5);
    assert_eq!(c.audio().volume, ENERGY_ACTIVE);
    assert_eq!(c.audio().play_requests, 1, "play requested once while paused");

    assert!(!c.idle_elapsed(150.0));
    assert!(c.idle_elapsed(200.0));
    assert_eq!(c.audio().volume, ENERGY_IDLE);
    assert!(c.session().hint_visible);
}

#[test]
fn audio_ready_settles_to_silence_before_any_sample() {
    let mut audio = FakeAudio::default();
    audio.volume = 1.0;
    let mut c = conductor(audio);
    c.audio_ready();
    assert_eq!(c.audio().volume, 0.0);
}

#[test]
fn rejected_playback_is_retried_on_every_gesture() {
    let mut c = conductor(FakeAudio {
        reject: true,
        ..FakeAudio::paused()
    });
    c.pointer_moved(0.0, 0.0, 0.0);
    c.clicked();
    c.pointer_moved(5.0, 0.0, 10.0);
    assert_eq!(c.audio().play_requests, 3);
    assert!(c.audio().is_paused());
    // motion still runs without audio
    assert!(c.is_running());
}

#[test]
fn stop_ends_the_loop_and_silences_audio() {
    let mut c = conductor(FakeAudio::paused());
    let mut surface = CountingSurface::default();
    c.pointer_moved(0.0, 0.0, 0.0);
    assert_eq!(c.frame(16.0, &mut surface), FrameOutcome::Continue);

    c.stop();
    assert!(!c.is_running());
    assert_eq!(c.frame(32.0, &mut surface), FrameOutcome::Stop);
    assert!(c.audio().is_paused());
    assert_eq!(c.audio().pauses, 1);
    assert_eq!(c.audio().volume, ENERGY_IDLE);
    assert_eq!(c.session().activity, Activity::Idle);

    // the next sample restarts it
    assert!(c.pointer_moved(5.0, 5.0, 500.0).start_loop);
}

#[test]
fn toggle_stops_then_resumes_audio() {
    let mut c = conductor(FakeAudio::paused());
    c.pointer_moved(0.0, 0.0, 0.0);
    c.toggle();
    assert!(!c.is_running());
    assert!(c.audio().is_paused());

    c.toggle();
    assert!(!c.audio().is_paused());
    assert!(!c.is_running(), "frames resume on the next pointer move");
}

#[test]
fn stop_wipes_the_trail_from_the_surface() {
    let mut c = conductor(FakeAudio::paused());
    let mut surface = CountingSurface::default();
    c.pointer_moved(10.0, 10.0, 0.0);
    c.pointer_moved(60.0, 10.0, 16.0);
    c.frame(16.0, &mut surface);
    assert_eq!(surface.disks, 2);

    c.stop();
    assert!(c.trail().is_empty());
    let clears = surface.clears;
    for k in 1..200 {
        assert_eq!(c.frame(16.0 + k as f64 * 16.0, &mut surface), FrameOutcome::Stop);
    }
    assert_eq!(surface.disks, 0);
    assert_eq!(surface.clears, clears + 1, "wiped once, then left alone");
}

#[test]
fn restarted_loop_does_not_bring_the_old_trail_back() {
    let mut c = conductor(FakeAudio::paused());
    let mut surface = CountingSurface::default();
    c.pointer_moved(10.0, 10.0, 0.0);
    c.frame(16.0, &mut surface);
    c.stop();

    assert!(c.pointer_moved(300.0, 300.0, 100.0).start_loop);
    c.frame(116.0, &mut surface);
    assert_eq!(c.trail().len(), 1);
    assert_eq!(surface.disks, 1);
}

#[test]
fn resize_resyncs_session_and_surface() {
    let mut c = conductor(FakeAudio::paused());
    let mut surface = CountingSurface::default();
    let next = Viewport::new(640.0, 480.0);
    c.resize(next, &mut surface);
    assert_eq!(c.session().viewport, next);
    assert_eq!(surface.size, Some(next));

    c.pointer_moved(0.0, 0.0, 0.0);
    for k in 0..120 {
        c.frame(k as f64 * 16.0, &mut surface);
    }
    for e in c.engine().entities() {
        assert!(next.contains(e.current, BOUNDS_MARGIN));
    }
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = EngineConfig::default();
    cfg.rate.min_rate = 3.0;
    let err = Conductor::new(cfg, &[], VIEW, FakeAudio::default())
        .err()
        .expect("inverted rate range");
    assert_eq!(err, ConfigError::RateRange { min: 3.0, max: 2.5 });

    let mut cfg = EngineConfig::default();
    cfg.integrator.damping = 1.0;
    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::OutOfRange { name: "damping", .. })
    ));

    let mut cfg = EngineConfig::default();
    cfg.trail.lifetime_ms = 0.0;
    assert!(matches!(cfg.validate(), Err(ConfigError::NonPositive { .. })));

    assert_eq!(EngineConfig::default().validate(), Ok(()));
}
