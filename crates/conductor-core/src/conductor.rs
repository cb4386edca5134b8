//! Ties input, trail, motion and frame pacing to a host's audio and canvas.

use crate::config::EngineConfig;
use crate::engine::MotionEngine;
use crate::entity::{Transform, Viewport};
use crate::error::{AudioError, ConfigError};
use crate::input::{InputMapper, RateUpdate};
use crate::scheduler::{FrameOutcome, FrameScheduler};
use crate::session::{PointerSample, Session};
use crate::trail::{TrailRenderer, TrailStore, TrailSurface};
use glam::Vec2;

/// The single audio source whose volume and rate follow the session.
pub trait AudioOutput {
    fn set_volume(&mut self, volume: f32);
    fn set_playback_rate(&mut self, rate: f32);
    fn is_paused(&self) -> bool;
    /// Ask the host to start playback. `Ok` means the request was issued;
    /// asynchronous rejections are the host's to log.
    fn request_play(&mut self) -> Result<(), AudioError>;
    fn pause(&mut self);
}

/// What the host should do after a pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerResponse {
    pub rate: RateUpdate,
    /// The frame loop was stopped and must be driven again.
    pub start_loop: bool,
    /// Fire [`Conductor::idle_elapsed`] with this value once it passes.
    pub idle_deadline_ms: f64,
}

pub struct Conductor<A: AudioOutput> {
    session: Session,
    input: InputMapper,
    trail: TrailStore,
    renderer: TrailRenderer,
    engine: MotionEngine,
    scheduler: FrameScheduler,
    audio: A,
    // the surface still shows the last painted trail
    wipe_pending: bool,
}

impl<A: AudioOutput> Conductor<A> {
    pub fn new(
        config: EngineConfig,
        anchors: &[Vec2],
        viewport: Viewport,
        audio: A,
    ) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            log::warn!("[setup] rejected engine config: {e}");
            return Err(e);
        }
        Ok(Self {
            session: Session::new(viewport),
            input: InputMapper::new(config.rate.clone(), config.activity.clone()),
            trail: TrailStore::new(config.trail.lifetime_ms),
            renderer: TrailRenderer::new(config.trail.radius, config.trail.color),
            engine: MotionEngine::new(anchors, &config),
            scheduler: FrameScheduler::new(config.motion_time_scale, config.max_frame_dt_secs),
            audio,
            wipe_pending: false,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn engine(&self) -> &MotionEngine {
        &self.engine
    }

    pub fn trail(&self) -> &TrailStore {
        &self.trail
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn transforms(&self) -> &[Transform] {
        self.engine.transforms()
    }

    /// Playback was granted after setup: settle to the session's energy,
    /// which is zero until the first pointer sample.
    pub fn audio_ready(&mut self) {
        self.audio.set_volume(self.session.energy);
        self.audio.set_playback_rate(self.session.playback_rate);
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32, now_ms: f64) -> PointerResponse {
        let sample = PointerSample::new(x, y, now_ms);
        let rate = self.input.on_sample(&mut self.session, sample);
        self.trail.record(sample.position, now_ms);

        self.audio.set_playback_rate(self.session.playback_rate);
        self.ensure_playing();
        self.audio.set_volume(self.session.energy);

        PointerResponse {
            rate,
            start_loop: self.scheduler.start(),
            idle_deadline_ms: self.input.idle_deadline().unwrap_or(now_ms),
        }
    }

    pub fn clicked(&mut self) {
        self.ensure_playing();
    }

    /// Returns `true` when this call moved the session to Idle.
    pub fn idle_elapsed(&mut self, now_ms: f64) -> bool {
        let went_idle = self.input.idle_elapsed(&mut self.session, now_ms);
        if went_idle {
            self.audio.set_volume(self.session.energy);
        }
        went_idle
    }

    pub fn resize<S: TrailSurface + ?Sized>(&mut self, viewport: Viewport, surface: &mut S) {
        self.session.viewport = viewport;
        surface.resize(viewport);
    }

    /// Run one frame: move every entity, then repaint the trail. The first
    /// frame after a stop only wipes the surface.
    pub fn frame<S: TrailSurface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> FrameOutcome {
        let Some(time) = self
            .scheduler
            .advance(now_ms, self.session.playback_rate)
        else {
            if self.wipe_pending {
                surface.clear();
                self.wipe_pending = false;
            }
            return FrameOutcome::Stop;
        };
        // render clears the surface anyway
        self.wipe_pending = false;
        self.engine.step(&self.session, time.motion_time);
        self.renderer.render(&mut self.trail, surface, now_ms);
        FrameOutcome::Continue
    }

    /// Explicit stop: pause audio, drop to idle energy, forget the trail and
    /// end the frame loop.
    pub fn stop(&mut self) {
        if self.scheduler.is_running() {
            self.wipe_pending = true;
        }
        self.scheduler.stop();
        self.trail.clear();
        self.input.force_idle(&mut self.session);
        self.audio.set_volume(self.session.energy);
        self.audio.pause();
    }

    /// Stop when running; otherwise ask the audio to resume. Frames restart
    /// with the next pointer sample.
    pub fn toggle(&mut self) {
        if self.scheduler.is_running() {
            self.stop();
        } else {
            self.ensure_playing();
        }
    }

    fn ensure_playing(&mut self) {
        if !self.audio.is_paused() {
            return;
        }
        if let Err(e) = self.audio.request_play() {
            log::error!("[audio] {e}; retrying on next gesture");
        }
    }
}
