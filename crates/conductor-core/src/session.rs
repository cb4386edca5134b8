//! Process-wide state for one animation session.
//!
//! Everything the engine reads each frame (pointer, tempo, energy) lives
//! here and is passed explicitly to the components that need it.

use crate::entity::Viewport;
use glam::Vec2;

/// A pointer-move sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub time_ms: f64,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, time_ms: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            time_ms,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    /// Energy high, hint hidden.
    Active,
    /// Energy low, hint shown (after the first sample).
    Idle,
}

#[derive(Clone, Debug)]
pub struct Session {
    /// Last known pointer position; `None` until the first sample.
    pub pointer: Option<Vec2>,
    pub last_sample: Option<PointerSample>,
    pub playback_rate: f32,
    /// Audio volume in `[0, 1]`; scales every oscillation.
    pub energy: f32,
    pub activity: Activity,
    pub hint_visible: bool,
    pub viewport: Viewport,
}

impl Session {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pointer: None,
            last_sample: None,
            playback_rate: 1.0,
            energy: 0.0,
            activity: Activity::Idle,
            hint_visible: false,
            viewport,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.activity == Activity::Active
    }
}
