//! Recorded pointer positions and their fading overlay.

use crate::entity::Viewport;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub position: Vec2,
    pub time_ms: f64,
}

impl TrailPoint {
    #[inline]
    pub fn age(&self, now_ms: f64) -> f64 {
        now_ms - self.time_ms
    }

    /// Linear fade from 1 at creation to 0 at `lifetime_ms`.
    #[inline]
    pub fn opacity(&self, now_ms: f64, lifetime_ms: f64) -> f32 {
        (1.0 - self.age(now_ms) / lifetime_ms).clamp(0.0, 1.0) as f32
    }
}

/// Time-windowed pointer history, oldest first.
#[derive(Clone, Debug)]
pub struct TrailStore {
    points: Vec<TrailPoint>,
    lifetime_ms: f64,
}

impl TrailStore {
    pub fn new(lifetime_ms: f64) -> Self {
        Self {
            points: Vec::new(),
            lifetime_ms,
        }
    }

    pub fn lifetime_ms(&self) -> f64 {
        self.lifetime_ms
    }

    pub fn record(&mut self, position: Vec2, time_ms: f64) {
        self.points.push(TrailPoint { position, time_ms });
    }

    /// Remove every point with `now - timestamp >= lifetime`. Returns the
    /// number removed.
    pub fn purge_expired(&mut self, now_ms: f64) -> usize {
        let before = self.points.len();
        let lifetime = self.lifetime_ms;
        self.points.retain(|p| p.age(now_ms) < lifetime);
        before - self.points.len()
    }

    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Drawing surface the trail paints onto, sized to the viewport.
pub trait TrailSurface {
    /// Resync the backing size after a viewport change.
    fn resize(&mut self, viewport: Viewport);
    fn clear(&mut self);
    fn fill_disk(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32);
}

/// Paints a [`TrailStore`]. Fade and expiry follow the store's lifetime.
#[derive(Clone, Debug)]
pub struct TrailRenderer {
    radius: f32,
    color: [u8; 3],
}

impl TrailRenderer {
    pub fn new(radius: f32, color: [u8; 3]) -> Self {
        Self { radius, color }
    }

    /// Clear, purge, then paint what remains. Runs every frame, even with no
    /// points, so the surface never keeps stale pixels.
    pub fn render<S: TrailSurface + ?Sized>(
        &self,
        store: &mut TrailStore,
        surface: &mut S,
        now_ms: f64,
    ) {
        surface.clear();
        store.purge_expired(now_ms);
        let lifetime = store.lifetime_ms();
        for p in store.points() {
            let alpha = p.opacity(now_ms, lifetime);
            surface.fill_disk(p.position, self.radius, self.color, alpha);
        }
    }
}
