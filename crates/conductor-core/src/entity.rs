use glam::Vec2;
use std::fmt;

/// Visible area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Allowed `[lo, hi]` span on one axis. Collapses to the midpoint when the
    /// axis is narrower than both margins together.
    #[inline]
    pub fn axis_bounds(extent: f32, margin: f32) -> (f32, f32) {
        let extent = extent.max(0.0);
        if extent < margin * 2.0 {
            let mid = extent * 0.5;
            (mid, mid)
        } else {
            (margin, extent - margin)
        }
    }

    #[inline]
    pub fn clamp(&self, p: Vec2, margin: f32) -> Vec2 {
        let (x0, x1) = Self::axis_bounds(self.width, margin);
        let (y0, y1) = Self::axis_bounds(self.height, margin);
        Vec2::new(p.x.clamp(x0, x1), p.y.clamp(y0, y1))
    }

    #[inline]
    pub fn contains(&self, p: Vec2, margin: f32) -> bool {
        let (x0, x1) = Self::axis_bounds(self.width, margin);
        let (y0, y1) = Self::axis_bounds(self.height, margin);
        (x0..=x1).contains(&p.x) && (y0..=y1).contains(&p.y)
    }
}

/// One animated instrument. Identity is its index in the engine's entity list.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    anchor: Vec2,
    pub current: Vec2,
    pub velocity: Vec2,
}

impl Entity {
    pub fn new(anchor: Vec2) -> Self {
        Self {
            anchor,
            current: anchor,
            velocity: Vec2::ZERO,
        }
    }

    /// Setup-time placement; never changes afterwards.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }
}

/// Per-frame visual state of one entity, applied as a unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// `current - anchor`
    pub translate: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
    pub transition_secs: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_deg: 0.0,
            scale: 1.0,
            transition_secs: 0.0,
        }
    }
}

impl Transform {
    /// CSS `transition` value for this frame.
    pub fn transition_css(&self) -> String {
        format!("transform {:.3}s ease-out", self.transition_secs)
    }
}

/// Renders as a CSS `transform` value.
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.4})",
            self.translate.x, self.translate.y, self.rotation_deg, self.scale
        )
    }
}
