//! Per-entity oscillation as a pure function of time, index and energy.
//!
//! `t` is the tempo-coupled motion clock in seconds (see
//! [`crate::scheduler::FrameScheduler`]); it already advances faster or
//! slower with the playback rate, so nothing here multiplies by the rate.

use crate::config::{CenterMode, FieldParams};
use crate::entity::Viewport;
use glam::Vec2;
use std::f32::consts::TAU;

#[inline]
fn wave_sin(t: f64, freq: f32, phase: f32) -> f32 {
    (t * freq as f64 + phase as f64).sin() as f32
}

#[inline]
fn wave_cos(t: f64, freq: f32, phase: f32) -> f32 {
    (t * freq as f64 + phase as f64).cos() as f32
}

#[derive(Clone, Debug)]
pub struct MotionField {
    params: FieldParams,
}

impl MotionField {
    pub fn new(params: FieldParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn phase(&self, index: usize) -> f32 {
        index as f32 * self.params.phase_step
    }

    /// Point the entity oscillates around.
    pub fn center(&self, index: usize, count: usize, anchor: Vec2, viewport: Viewport) -> Vec2 {
        match self.params.center {
            CenterMode::Anchor => anchor,
            CenterMode::Dispersed => {
                let step = TAU / count.max(1) as f32;
                let angle = step * index as f32;
                let radius = viewport.min_side() * self.params.dispersion_radius;
                viewport.center() + Vec2::new(angle.cos(), angle.sin()) * radius
            }
        }
    }

    /// Swing amplitude per axis before energy and weights are applied.
    pub fn range(&self, index: usize, viewport: Viewport) -> Vec2 {
        let p = &self.params;
        let usable_w = (viewport.width - p.safe_margin * 2.0).max(0.0);
        let usable_h = (viewport.height - p.safe_margin * 2.0).max(0.0);
        Vec2::new(usable_w * p.range_x.at(index), usable_h * p.range_y.at(index))
    }

    /// Unclamped target: center plus two sinusoids per axis.
    pub fn offset(&self, index: usize, t: f64, energy: f32, viewport: Viewport) -> Vec2 {
        let p = &self.params;
        let phase = self.phase(index);
        let range = self.range(index, viewport) * energy;
        let fx = p.freq_x.at(index);
        let fy = p.freq_y.at(index);

        let dx = wave_sin(t, fx, phase) * range.x * p.weight_x[0]
            + wave_cos(t, fx * p.secondary_x, phase) * range.x * p.weight_x[1];
        let dy = wave_cos(t, fy, phase) * range.y * p.weight_y[0]
            + wave_sin(t, fy * p.secondary_y, phase) * range.y * p.weight_y[1];
        Vec2::new(dx, dy)
    }

    /// Candidate position for this frame, clamped to the viewport minus the
    /// bounds margin.
    pub fn candidate(
        &self,
        index: usize,
        count: usize,
        anchor: Vec2,
        t: f64,
        energy: f32,
        viewport: Viewport,
    ) -> Vec2 {
        let raw = self.center(index, count, anchor, viewport) + self.offset(index, t, energy, viewport);
        viewport.clamp(raw, self.params.bounds_margin)
    }

    /// Later entities rotate further.
    pub fn rotation_deg(&self, index: usize, t: f64, energy: f32) -> f32 {
        wave_sin(t, 1.0, self.phase(index)) * self.params.rotation_deg.at(index) * energy
    }

    pub fn scale(&self, index: usize, t: f64, energy: f32) -> f32 {
        let p = &self.params;
        let wave = wave_sin(t, p.scale_freq_ratio, self.phase(index));
        let s = p.scale_base + (wave * p.scale_variation + p.scale_variation) * energy;
        s.clamp(p.scale_min, p.scale_max)
    }
}
