//! Tuning parameters, grouped per component.
//!
//! Every struct defaults to the values in [`crate::constants`]. Hosts that
//! want different behavior build an [`EngineConfig`], tweak fields and hand
//! it to [`crate::Conductor::new`], which runs [`EngineConfig::validate`].

use crate::constants::*;
use crate::error::ConfigError;

/// Three-segment mapping from pointer speed (px/ms) to playback rate.
#[derive(Clone, Debug, PartialEq)]
pub struct RateCurve {
    pub low_speed: f32,
    pub high_speed: f32,
    pub min_rate: f32,
    pub max_rate: f32,
    pub mid_slope: f32,
    pub tail_slope: f32,
}

impl Default for RateCurve {
    fn default() -> Self {
        Self {
            low_speed: RATE_LOW_SPEED,
            high_speed: RATE_HIGH_SPEED,
            min_rate: RATE_MIN,
            max_rate: RATE_MAX,
            mid_slope: RATE_MID_SLOPE,
            tail_slope: RATE_TAIL_SLOPE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityParams {
    pub active_energy: f32,
    pub idle_energy: f32,
    pub idle_delay_ms: f64,
}

impl Default for ActivityParams {
    fn default() -> Self {
        Self {
            active_energy: ENERGY_ACTIVE,
            idle_energy: ENERGY_IDLE,
            idle_delay_ms: IDLE_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailParams {
    pub lifetime_ms: f64,
    pub radius: f32,
    pub color: [u8; 3],
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            lifetime_ms: TRAIL_LIFETIME_MS,
            radius: TRAIL_POINT_RADIUS,
            color: TRAIL_COLOR_RGB,
        }
    }
}

/// Where an entity's oscillation is centered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CenterMode {
    /// Oscillate around the entity's own anchor.
    Anchor,
    /// Spread entities on a circle around the viewport center.
    #[default]
    Dispersed,
}

/// Per-axis `base + index * step` progression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progression {
    pub base: f32,
    pub step: f32,
}

impl Progression {
    pub const fn new(base: f32, step: f32) -> Self {
        Self { base, step }
    }

    #[inline]
    pub fn at(&self, index: usize) -> f32 {
        self.base + index as f32 * self.step
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub center: CenterMode,
    pub safe_margin: f32,
    pub bounds_margin: f32,
    pub dispersion_radius: f32,
    pub phase_step: f32,
    pub freq_x: Progression,
    pub freq_y: Progression,
    pub secondary_x: f32,
    pub secondary_y: f32,
    pub range_x: Progression,
    pub range_y: Progression,
    pub weight_x: [f32; 2],
    pub weight_y: [f32; 2],
    pub rotation_deg: Progression,
    pub scale_base: f32,
    pub scale_variation: f32,
    pub scale_freq_ratio: f32,
    pub scale_min: f32,
    pub scale_max: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            center: CenterMode::default(),
            safe_margin: SAFE_MARGIN,
            bounds_margin: BOUNDS_MARGIN,
            dispersion_radius: DISPERSION_RADIUS_FRACTION,
            phase_step: PHASE_STEP,
            freq_x: Progression::new(FREQ_X_BASE, FREQ_X_STEP),
            freq_y: Progression::new(FREQ_Y_BASE, FREQ_Y_STEP),
            secondary_x: SECONDARY_X_RATIO,
            secondary_y: SECONDARY_Y_RATIO,
            range_x: Progression::new(RANGE_X_BASE, RANGE_X_STEP),
            range_y: Progression::new(RANGE_Y_BASE, RANGE_Y_STEP),
            weight_x: WEIGHT_X,
            weight_y: WEIGHT_Y,
            rotation_deg: Progression::new(ROTATION_BASE_DEG, ROTATION_STEP_DEG),
            scale_base: SCALE_BASE,
            scale_variation: SCALE_VARIATION,
            scale_freq_ratio: SCALE_FREQ_RATIO,
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeparationParams {
    pub min_distance: f32,
    /// Positional variant: fraction of the overlap removed per frame.
    pub push: f32,
    /// Impulse variant: velocity added per pixel of overlap.
    pub force: f32,
}

impl Default for SeparationParams {
    fn default() -> Self {
        Self {
            min_distance: MIN_SEPARATION,
            push: SEPARATION_PUSH,
            force: SEPARATION_FORCE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RepulsionParams {
    pub radius: f32,
    pub strength: f32,
    pub impulse: f32,
}

impl Default for RepulsionParams {
    fn default() -> Self {
        Self {
            radius: POINTER_RADIUS,
            strength: POINTER_STRENGTH,
            impulse: POINTER_IMPULSE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntegratorParams {
    pub smoothing: f32,
    pub damping: f32,
    pub bounce_loss: f32,
    pub transition_base_secs: f32,
}

impl Default for IntegratorParams {
    fn default() -> Self {
        Self {
            smoothing: SMOOTHING_FACTOR,
            damping: VELOCITY_DAMPING,
            bounce_loss: BOUNCE_LOSS,
            transition_base_secs: TRANSITION_BASE_SECS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParams {
    pub columns: usize,
    pub fill: f32,
    pub jitter: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            columns: LAYOUT_COLUMNS,
            fill: LAYOUT_FILL,
            jitter: LAYOUT_JITTER,
        }
    }
}

/// Which separation + integration model drives the entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DynamicsKind {
    /// Positional push-apart followed by exponential smoothing.
    #[default]
    Smoothing,
    /// Velocity impulses, multiplicative damping and reflective bounds.
    Impulse,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub rate: RateCurve,
    pub activity: ActivityParams,
    pub trail: TrailParams,
    pub field: FieldParams,
    pub separation: SeparationParams,
    pub repulsion: RepulsionParams,
    pub integrator: IntegratorParams,
    pub layout: LayoutParams,
    pub dynamics: DynamicsKind,
    pub motion_time_scale: f64,
    pub max_frame_dt_secs: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rate: RateCurve::default(),
            activity: ActivityParams::default(),
            trail: TrailParams::default(),
            field: FieldParams::default(),
            separation: SeparationParams::default(),
            repulsion: RepulsionParams::default(),
            integrator: IntegratorParams::default(),
            layout: LayoutParams::default(),
            dynamics: DynamicsKind::default(),
            motion_time_scale: MOTION_TIME_SCALE,
            max_frame_dt_secs: MAX_FRAME_DT_SECS,
        }
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value < 0.0 || value.is_nan() {
        return Err(ConfigError::Negative { name, value });
    }
    Ok(())
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value <= 0.0 || value.is_nan() {
        return Err(ConfigError::NonPositive { name, value });
    }
    Ok(())
}

fn within(
    name: &'static str,
    range: &'static str,
    value: f32,
    ok: impl Fn(f32) -> bool,
) -> Result<(), ConfigError> {
    if !ok(value) {
        return Err(ConfigError::OutOfRange { name, range, value });
    }
    Ok(())
}

impl RateCurve {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_rate > self.max_rate {
            return Err(ConfigError::RateRange {
                min: self.min_rate,
                max: self.max_rate,
            });
        }
        if self.low_speed >= self.high_speed {
            return Err(ConfigError::Thresholds {
                low: self.low_speed,
                high: self.high_speed,
            });
        }
        positive("min_rate", self.min_rate as f64)?;
        non_negative("low_speed", self.low_speed)?;
        non_negative("mid_slope", self.mid_slope)?;
        non_negative("tail_slope", self.tail_slope)
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rate.validate()?;

        let a = &self.activity;
        within("idle_energy", "[0, 1]", a.idle_energy, |v| (0.0..=1.0).contains(&v))?;
        within("active_energy", "[0, 1]", a.active_energy, |v| (0.0..=1.0).contains(&v))?;
        positive("idle_delay_ms", a.idle_delay_ms)?;

        positive("trail lifetime_ms", self.trail.lifetime_ms)?;
        positive("trail radius", self.trail.radius as f64)?;

        let f = &self.field;
        non_negative("bounds_margin", f.bounds_margin)?;
        non_negative("safe_margin", f.safe_margin)?;
        positive("scale_min", f.scale_min as f64)?;
        if f.scale_min > f.scale_max {
            return Err(ConfigError::OutOfRange {
                name: "scale_min",
                range: "[0, scale_max]",
                value: f.scale_min,
            });
        }

        non_negative("min_distance", self.separation.min_distance)?;
        non_negative("push", self.separation.push)?;
        non_negative("force", self.separation.force)?;
        non_negative("pointer radius", self.repulsion.radius)?;
        non_negative("pointer strength", self.repulsion.strength)?;

        let i = &self.integrator;
        within("smoothing", "(0, 1]", i.smoothing, |v| v > 0.0 && v <= 1.0)?;
        within("damping", "[0, 1)", i.damping, |v| (0.0..1.0).contains(&v))?;
        within("bounce_loss", "[0, 1]", i.bounce_loss, |v| (0.0..=1.0).contains(&v))?;
        positive("transition_base_secs", i.transition_base_secs as f64)?;

        if self.layout.columns == 0 {
            return Err(ConfigError::NonPositive {
                name: "layout columns",
                value: 0.0,
            });
        }
        positive("motion_time_scale", self.motion_time_scale)?;
        positive("max_frame_dt_secs", self.max_frame_dt_secs)
    }
}
