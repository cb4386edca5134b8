//! Separation + integration strategies.
//!
//! Both models share the motion field and the pointer repulsor; they differ
//! in whether pushes move the target directly or feed a velocity, and in
//! how the persistent position follows the target.

use crate::collision::pair_pushes;
use crate::config::{DynamicsKind, EngineConfig, IntegratorParams, SeparationParams};
use crate::entity::{Entity, Viewport};
use glam::Vec2;

pub trait Dynamics {
    /// Resolve overlaps between this frame's candidates.
    fn separate(&self, entities: &mut [Entity], candidates: &mut [Vec2]);
    /// Apply a pointer push computed against `candidate`.
    fn repel(&self, entity: &mut Entity, candidate: &mut Vec2, push: Vec2);
    /// Advance `entity.current` toward `candidate`, keeping it inside the
    /// viewport margin.
    fn integrate(&self, entity: &mut Entity, candidate: Vec2, rate: f32, viewport: Viewport);
    fn kind(&self) -> DynamicsKind;
}

pub fn dynamics_for(config: &EngineConfig) -> Box<dyn Dynamics> {
    let margin = config.field.bounds_margin;
    match config.dynamics {
        DynamicsKind::Smoothing => Box::new(Smoothing::new(
            config.separation.clone(),
            &config.integrator,
            margin,
        )),
        DynamicsKind::Impulse => Box::new(Impulse::new(
            config.separation.clone(),
            &config.integrator,
            config.repulsion.impulse,
            margin,
        )),
    }
}

fn previous_positions(entities: &[Entity]) -> Vec<Vec2> {
    entities.iter().map(|e| e.current).collect()
}

/// Push candidates apart, then ease `current` toward them.
#[derive(Clone, Debug)]
pub struct Smoothing {
    separation: SeparationParams,
    factor: f32,
    margin: f32,
}

impl Smoothing {
    pub fn new(separation: SeparationParams, params: &IntegratorParams, margin: f32) -> Self {
        Self {
            separation,
            factor: params.smoothing,
            margin,
        }
    }
}

impl Dynamics for Smoothing {
    fn separate(&self, entities: &mut [Entity], candidates: &mut [Vec2]) {
        // split so the pair as a whole closes `push` of the overlap
        let per_member = self.separation.push * 0.5;
        let pushes = pair_pushes(
            candidates,
            &previous_positions(entities),
            self.separation.min_distance,
            per_member,
        );
        for (c, p) in candidates.iter_mut().zip(pushes) {
            *c += p;
        }
    }

    fn repel(&self, _entity: &mut Entity, candidate: &mut Vec2, push: Vec2) {
        *candidate += push;
    }

    fn integrate(&self, entity: &mut Entity, candidate: Vec2, rate: f32, viewport: Viewport) {
        let alpha = (self.factor * rate).clamp(0.0, 1.0);
        let next = entity.current + (candidate - entity.current) * alpha;
        entity.current = viewport.clamp(next, self.margin);
    }

    fn kind(&self) -> DynamicsKind {
        DynamicsKind::Smoothing
    }
}

/// Pushes accumulate into velocity, which is damped every frame and
/// reflected (with loss) at the viewport margin.
#[derive(Clone, Debug)]
pub struct Impulse {
    separation: SeparationParams,
    pointer_impulse: f32,
    damping: f32,
    bounce_loss: f32,
    margin: f32,
}

impl Impulse {
    pub fn new(
        separation: SeparationParams,
        params: &IntegratorParams,
        pointer_impulse: f32,
        margin: f32,
    ) -> Self {
        Self {
            separation,
            pointer_impulse,
            damping: params.damping,
            bounce_loss: params.bounce_loss,
            margin,
        }
    }

    fn bounce_axis(&self, pos: &mut f32, vel: &mut f32, lo: f32, hi: f32) {
        if *pos < lo {
            *pos = lo;
            *vel = vel.abs() * self.bounce_loss;
        } else if *pos > hi {
            *pos = hi;
            *vel = -vel.abs() * self.bounce_loss;
        }
    }
}

impl Dynamics for Impulse {
    fn separate(&self, entities: &mut [Entity], _candidates: &mut [Vec2]) {
        let positions = previous_positions(entities);
        let pushes = pair_pushes(
            &positions,
            &positions,
            self.separation.min_distance,
            self.separation.force,
        );
        for (e, p) in entities.iter_mut().zip(pushes) {
            e.velocity += p;
        }
    }

    fn repel(&self, entity: &mut Entity, _candidate: &mut Vec2, push: Vec2) {
        entity.velocity += push * self.pointer_impulse;
    }

    fn integrate(&self, entity: &mut Entity, candidate: Vec2, _rate: f32, viewport: Viewport) {
        let mut pos = candidate + entity.velocity;
        entity.velocity *= self.damping;

        let (x0, x1) = Viewport::axis_bounds(viewport.width, self.margin);
        let (y0, y1) = Viewport::axis_bounds(viewport.height, self.margin);
        self.bounce_axis(&mut pos.x, &mut entity.velocity.x, x0, x1);
        self.bounce_axis(&mut pos.y, &mut entity.velocity.y, y0, y1);
        entity.current = pos;
    }

    fn kind(&self) -> DynamicsKind {
        DynamicsKind::Impulse
    }
}
