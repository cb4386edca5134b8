//! One frame of entity motion: field -> separation -> pointer -> integrate.

use crate::config::{DynamicsKind, EngineConfig, RepulsionParams};
use crate::entity::{Entity, Transform};
use crate::field::MotionField;
use crate::integrator::{dynamics_for, Dynamics};
use crate::repulsor::repulsion;
use crate::session::Session;
use glam::Vec2;

pub struct MotionEngine {
    entities: Vec<Entity>,
    field: MotionField,
    dynamics: Box<dyn Dynamics>,
    repulsion: RepulsionParams,
    transition_base_secs: f32,
    candidates: Vec<Vec2>,
    transforms: Vec<Transform>,
}

impl MotionEngine {
    /// Entities are created at their anchors, in the given order.
    pub fn new(anchors: &[Vec2], config: &EngineConfig) -> Self {
        let entities: Vec<Entity> = anchors.iter().copied().map(Entity::new).collect();
        let n = entities.len();
        Self {
            entities,
            field: MotionField::new(config.field.clone()),
            dynamics: dynamics_for(config),
            repulsion: config.repulsion.clone(),
            transition_base_secs: config.integrator.transition_base_secs,
            candidates: vec![Vec2::ZERO; n],
            transforms: vec![Transform::default(); n],
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn dynamics_kind(&self) -> DynamicsKind {
        self.dynamics.kind()
    }

    /// Transforms produced by the last [`MotionEngine::step`].
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Advance every entity by one frame at motion time `t`.
    ///
    /// All transforms are rebuilt before the slice is handed back, so a host
    /// never observes a half-updated frame.
    pub fn step(&mut self, session: &Session, t: f64) -> &[Transform] {
        let n = self.entities.len();
        let viewport = session.viewport;
        let energy = session.energy;
        let rate = session.playback_rate;

        for (i, e) in self.entities.iter().enumerate() {
            self.candidates[i] = self.field.candidate(i, n, e.anchor(), t, energy, viewport);
        }

        self.dynamics
            .separate(&mut self.entities, &mut self.candidates);

        let strength = self.repulsion.strength * rate;
        for (e, c) in self.entities.iter_mut().zip(self.candidates.iter_mut()) {
            let push = repulsion(session.pointer, *c, self.repulsion.radius, strength);
            self.dynamics.repel(e, c, push);
        }

        let transition_secs = self.transition_base_secs / rate.max(f32::EPSILON);
        for (i, e) in self.entities.iter_mut().enumerate() {
            self.dynamics.integrate(e, self.candidates[i], rate, viewport);
            self.transforms[i] = Transform {
                translate: e.current - e.anchor(),
                rotation_deg: self.field.rotation_deg(i, t, energy),
                scale: self.field.scale(i, t, energy),
                transition_secs,
            };
        }
        &self.transforms
    }
}
