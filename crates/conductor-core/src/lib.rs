pub mod collision;
pub mod conductor;
pub mod config;
pub mod constants;
pub mod engine;
pub mod entity;
pub mod error;
pub mod field;
pub mod input;
pub mod integrator;
pub mod layout;
pub mod repulsor;
pub mod scheduler;
pub mod session;
pub mod trail;

pub use conductor::*;
pub use config::*;
pub use constants::*;
pub use engine::MotionEngine;
pub use entity::*;
pub use error::*;
pub use field::MotionField;
pub use input::*;
pub use integrator::{dynamics_for, Dynamics, Impulse, Smoothing};
pub use layout::grid_anchors;
pub use repulsor::repulsion;
pub use scheduler::*;
pub use session::*;
pub use trail::*;
