use glam::Vec2;

/// Displacement pushing `target` away from the pointer.
///
/// Zero when the pointer is unknown, outside `radius`, or exactly on the
/// target. Inside the radius the push is the pointer-to-target vector scaled
/// by `(1 - d / radius) * strength`, fading linearly to nothing at the edge.
#[inline]
pub fn repulsion(pointer: Option<Vec2>, target: Vec2, radius: f32, strength: f32) -> Vec2 {
    let Some(pointer) = pointer else {
        return Vec2::ZERO;
    };
    let away = target - pointer;
    let dist = away.length();
    if dist >= radius || dist <= f32::EPSILON {
        return Vec2::ZERO;
    }
    away * (1.0 - dist / radius) * strength
}
