//! Pairwise separation between entities.

use glam::Vec2;

const COINCIDENT_EPS: f32 = 1e-4;

/// Unordered pairs `(i, j)`, `i < j`, closer than `min_distance`.
pub fn overlapping_pairs(positions: &[Vec2], min_distance: f32) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            if positions[i].distance(positions[j]) < min_distance {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

// Unit vector from `b` to `a`. Coincident points fall back to the previous
// frame's layout, then to the x axis.
fn separation_dir(a: Vec2, b: Vec2, prev_a: Option<Vec2>, prev_b: Option<Vec2>) -> Vec2 {
    let delta = a - b;
    let dist = delta.length();
    if dist > COINCIDENT_EPS {
        return delta / dist;
    }
    if let (Some(pa), Some(pb)) = (prev_a, prev_b) {
        let prev = pa - pb;
        if prev.length() > COINCIDENT_EPS {
            return prev.normalize();
        }
    }
    Vec2::X
}

/// Per-entity displacement that pushes every overlapping pair apart.
///
/// Overlap and direction are measured on `positions`; `previous` only breaks
/// ties for coincident pairs. Each pair is visited once and both members
/// receive `overlap * per_member` in opposite directions. Pushes are
/// accumulated before anyone moves, so visiting order cannot bias the
/// outcome.
///
/// Summed pushes from several neighbours can drive one member of a pair
/// toward the other. Any pair that would end up closer than it started has
/// both members' pushes dropped, repeated until no overlapping pair shrinks.
pub fn pair_pushes(
    positions: &[Vec2],
    previous: &[Vec2],
    min_distance: f32,
    per_member: f32,
) -> Vec<Vec2> {
    let pairs = overlapping_pairs(positions, min_distance);
    let mut pushes = vec![Vec2::ZERO; positions.len()];
    for &(i, j) in &pairs {
        let dist = positions[i].distance(positions[j]);
        let dir = separation_dir(
            positions[i],
            positions[j],
            previous.get(i).copied(),
            previous.get(j).copied(),
        );
        let push = dir * (min_distance - dist) * per_member;
        pushes[i] += push;
        pushes[j] -= push;
    }

    loop {
        let shrinking: Vec<(usize, usize)> = pairs
            .iter()
            .copied()
            .filter(|&(i, j)| {
                let before = positions[i].distance(positions[j]);
                let after = (positions[i] + pushes[i]).distance(positions[j] + pushes[j]);
                after < before
            })
            .collect();
        if shrinking.is_empty() {
            break;
        }
        for (i, j) in shrinking {
            pushes[i] = Vec2::ZERO;
            pushes[j] = Vec2::ZERO;
        }
    }
    pushes
}
