use crate::config::LayoutParams;
use crate::entity::Viewport;
use glam::Vec2;
use rand::Rng;

/// Initial anchors: a grid over the central `fill` share of the viewport,
/// row-major, each cell center nudged by up to `jitter / 2` of the cell size.
pub fn grid_anchors<R: Rng + ?Sized>(
    count: usize,
    viewport: Viewport,
    params: &LayoutParams,
    rng: &mut R,
) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let columns = params.columns.max(1);
    let rows = count.div_ceil(columns);

    let grid = Vec2::new(viewport.width, viewport.height) * params.fill;
    let origin = Vec2::new(viewport.width, viewport.height) * (1.0 - params.fill) * 0.5;
    let cell = grid / Vec2::new(columns as f32, rows as f32);

    (0..count)
        .map(|i| {
            let row = (i / columns) as f32;
            let col = (i % columns) as f32;
            let jitter = Vec2::new(
                (rng.gen::<f32>() - 0.5) * cell.x * params.jitter,
                (rng.gen::<f32>() - 0.5) * cell.y * params.jitter,
            );
            origin + Vec2::new(col, row) * cell + cell * 0.5 + jitter
        })
        .collect()
}
