use super::{stroke_count, ShapeContext};
use crate::document::{Path, Primitive};
use rand::RngCore;

/// One continuous path bouncing between the left and right edges.
///
/// Starts at the top-left corner; leg `k` ends at `top + k * size / lines`.
/// The last leg (or any leg that would reach or cross the bottom edge) is
/// cut at the edge, so the path always ends with `y == bottom`. Leg ends
/// are computed from `k`, never accumulated; at most `lines` legs are drawn.
pub(super) fn render(ctx: &ShapeContext, _rng: &mut dyn RngCore) -> Vec<Primitive> {
    let g = &ctx.geometry;
    let lines = stroke_count(ctx.intensity);
    let step = g.size / lines as f32;

    let mut path = Path::with_capacity(lines + 1);
    let (mut x, mut y) = (g.left, g.top);
    path.move_to(x, y);
    for k in 1..=lines {
        let target_x = if k % 2 == 1 { g.right } else { g.left };
        let y_k = g.top + k as f32 * step;
        if k == lines || y_k >= g.bottom {
            let t = ((g.bottom - y) / step).clamp(0.0, 1.0);
            path.line_to(x + (target_x - x) * t, g.bottom);
            break;
        }
        path.line_to(target_x, y_k);
        x = target_x;
        y = y_k;
    }
    vec![Primitive::Path(path)]
}
