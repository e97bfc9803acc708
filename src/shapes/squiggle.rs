use super::{stroke_count, ShapeContext};
use crate::blocks::BlockGeometry;
use crate::document::{Path, Primitive};
use rand::{Rng, RngCore};

fn random_point(g: &BlockGeometry, rng: &mut dyn RngCore) -> (f32, f32) {
    (rng.gen_range(g.left..g.right), rng.gen_range(g.top..g.bottom))
}

/// Random scribble: a start point plus `stroke_count` further random points
/// inside the block, joined by smooth quadratic curves.
pub(super) fn render(ctx: &ShapeContext, rng: &mut dyn RngCore) -> Vec<Primitive> {
    let g = &ctx.geometry;
    let segments = stroke_count(ctx.intensity);

    let mut path = Path::with_capacity(segments + 1);
    let (x, y) = random_point(g, rng);
    path.move_to(x, y);
    for _ in 0..segments {
        let (x, y) = random_point(g, rng);
        path.smooth_quad_to(x, y);
    }
    vec![Primitive::Path(path)]
}
