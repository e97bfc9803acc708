//! Hatching variants.
//!
//! The fixed variant draws lines from [`CROSSHATCH_TABLE`] in order, so a
//! darker block always contains every line of a lighter one. The random
//! variant draws slanted lines across the block from random offsets.
use super::ShapeContext;
use crate::document::{Path, Primitive};
use rand::{Rng, RngCore};

const THIRD: f32 = 1.0 / 3.0;
const TWO_THIRDS: f32 = 2.0 / 3.0;

/// Hatch segments in unit-block coordinates (`(0, 0)` top-left,
/// `(1, 1)` bottom-right), in drawing priority order.
pub const CROSSHATCH_TABLE: [[(f32, f32); 2]; 12] = [
    // corner-to-corner diagonals
    [(0.0, 0.0), (1.0, 1.0)],
    [(1.0, 0.0), (0.0, 1.0)],
    // midlines through opposite edge midpoints
    [(0.5, 0.0), (0.5, 1.0)],
    [(0.0, 0.5), (1.0, 0.5)],
    // diamond joining adjacent edge midpoints
    [(0.5, 0.0), (1.0, 0.5)],
    [(1.0, 0.5), (0.5, 1.0)],
    [(0.5, 1.0), (0.0, 0.5)],
    [(0.0, 0.5), (0.5, 0.0)],
    // third-point crossers
    [(THIRD, 0.0), (THIRD, 1.0)],
    [(TWO_THIRDS, 0.0), (TWO_THIRDS, 1.0)],
    [(0.0, THIRD), (1.0, THIRD)],
    [(0.0, TWO_THIRDS), (1.0, TWO_THIRDS)],
];

pub(super) fn render_fixed(ctx: &ShapeContext, _rng: &mut dyn RngCore) -> Vec<Primitive> {
    let wanted = (ctx.options.max_lines as f32 * ctx.intensity).floor() as usize;
    let count = wanted.min(CROSSHATCH_TABLE.len());
    if count == 0 {
        return Vec::new();
    }

    let g = &ctx.geometry;
    let to_canvas = |(u, v): (f32, f32)| (g.left + u * g.size, g.top + v * g.size);
    let mut path = Path::with_capacity(count * 2);
    for [from, to] in &CROSSHATCH_TABLE[..count] {
        path.segment(to_canvas(*from), to_canvas(*to));
    }
    vec![Primitive::Path(path)]
}

pub(super) fn render_random(ctx: &ShapeContext, rng: &mut dyn RngCore) -> Vec<Primitive> {
    let count = (ctx.options.max_lines as f32 * ctx.intensity).round() as usize;
    if count == 0 {
        return Vec::new();
    }

    let g = &ctx.geometry;
    let mut path = Path::with_capacity(count * 2);
    for _ in 0..count {
        let from_left = rng.gen_bool(0.5);
        let offset = rng.gen_range(0.0..g.size);
        if from_left {
            path.segment((g.left, g.top + offset), (g.right, g.bottom - offset));
        } else {
            path.segment((g.left + offset, g.top), (g.right - offset, g.bottom));
        }
    }
    vec![Primitive::Path(path)]
}

#[cfg(test)]
mod tests {
    use super::super::test_support::ctx;
    use super::*;
    use crate::document::PathCommand;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn segment_count(prims: &[Primitive]) -> usize {
        match prims {
            [] => 0,
            [Primitive::Path(p)] => {
                let moves = p
                    .commands
                    .iter()
                    .filter(|c| matches!(c, PathCommand::MoveTo(_)))
                    .count();
                assert_eq!(moves * 2, p.commands.len(), "each segment is move+line");
                moves
            }
            other => panic!("expected a single path, got {other:?}"),
        }
    }

    #[test]
    fn fixed_count_floors_and_caps() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(segment_count(&render_fixed(&ctx(0.0, 0, 0, 12), &mut rng)), 0);
        assert_eq!(segment_count(&render_fixed(&ctx(0.49, 0, 0, 12), &mut rng)), 5);
        assert_eq!(segment_count(&render_fixed(&ctx(1.0, 0, 0, 12), &mut rng)), 12);
        assert_eq!(segment_count(&render_fixed(&ctx(4.0, 0, 0, 12), &mut rng)), 12);
    }

    #[test]
    fn fixed_lines_follow_table_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let prims = render_fixed(&ctx(0.25, 12, 24, 12), &mut rng);
        let Primitive::Path(path) = &prims[0] else {
            panic!("expected path");
        };
        let pts: Vec<_> = path.commands.iter().map(|c| (c.end_point().x, c.end_point().y)).collect();
        assert_eq!(
            pts,
            vec![
                (12.0, 24.0),
                (24.0, 36.0),
                (24.0, 24.0),
                (12.0, 36.0),
                (18.0, 24.0),
                (18.0, 36.0),
            ]
        );
    }

    #[test]
    fn fixed_lines_stay_inside_block() {
        let mut rng = StdRng::seed_from_u64(1);
        let prims = render_fixed(&ctx(1.0, 9, 9, 9), &mut rng);
        let Primitive::Path(path) = &prims[0] else {
            panic!("expected path");
        };
        for c in &path.commands {
            let p = c.end_point();
            assert!((9.0..=18.0).contains(&p.x) && (9.0..=18.0).contains(&p.y));
        }
    }

    #[test]
    fn random_count_rounds() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(segment_count(&render_random(&ctx(0.04, 0, 0, 8), &mut rng)), 0);
        assert_eq!(segment_count(&render_random(&ctx(0.5, 0, 0, 8), &mut rng)), 6);
        assert_eq!(segment_count(&render_random(&ctx(2.0, 0, 0, 8), &mut rng)), 24);
    }

    #[test]
    fn random_lines_are_mirrored_across_the_block() {
        let mut rng = StdRng::seed_from_u64(42);
        let prims = render_random(&ctx(1.0, 8, 8, 8), &mut rng);
        let Primitive::Path(path) = &prims[0] else {
            panic!("expected path");
        };
        for pair in path.commands.chunks(2) {
            let (a, b) = (pair[0].end_point(), pair[1].end_point());
            if a.x == 8.0 {
                // from the left edge: (left, top + o) -> (right, bottom - o)
                assert_eq!(b.x, 16.0);
                assert!(((a.y - 8.0) - (16.0 - b.y)).abs() < 1e-4);
            } else {
                assert_eq!(a.y, 8.0);
                assert_eq!(b.y, 16.0);
                assert!(((a.x - 8.0) - (16.0 - b.x)).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn random_output_replays_with_same_seed() {
        let c = ctx(0.8, 0, 0, 16);
        let a = render_random(&c, &mut StdRng::seed_from_u64(99));
        let b = render_random(&c, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
