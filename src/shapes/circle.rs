use super::ShapeContext;
use crate::document::Primitive;
use rand::RngCore;

/// One filled circle at the block midpoint, radius capped at half the block.
pub(super) fn render(ctx: &ShapeContext, _rng: &mut dyn RngCore) -> Vec<Primitive> {
    let half = ctx.geometry.half();
    let radius = (half * ctx.intensity).min(half);
    vec![Primitive::Circle {
        center: ctx.geometry.midpoint(),
        radius,
    }]
}

#[cfg(test)]
mod tests {
    use super::super::test_support::ctx;
    use super::*;
    use nalgebra::Point2;
    use rand::rngs::mock::StepRng;

    fn radius_of(prims: &[Primitive]) -> f32 {
        match prims {
            [Primitive::Circle { radius, .. }] => *radius,
            other => panic!("expected one circle, got {other:?}"),
        }
    }

    #[test]
    fn radius_scales_with_intensity() {
        let mut rng = StepRng::new(0, 1);
        assert_eq!(radius_of(&render(&ctx(0.5, 0, 0, 8), &mut rng)), 2.0);
        assert_eq!(radius_of(&render(&ctx(0.0, 0, 0, 8), &mut rng)), 0.0);
    }

    #[test]
    fn overdrive_is_capped_at_half_block() {
        let mut rng = StepRng::new(0, 1);
        assert_eq!(radius_of(&render(&ctx(3.7, 0, 0, 10), &mut rng)), 5.0);
    }

    #[test]
    fn centered_on_block_midpoint() {
        let mut rng = StepRng::new(0, 1);
        match &render(&ctx(1.0, 8, 16, 8), &mut rng)[..] {
            [Primitive::Circle { center, .. }] => assert_eq!(*center, Point2::new(12.0, 20.0)),
            other => panic!("unexpected {other:?}"),
        }
    }
}
