//! Per-block darkness.
//!
//! `intensity = (255 - mean) / (255 * alpha)` over the in-bounds pixels of a
//! block. The value is left unclamped: `alpha < 1` overdrives it past `1.0`
//! and each shape caps the overdrive in its own way.
use crate::blocks::BlockOrigin;
use crate::image::ImageView;

/// Smallest alpha accepted by the calculator; lower values are floored.
pub const MIN_ALPHA: f32 = 0.001;

/// Running sum over the clipped pixel window of one block.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SampleAccumulator {
    sum: u64,
    count: u64,
}

impl SampleAccumulator {
    #[inline]
    pub(crate) fn push_row(&mut self, row: &[u8]) {
        self.sum += row.iter().map(|&v| v as u64).sum::<u64>();
        self.count += row.len() as u64;
    }

    pub(crate) fn count(&self) -> u64 {
        self.count
    }

    pub(crate) fn mean(&self) -> Option<f32> {
        (self.count > 0).then(|| (self.sum as f64 / self.count as f64) as f32)
    }
}

/// Maps block averages to intensities for a fixed alpha.
#[derive(Clone, Copy, Debug)]
pub struct IntensityCalculator {
    alpha: f32,
}

impl IntensityCalculator {
    /// `alpha` below [`MIN_ALPHA`] (including zero) is floored.
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.max(MIN_ALPHA),
        }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Mean gray value of the in-bounds part of the block, `None` when the
    /// block lies entirely outside the image.
    ///
    /// Cost is O(block_size²): every clipped row is summed once.
    pub fn mean_gray<I>(image: &I, origin: BlockOrigin, block_size: usize) -> Option<f32>
    where
        I: ImageView<Pixel = u8>,
    {
        let x_end = (origin.x + block_size).min(image.width());
        let y_end = (origin.y + block_size).min(image.height());
        let mut acc = SampleAccumulator::default();
        if origin.x < x_end {
            for y in origin.y..y_end {
                acc.push_row(&image.row(y)[origin.x..x_end]);
            }
        }
        debug_assert!(acc.count() <= block_size.saturating_mul(block_size) as u64);
        acc.mean()
    }

    /// Intensity of a gray average. Never negative.
    #[inline]
    pub fn from_mean(&self, mean: f32) -> f32 {
        ((255.0 - mean) / (255.0 * self.alpha)).max(0.0)
    }

    /// Intensity of a block; zero when no pixel of the block is in bounds.
    pub fn intensity<I>(&self, image: &I, origin: BlockOrigin, block_size: usize) -> f32
    where
        I: ImageView<Pixel = u8>,
    {
        Self::mean_gray(image, origin, block_size)
            .map(|mean| self.from_mean(mean))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageU8;

    fn solid(w: usize, h: usize, v: u8) -> Vec<u8> {
        vec![v; w * h]
    }

    #[test]
    fn black_block_has_unit_intensity() {
        let data = solid(8, 8, 0);
        let img = ImageU8::packed(8, 8, &data);
        let calc = IntensityCalculator::new(1.0);
        let v = calc.intensity(&img, BlockOrigin { x: 0, y: 0 }, 8);
        assert!((v - 1.0).abs() < 1e-6, "got {v}");
    }

    #[test]
    fn white_block_has_zero_intensity() {
        let data = solid(8, 8, 255);
        let img = ImageU8::packed(8, 8, &data);
        let v = IntensityCalculator::new(1.0).intensity(&img, BlockOrigin { x: 0, y: 0 }, 8);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn low_alpha_overdrives_past_one() {
        let calc = IntensityCalculator::new(0.5);
        assert!((calc.from_mean(0.0) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn zero_alpha_is_floored() {
        let calc = IntensityCalculator::new(0.0);
        assert_eq!(calc.alpha(), MIN_ALPHA);
        assert!(calc.from_mean(0.0).is_finite());
    }

    #[test]
    fn darker_mean_is_never_less_intense() {
        let calc = IntensityCalculator::new(0.8);
        let mut prev = calc.from_mean(255.0);
        for mean in (0..=255).rev() {
            let v = calc.from_mean(mean as f32);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn edge_block_samples_only_in_bounds_pixels() {
        // 10x10 image: left 8 columns white, right 2 columns black.
        let mut data = solid(10, 10, 255);
        for y in 0..10 {
            data[y * 10 + 8] = 0;
            data[y * 10 + 9] = 0;
        }
        let img = ImageU8::packed(10, 10, &data);
        let mean = IntensityCalculator::mean_gray(&img, BlockOrigin { x: 8, y: 8 }, 8);
        assert_eq!(mean, Some(0.0));
    }

    #[test]
    fn block_outside_image_is_blank() {
        let data = solid(4, 4, 0);
        let img = ImageU8::packed(4, 4, &data);
        let calc = IntensityCalculator::new(1.0);
        assert_eq!(IntensityCalculator::mean_gray(&img, BlockOrigin { x: 4, y: 0 }, 4), None);
        assert_eq!(calc.intensity(&img, BlockOrigin { x: 0, y: 9 }, 4), 0.0);
    }
}
