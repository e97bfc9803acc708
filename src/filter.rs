//! Significance filter for block intensities.
use crate::error::ConvertError;

/// Default cutoff on the normalized intensity scale. Matches the classic
/// `block_size / 5` circle-radius cutoff (`size/2 * i > size/5` ⇔ `i > 0.4`).
pub const DEFAULT_FILTER_THRESHOLD: f32 = 0.4;

/// Renders a block only when its intensity is strictly above `threshold`.
///
/// The threshold is always a normalized intensity ratio, independent of
/// block size and shape.
#[derive(Clone, Copy, Debug)]
pub struct FilterPolicy {
    pub threshold: f32,
}

impl FilterPolicy {
    pub fn new(threshold: f32) -> Result<Self, ConvertError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConvertError::invalid(
                "filter_threshold",
                format!("expected a finite value >= 0, got {threshold}"),
            ));
        }
        Ok(Self { threshold })
    }

    #[inline]
    pub fn accepts(&self, intensity: f32) -> bool {
        intensity > self.threshold
    }
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FILTER_THRESHOLD,
        }
    }
}
