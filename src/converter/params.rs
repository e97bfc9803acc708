//! Parameters of a single conversion.
use crate::error::ConvertError;
use crate::filter::DEFAULT_FILTER_THRESHOLD;
use crate::shapes::{ShapeKind, ShapeOptions, DEFAULT_MAX_LINES};
use serde::{Deserialize, Serialize};

/// Conversion knobs. Missing fields in a config file fall back to defaults.
///
/// - `block_size`: edge length of a block in pixels (> 0).
/// - `alpha`: contrast divisor; values below 1 overdrive dark blocks (> 0).
/// - `filter_threshold`: blocks with intensity `<=` this are skipped (>= 0).
/// - `max_lines`: hatch lines at intensity 1.0 for the crosshatch variants.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertParams {
    pub shape: ShapeKind,
    pub block_size: usize,
    pub alpha: f32,
    pub filter_threshold: f32,
    pub max_lines: usize,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Circle,
            block_size: 8,
            alpha: 1.0,
            filter_threshold: DEFAULT_FILTER_THRESHOLD,
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

impl ConvertParams {
    pub fn new(shape: ShapeKind, block_size: usize) -> Self {
        Self {
            shape,
            block_size,
            ..Default::default()
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_filter_threshold(mut self, threshold: f32) -> Self {
        self.filter_threshold = threshold;
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn shape_options(&self) -> ShapeOptions {
        ShapeOptions {
            max_lines: self.max_lines,
        }
    }

    /// Reject values the pipeline cannot honour.
    ///
    /// `alpha` is validated strictly here even though the intensity
    /// calculator would floor it; callers get an error instead of a silent
    /// change of contrast.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.block_size == 0 {
            return Err(ConvertError::invalid("block_size", "must be positive"));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(ConvertError::invalid(
                "alpha",
                format!("expected a finite value > 0, got {}", self.alpha),
            ));
        }
        if !self.filter_threshold.is_finite() || self.filter_threshold < 0.0 {
            return Err(ConvertError::invalid(
                "filter_threshold",
                format!("expected a finite value >= 0, got {}", self.filter_threshold),
            ));
        }
        Ok(())
    }
}
