//! Shape variants turning a block intensity into vector primitives.
//!
//! Every variant is a plain function of `(intensity, geometry, options, rng)`;
//! [`ShapeKind::renderer`] is the dispatch table. Renderers are only called
//! for blocks that already passed the [`FilterPolicy`](crate::filter::FilterPolicy)
//! and keep no state between blocks. Deterministic variants ignore the
//! random stream.
mod circle;
mod crosshatch;
mod squiggle;
mod zigzag;

pub use self::crosshatch::CROSSHATCH_TABLE;

use crate::blocks::BlockGeometry;
use crate::document::Primitive;
use crate::error::ConvertError;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default upper bound on hatch lines per block.
pub const DEFAULT_MAX_LINES: usize = 12;

/// Strokes per unit intensity for zigzag and squiggle.
const STROKE_DENSITY: f32 = 30.0;
/// Stroke count bounds for zigzag and squiggle.
const MIN_STROKES: f32 = 1.0;
const MAX_STROKES: f32 = 40.0;

/// Rendering strategy selected by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Crosshatch,
    CrosshatchRandom,
    Zigzag,
    Squiggle,
}

/// Signature shared by all renderers.
pub type RenderFn = fn(&ShapeContext, &mut dyn RngCore) -> Vec<Primitive>;

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Circle,
        ShapeKind::Crosshatch,
        ShapeKind::CrosshatchRandom,
        ShapeKind::Zigzag,
        ShapeKind::Squiggle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Crosshatch => "crosshatch",
            ShapeKind::CrosshatchRandom => "crosshatch_random",
            ShapeKind::Zigzag => "zigzag",
            ShapeKind::Squiggle => "squiggle",
        }
    }

    pub fn renderer(self) -> RenderFn {
        match self {
            ShapeKind::Circle => circle::render,
            ShapeKind::Crosshatch => crosshatch::render_fixed,
            ShapeKind::CrosshatchRandom => crosshatch::render_random,
            ShapeKind::Zigzag => zigzag::render,
            ShapeKind::Squiggle => squiggle::render,
        }
    }

    /// Whether the variant draws from the random stream.
    pub fn is_stochastic(self) -> bool {
        matches!(self, ShapeKind::CrosshatchRandom | ShapeKind::Squiggle)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ConvertError;

    /// Case-insensitive; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == key)
            .ok_or_else(|| ConvertError::UnsupportedShape(s.to_string()))
    }
}

/// Tunables shared by the line-based variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeOptions {
    /// Lines drawn at intensity 1.0 by the crosshatch variants.
    pub max_lines: usize,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

/// Inputs of a single render call.
#[derive(Clone, Copy, Debug)]
pub struct ShapeContext {
    pub intensity: f32,
    pub geometry: BlockGeometry,
    pub options: ShapeOptions,
}

/// `clamp(round(30 * intensity), 1, 40)`.
pub(crate) fn stroke_count(intensity: f32) -> usize {
    (STROKE_DENSITY * intensity)
        .round()
        .clamp(MIN_STROKES, MAX_STROKES) as usize
}
