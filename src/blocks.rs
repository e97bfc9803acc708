//! Block partitioning of the source raster.
//!
//! [`BlockIterator`] walks the image in row-major order, yielding the
//! top-left corner of every `block_size × block_size` tile. Trailing tiles
//! on the right and bottom edges may extend past the image; clipping is the
//! sampler's job, not the iterator's.
use crate::error::ConvertError;
use crate::image::ImageView;
use crate::intensity::IntensityCalculator;
use nalgebra::Point2;
use serde::Serialize;

/// Top-left pixel coordinate of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BlockOrigin {
    pub x: usize,
    pub y: usize,
}

/// Lazy row-major enumeration of block origins. Clone to restart.
#[derive(Clone, Debug)]
pub struct BlockIterator {
    width: usize,
    height: usize,
    block_size: usize,
    x: usize,
    y: usize,
}

impl BlockIterator {
    pub fn new(width: usize, height: usize, block_size: usize) -> Result<Self, ConvertError> {
        if block_size == 0 {
            return Err(ConvertError::invalid("block_size", "must be positive"));
        }
        Ok(Self {
            width,
            height,
            block_size,
            x: 0,
            y: 0,
        })
    }

    /// Iterator over the blocks covering `image`.
    pub fn for_image<I: ImageView>(image: &I, block_size: usize) -> Result<Self, ConvertError> {
        Self::new(image.width(), image.height(), block_size)
    }

    /// Number of blocks in a full pass (columns × rows).
    pub fn total(&self) -> usize {
        self.width.div_ceil(self.block_size) * self.height.div_ceil(self.block_size)
    }
}

impl Iterator for BlockIterator {
    type Item = BlockOrigin;

    fn next(&mut self) -> Option<BlockOrigin> {
        // A zero-width image has no columns, so nothing is ever emitted.
        if self.y >= self.height || self.width == 0 {
            return None;
        }
        let origin = BlockOrigin {
            x: self.x,
            y: self.y,
        };
        self.x += self.block_size;
        if self.x >= self.width {
            self.x = 0;
            self.y += self.block_size;
        }
        Some(origin)
    }
}

/// Unclipped box of a block in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockGeometry {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub size: f32,
}

impl BlockGeometry {
    pub fn new(origin: BlockOrigin, block_size: usize) -> Self {
        let left = origin.x as f32;
        let top = origin.y as f32;
        let size = block_size as f32;
        Self {
            left,
            top,
            right: left + size,
            bottom: top + size,
            size,
        }
    }

    #[inline]
    pub fn half(&self) -> f32 {
        self.size * 0.5
    }

    #[inline]
    pub fn midpoint(&self) -> Point2<f32> {
        Point2::new(self.left + self.half(), self.top + self.half())
    }
}

/// A block together with its darkness, computed once at construction.
#[derive(Clone, Copy, Debug)]
pub struct Block {
    origin: BlockOrigin,
    block_size: usize,
    intensity: f32,
}

impl Block {
    pub fn sample<I>(
        image: &I,
        origin: BlockOrigin,
        block_size: usize,
        calc: &IntensityCalculator,
    ) -> Self
    where
        I: ImageView<Pixel = u8>,
    {
        let intensity = calc.intensity(image, origin, block_size);
        Self {
            origin,
            block_size,
            intensity,
        }
    }

    pub fn origin(&self) -> BlockOrigin {
        self.origin
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn geometry(&self) -> BlockGeometry {
        BlockGeometry::new(self.origin, self.block_size)
    }
}
