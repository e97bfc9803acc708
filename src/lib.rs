#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod converter;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod image;
pub mod shapes;

// Building blocks of the pipeline, exposed for tools and tests.
pub mod blocks;
pub mod config;
pub mod filter;
pub mod intensity;

// --- High-level re-exports -------------------------------------------------

pub use crate::converter::{convert, convert_many, CancelToken, ConvertParams, Converter};
pub use crate::diagnostics::ConversionReport;
pub use crate::document::{Document, DocumentAssembler, OutputSink, Primitive};
pub use crate::error::ConvertError;
pub use crate::shapes::ShapeKind;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use halftone_vector::prelude::*;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// # fn main() -> Result<(), ConvertError> {
/// let (w, h) = (64usize, 48usize);
/// let gray = vec![96u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let converter = Converter::new(ConvertParams::new(ShapeKind::Circle, 8))?;
/// let mut rng = StdRng::seed_from_u64(0);
/// let (svg, report) = converter.run(&img, &mut rng, SvgWriter::default())?;
/// println!("drawn={} bytes={}", report.blocks_drawn, svg.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::document::svg::{SvgStyle, SvgWriter};
    pub use crate::image::ImageU8;
    pub use crate::{ConvertError, ConvertParams, Converter, Document, ShapeKind};
}
