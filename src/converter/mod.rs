//! Conversion pipeline: blocks → intensity → filter → shape → document.
//!
//! Typical usage:
//! ```no_run
//! use halftone_vector::converter::{ConvertParams, Converter};
//! use halftone_vector::document::svg::SvgWriter;
//! use halftone_vector::image::ImageU8;
//! use halftone_vector::shapes::ShapeKind;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # fn example(gray: ImageU8) -> Result<(), halftone_vector::ConvertError> {
//! let converter = Converter::new(ConvertParams::new(ShapeKind::Zigzag, 10))?;
//! let mut rng = StdRng::seed_from_u64(7);
//! let (svg, report) = converter.run(&gray, &mut rng, SvgWriter::default())?;
//! println!("{} primitives, {} bytes", report.primitives, svg.len());
//! # Ok(())
//! # }
//! ```
mod batch;
mod cancel;
mod params;

pub use self::batch::convert_many;
pub use self::cancel::CancelToken;
pub use self::params::ConvertParams;

use crate::blocks::{Block, BlockIterator};
use crate::diagnostics::{BlockStats, ConversionReport, TimingBreakdown};
use crate::document::{DocumentAssembler, OutputSink};
use crate::error::ConvertError;
use crate::filter::FilterPolicy;
use crate::image::ImageView;
use crate::intensity::IntensityCalculator;
use crate::shapes::{ShapeContext, ShapeKind};
use log::{debug, warn};
use rand::RngCore;
use std::time::Instant;

/// Converts one image per call. Holds no per-image state, so a single
/// converter can be reused (or shared across threads) freely.
#[derive(Clone, Debug)]
pub struct Converter {
    params: ConvertParams,
    cancel: Option<CancelToken>,
}

impl Converter {
    pub fn new(params: ConvertParams) -> Result<Self, ConvertError> {
        params.validate()?;
        Ok(Self {
            params,
            cancel: None,
        })
    }

    /// Abort with [`ConvertError::Cancelled`] once `token` is set.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Convert `image` into `sink`, returning the sink's handle and a report.
    ///
    /// `rng` feeds the stochastic shapes; pass a seeded generator to replay a
    /// run exactly.
    pub fn run<I, S>(
        &self,
        image: &I,
        rng: &mut dyn RngCore,
        sink: S,
    ) -> Result<(S::Handle, ConversionReport), ConvertError>
    where
        I: ImageView<Pixel = u8>,
        S: OutputSink,
    {
        let params = &self.params;
        let (width, height) = (image.width(), image.height());
        debug!(
            "Converter::run start w={} h={} shape={} block_size={} alpha={} threshold={}",
            width, height, params.shape, params.block_size, params.alpha, params.filter_threshold
        );
        if width == 0 || height == 0 {
            warn!("Converter::run empty image {}x{}", width, height);
        }
        let total_start = Instant::now();

        let blocks = BlockIterator::for_image(image, params.block_size)?;
        let calc = IntensityCalculator::new(params.alpha);
        let filter = FilterPolicy::new(params.filter_threshold)?;
        let render = params.shape.renderer();
        let options = params.shape_options();

        let mut assembler = DocumentAssembler::new(width, height);
        let mut stats = BlockStats::default();

        let render_start = Instant::now();
        for origin in blocks {
            if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                debug!("Converter::run cancelled after {} blocks", stats.total);
                return Err(ConvertError::Cancelled {
                    blocks_done: stats.total,
                });
            }
            let block = Block::sample(image, origin, params.block_size, &calc);
            let intensity = block.intensity();
            if !filter.accepts(intensity) {
                stats.record_filtered(intensity);
                continue;
            }
            let ctx = ShapeContext {
                intensity,
                geometry: block.geometry(),
                options,
            };
            let primitives = render(&ctx, rng);
            stats.record_drawn(intensity, primitives.len());
            assembler.extend(primitives);
        }
        let render_ms = render_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "Converter::run blocks total={} drawn={} filtered={} primitives={}",
            stats.total,
            stats.drawn,
            stats.filtered,
            assembler.len()
        );

        let finish_start = Instant::now();
        let handle = assembler.finish(sink)?;
        let finish_ms = finish_start.elapsed().as_secs_f64() * 1000.0;

        let mut timing =
            TimingBreakdown::with_total(total_start.elapsed().as_secs_f64() * 1000.0);
        timing.push("blocks", render_ms);
        timing.push("finalize", finish_ms);

        let report = ConversionReport::new(width, height, params, stats, timing);
        Ok((handle, report))
    }
}

/// Primary entry point: convert `image` with the named shape into `sink`.
///
/// Fails with [`ConvertError::UnsupportedShape`] for unknown names and with
/// [`ConvertError::InvalidParameter`] when `block_size == 0`, `alpha <= 0` or
/// `filter_threshold < 0`. Errors from `sink` are propagated unchanged.
pub fn convert<I, S>(
    image: &I,
    shape_name: &str,
    block_size: usize,
    alpha: f32,
    filter_threshold: f32,
    rng: &mut dyn RngCore,
    sink: S,
) -> Result<S::Handle, ConvertError>
where
    I: ImageView<Pixel = u8>,
    S: OutputSink,
{
    let shape: ShapeKind = shape_name.parse()?;
    let params = ConvertParams::new(shape, block_size)
        .with_alpha(alpha)
        .with_filter_threshold(filter_threshold);
    let (handle, _) = Converter::new(params)?.run(image, rng, sink)?;
    Ok(handle)
}
