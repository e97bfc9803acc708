//! Independent conversions run side by side.
use super::{ConvertParams, Converter};
use crate::document::Document;
use crate::error::ConvertError;
use crate::image::ImageView;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Convert every image in parallel into an in-memory [`Document`].
///
/// Each conversion owns its own `StdRng` seeded with `seed + index`, so the
/// output is identical to running them one after another.
pub fn convert_many<I>(
    images: &[I],
    params: &ConvertParams,
    seed: u64,
) -> Vec<Result<Document, ConvertError>>
where
    I: ImageView<Pixel = u8> + Sync,
{
    debug!(
        "convert_many images={} shape={} seed={}",
        images.len(),
        params.shape,
        seed
    );
    images
        .par_iter()
        .enumerate()
        .map(|(index, image)| -> Result<Document, ConvertError> {
            let converter = Converter::new(params.clone())?;
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
            let (document, _) = converter.run(image, &mut rng, Document::default())?;
            Ok(document)
        })
        .collect()
}
