//! Error type shared by every conversion stage.
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a conversion can abort. No stage retries; the first error wins.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("unsupported shape `{0}`")]
    UnsupportedShape(String),

    #[error("failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write output {target}: {source}")]
    OutputWrite {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("conversion cancelled after {blocks_done} blocks")]
    Cancelled { blocks_done: usize },
}

impl ConvertError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ConvertError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
