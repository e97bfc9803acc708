//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageU8;
use crate::error::ConvertError;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        let stride = width;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
///
/// Colour inputs are reduced with the `image` crate's luma conversion.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, ConvertError> {
    let img = image::open(path)
        .map_err(|source| ConvertError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(GrayImageU8::new(width, height, data))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_decode_error() {
        let path = Path::new("/nonexistent/halftone_vector/x.png");
        match load_grayscale_image(path) {
            Err(ConvertError::ImageDecode { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ImageDecode, got {other:?}"),
        }
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let dir = std::env::temp_dir().join("halftone_vector_io_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("garbage_{}.png", std::process::id()));
        fs::write(&path, b"definitely not a png").unwrap();
        let result = load_grayscale_image(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConvertError::ImageDecode { .. })));
    }

    #[test]
    fn loads_png_as_gray() {
        let dir = std::env::temp_dir().join("halftone_vector_io_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("gray_{}.png", std::process::id()));
        image::GrayImage::from_raw(3, 2, vec![0, 50, 100, 150, 200, 255])
            .unwrap()
            .save(&path)
            .unwrap();
        let gray = load_grayscale_image(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!((gray.width(), gray.height()), (3, 2));
        assert_eq!(gray.as_view().data, &[0, 50, 100, 150, 200, 255]);
    }
}
