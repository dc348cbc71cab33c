//! Production codec built on the `image` crate — pure Rust, statically
//! linked decoders.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Probe (file) | `image::ImageReader::into_dimensions` (header only) |
//! | Probe (bytes) | `ImageReader::with_guessed_format` over a `Cursor` |
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate decoders |
//! | Sub-sample | `DynamicImage::thumbnail` (box filter) by the factor |
//! | Encode → PNG | `DynamicImage::write_to` with `ImageFormat::Png` |
//!
//! The `image` crate exposes no cross-format decode-at-scale hint, so the
//! sub-sample factor is applied immediately after decode and the
//! full-resolution buffer never escapes this module. A codec with true
//! scaled decoding can replace this one behind the [`Codec`] trait without
//! touching decoder or sampling logic.

use super::codec::{Codec, CodecError, Dimensions};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Pure Rust codec using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustCodec;

impl RustCodec {
    pub fn new() -> Self {
        Self
    }
}

/// Reduce a freshly decoded image by the sub-sample factor.
fn apply_factor(img: DynamicImage, factor: u32) -> DynamicImage {
    if factor <= 1 {
        return img;
    }
    let (width, height) = img.dimensions();
    img.thumbnail((width / factor).max(1), (height / factor).max(1))
}

impl Codec for RustCodec {
    fn probe(&self, path: &Path) -> Result<Dimensions, CodecError> {
        let (width, height) = ImageReader::open(path)?
            .into_dimensions()
            .map_err(|e| CodecError::Decode(format!("{}: {e}", path.display())))?;
        Ok(Dimensions { width, height })
    }

    fn probe_bytes(&self, bytes: &[u8]) -> Result<Dimensions, CodecError> {
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .into_dimensions()
            .map_err(|e| CodecError::Decode(e.to_string()))?;
        Ok(Dimensions { width, height })
    }

    fn decode_scaled(&self, path: &Path, factor: u32) -> Result<DynamicImage, CodecError> {
        let img = ImageReader::open(path)?
            .decode()
            .map_err(|e| CodecError::Decode(format!("{}: {e}", path.display())))?;
        Ok(apply_factor(img, factor))
    }

    fn decode_bytes_scaled(&self, bytes: &[u8], factor: u32) -> Result<DynamicImage, CodecError> {
        let img = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .decode()
            .map_err(|e| CodecError::Decode(e.to_string()))?;
        Ok(apply_factor(img, factor))
    }

    fn encode_png(&self, image: &DynamicImage, path: &Path) -> Result<(), CodecError> {
        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| CodecError::Encode(format!("{}: {e}", path.display())))?;
        writer.flush()?;
        Ok(())
    }
}
