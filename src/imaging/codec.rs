//! Codec capability trait and shared types.
//!
//! The [`Codec`] trait is the narrow seam between the pipeline logic
//! (sampling math, two-pass decode, orientation correction) and the actual
//! pixel work: probe dimensions without decoding, decode with a sub-sample
//! factor, encode to PNG. Decoder and store code never name a concrete
//! codec, so both are testable against [`tests::MockCodec`].
//!
//! The production implementation is
//! [`RustCodec`](super::rust_codec::RustCodec), built on the `image` crate.

use image::DynamicImage;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Result of a dimension probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image codecs.
///
/// Probing must not materialize a pixel buffer; that is the whole point of
/// the two-pass decode. `decode_*_scaled` takes the power-of-two factor from
/// [`compute_sample_factor`](super::sampling::compute_sample_factor) and
/// returns an image reduced by that factor.
pub trait Codec: Sync {
    /// Read image dimensions from a file header, no pixel decode.
    fn probe(&self, path: &Path) -> Result<Dimensions, CodecError>;

    /// Read image dimensions from an in-memory encoded image.
    fn probe_bytes(&self, bytes: &[u8]) -> Result<Dimensions, CodecError>;

    /// Decode a file, sub-sampled by `factor` (1 = full resolution).
    fn decode_scaled(&self, path: &Path, factor: u32) -> Result<DynamicImage, CodecError>;

    /// Decode an in-memory encoded image, sub-sampled by `factor`.
    fn decode_bytes_scaled(&self, bytes: &[u8], factor: u32) -> Result<DynamicImage, CodecError>;

    /// Encode `image` losslessly as PNG at `path`.
    fn encode_png(&self, image: &DynamicImage, path: &Path) -> Result<(), CodecError>;
}
