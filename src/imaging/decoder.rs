//! Two-pass bounded decode.
//!
//! Turning an arbitrary source image into an in-memory bitmap no larger
//! than a requested bounding box takes two passes through the codec:
//!
//! 1. Probe dimensions only (no pixel buffer is allocated).
//! 2. Compute the power-of-two sub-sample factor from the probed size.
//! 3. Decode again with that factor, materializing pixels.
//!
//! Because the factor undershoots (sub-sampled output stays at least as
//! large as the bound), a final aspect-preserving resize clamps the result
//! when it still exceeds the bound, so callers can rely on
//! `width <= max_width && height <= max_height` unconditionally.
//!
//! Streams are not seekable in general, and the contract requires two reads
//! of the same logical content. Policy: the stream is buffered into memory
//! exactly once and both passes run against the buffer: a one-shot source
//! (network body, pipe) behaves identically to a file, and reopening is
//! never attempted. A failure while buffering fails the whole call; there is
//! no partial result.

use super::codec::{Codec, CodecError};
use super::sampling::{BoundingBox, compute_sample_factor};
use image::{DynamicImage, GenericImageView, imageops::FilterType};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("source image not found: {0}")]
    NotFound(PathBuf),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Decode the image at `path` into a bitmap bounded by `bound`.
///
/// Fails with [`DecodeError::NotFound`] when the path does not resolve and
/// with a codec error when the bytes are not a supported image format.
pub fn decode_from_path(
    codec: &impl Codec,
    path: &Path,
    bound: BoundingBox,
) -> Result<DynamicImage, DecodeError> {
    let dims = codec.probe(path).map_err(|e| match e {
        CodecError::Io(err) if err.kind() == ErrorKind::NotFound => {
            DecodeError::NotFound(path.to_path_buf())
        }
        other => DecodeError::Codec(other),
    })?;
    let factor = compute_sample_factor(dims, bound);
    debug!(
        width = dims.width,
        height = dims.height,
        factor,
        "decoding file"
    );
    let img = codec.decode_scaled(path, factor)?;
    Ok(fit_to_bound(img, bound))
}

/// Decode an in-memory encoded image into a bitmap bounded by `bound`.
pub fn decode_from_bytes(
    codec: &impl Codec,
    bytes: &[u8],
    bound: BoundingBox,
) -> Result<DynamicImage, DecodeError> {
    let dims = codec.probe_bytes(bytes)?;
    let factor = compute_sample_factor(dims, bound);
    debug!(
        width = dims.width,
        height = dims.height,
        factor,
        "decoding buffered stream"
    );
    let img = codec.decode_bytes_scaled(bytes, factor)?;
    Ok(fit_to_bound(img, bound))
}

/// Decode a byte stream into a bitmap bounded by `bound`.
///
/// Returns `Ok(None)` when the stream yields no bytes — "nothing selected"
/// is a normal state, not a failure. Malformed image data is an error.
pub fn decode_from_stream(
    codec: &impl Codec,
    mut reader: impl Read,
    bound: BoundingBox,
) -> Result<Option<DynamicImage>, DecodeError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(CodecError::Io)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    decode_from_bytes(codec, &bytes, bound).map(Some)
}

/// Clamp a sub-sampled decode to the bound with one aspect-preserving resize.
fn fit_to_bound(img: DynamicImage, bound: BoundingBox) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width > bound.max_width || height > bound.max_height {
        img.resize(bound.max_width, bound.max_height, FilterType::Lanczos3)
    } else {
        img
    }
}
