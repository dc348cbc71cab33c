//! Bounded image decoding and orientation correction.
//!
//! | Stage | Module |
//! |---|---|
//! | **Sample factor** | [`sampling`] — pure power-of-two math |
//! | **Codec seam** | [`codec`] trait + [`RustCodec`] (`image` crate) |
//! | **Two-pass decode** | [`decoder`] — probe, sample, decode, clamp |
//! | **Upright pixels** | [`orientation`] — EXIF read + rotation |
//!
//! The module is split so every decision (how much to sub-sample, when to
//! rotate) is a pure function testable without touching a real codec.

pub mod codec;
pub mod decoder;
pub mod orientation;
pub mod rust_codec;
pub mod sampling;

pub use codec::{Codec, CodecError, Dimensions};
pub use decoder::{DecodeError, decode_from_bytes, decode_from_path, decode_from_stream};
pub use orientation::{Orientation, apply_orientation, read_orientation};
pub use rust_codec::RustCodec;
pub use sampling::{BoundingBox, compute_sample_factor};

use std::path::Path;

/// A reference to raw image content, exactly one of two kinds.
///
/// The pipeline only ever reads through a source; it never mutates or
/// deletes one (the capture flow's own temp file being the one exception,
/// and that file never appears here as a caller-owned source).
#[derive(Debug, Clone, Copy)]
pub enum ImageSource<'a> {
    /// An image file on disk.
    Path(&'a Path),
    /// Encoded image bytes already buffered in memory.
    Bytes(&'a [u8]),
}
