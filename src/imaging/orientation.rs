//! EXIF orientation correction.
//!
//! Camera captures are frequently stored physically rotated, with the
//! intended rotation recorded in EXIF metadata. Downstream consumers of the
//! pipeline require upright pixels, so every capture decode runs through
//! [`apply_orientation`]; for images that are already upright the call is a
//! free no-op.
//!
//! Metadata extraction is best-effort by contract: a source with no EXIF,
//! unreadable EXIF, or a mirrored orientation the app never produced maps to
//! [`Orientation::Unknown`], and `Unknown` is treated exactly like `Normal`.
//! Reading orientation can therefore never fail the pipeline.

use crate::imaging::ImageSource;
use exif::{In, Tag};
use image::DynamicImage;
use std::fs::File;
use std::io::{BufReader, Cursor};
use tracing::debug;

/// Rotation required to display an image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Already upright; no correction needed.
    Normal,
    /// Rotate 90° clockwise.
    Rotate90,
    /// Rotate 180°.
    Rotate180,
    /// Rotate 270° clockwise.
    Rotate270,
    /// Metadata absent or unusable; treated as `Normal`.
    Unknown,
}

impl Orientation {
    /// Map a raw EXIF orientation value (1..=8) to a correction.
    ///
    /// Values 2/4/5/7 are mirrored variants no camera in this app's flows
    /// emits; they map to `Unknown` rather than growing flip support.
    fn from_exif_value(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            3 => Orientation::Rotate180,
            6 => Orientation::Rotate90,
            8 => Orientation::Rotate270,
            _ => Orientation::Unknown,
        }
    }
}

/// Read the orientation tag from the same source the decoder used.
///
/// Never fails: any error on the way to the tag yields `Unknown`.
pub fn read_orientation(source: ImageSource<'_>) -> Orientation {
    let orientation = match try_read_exif_value(source) {
        Some(value) => Orientation::from_exif_value(value),
        None => Orientation::Unknown,
    };
    if orientation != Orientation::Normal && orientation != Orientation::Unknown {
        debug!(?orientation, "image requires rotation");
    }
    orientation
}

fn try_read_exif_value(source: ImageSource<'_>) -> Option<u32> {
    let exif = match source {
        ImageSource::Path(path) => {
            let file = File::open(path).ok()?;
            exif::Reader::new()
                .read_from_container(&mut BufReader::new(file))
                .ok()?
        }
        ImageSource::Bytes(bytes) => exif::Reader::new()
            .read_from_container(&mut Cursor::new(bytes))
            .ok()?,
    };
    exif.get_field(Tag::Orientation, In::PRIMARY)?
        .value
        .get_uint(0)
}

/// Rotate `image` so it displays upright.
///
/// `Normal` and `Unknown` return the input untouched, with no allocation or
/// pixel copy. The rotating arms produce a new buffer and consume the input;
/// there is never a moment where two copies are live after the call returns.
pub fn apply_orientation(image: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal | Orientation::Unknown => image,
        Orientation::Rotate90 => image.rotate90(),
        Orientation::Rotate180 => image.rotate180(),
        Orientation::Rotate270 => image.rotate270(),
    }
}
