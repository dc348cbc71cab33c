//! Capture and import coordination.
//!
//! The two ways a bookmark acquires a photo:
//!
//! - **Capture**: allocate a uniquely-named temp file, hand its path to an
//!   external camera capability, then decode and orientation-correct the
//!   result. The temp file belongs to the flow and is removed when the flow
//!   finishes, whatever the outcome.
//! - **Import**: accept a byte stream from an external picker, buffer it
//!   once, then decode and orientation-correct from the buffer. An empty
//!   stream means "nothing selected" and is surfaced as `Ok(None)`.
//!
//! Both flows end at upright pixels and hand ownership back to the caller,
//! which decides whether to display the image and/or persist it through the
//! [`ImageStore`](crate::store::ImageStore). Nothing here catches or masks
//! lower-layer errors; the one conversion is empty-stream → `None`.

use crate::imaging::{
    BoundingBox, Codec, CodecError, DecodeError, ImageSource, apply_orientation, decoder,
    read_orientation,
};
use chrono::Utc;
use image::DynamicImage;
use std::io::Read;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("capture cancelled")]
    Aborted,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// External camera capability.
///
/// Implementations write a full encoded photo to `destination` and return,
/// or return [`CaptureError::Aborted`] when the user cancels. The original
/// register-a-listener callback style is deliberately collapsed into one
/// blocking call so this crate stays free of any event-loop mechanics.
pub trait CaptureDevice {
    fn request_capture(&self, destination: &Path) -> Result<(), CaptureError>;
}

/// Allocate a uniquely-named destination file for a camera capture.
///
/// The name combines a second-resolution timestamp with a random suffix
/// (`capture-20260807213045-Xu4fQ1.jpg`), so concurrent captures can never
/// collide. The file is removed when the returned handle drops.
pub fn allocate_capture_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    let stamp = Utc::now().format("%Y%m%d%H%M%S");
    Builder::new()
        .prefix(&format!("capture-{stamp}-"))
        .suffix(".jpg")
        .tempfile_in(dir)
}

/// Run the capture flow: temp file → camera → bounded decode → upright.
///
/// Fails with [`CaptureError::Io`] when the temp file cannot be created and
/// [`CaptureError::Aborted`] when the device reports cancellation.
pub fn capture_photo(
    device: &impl CaptureDevice,
    codec: &impl Codec,
    temp_dir: &Path,
    bound: BoundingBox,
) -> Result<DynamicImage, CaptureError> {
    let destination = allocate_capture_file(temp_dir)?;
    debug!(path = %destination.path().display(), "capture destination allocated");

    device.request_capture(destination.path())?;

    let image = decoder::decode_from_path(codec, destination.path(), bound)?;
    let orientation = read_orientation(ImageSource::Path(destination.path()));
    Ok(apply_orientation(image, orientation))
    // destination drops here, removing the capture file
}

/// Run the import flow: buffer the picker stream once, decode, upright.
///
/// `Ok(None)` when the stream yields no bytes ("no image selected").
/// Orientation metadata is read from the same buffer the decoder consumed,
/// so a one-shot stream never needs reopening.
pub fn import_photo(
    codec: &impl Codec,
    mut reader: impl Read,
    bound: BoundingBox,
) -> Result<Option<DynamicImage>, DecodeError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(CodecError::Io)?;
    if bytes.is_empty() {
        debug!("import stream was empty");
        return Ok(None);
    }

    let image = decoder::decode_from_bytes(codec, &bytes, bound)?;
    let orientation = read_orientation(ImageSource::Bytes(&bytes));
    Ok(Some(apply_orientation(image, orientation)))
}
