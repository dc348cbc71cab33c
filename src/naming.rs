//! Centralized filename convention for stored bookmark images.
//!
//! Every persisted image lives under exactly one name derived from its
//! owning bookmark's id: `image-<id>.png`, decimal id, no leading zeros or
//! separators. The mapping is total and injective over the id space, which
//! is what makes "at most one stored image per bookmark" enforceable with
//! nothing but the filesystem.
//!
//! This is a persisted naming contract: stored files outlive processes, so
//! the format must never drift. (Earlier deployments wrote `bookmark<id>.png`;
//! migrating those files is the owning application's one-time concern, not
//! the store's.)

use crate::types::EntityId;

/// Prefix shared by all stored image filenames.
const IMAGE_PREFIX: &str = "image-";
/// Stored images are always PNG (lossless; orientation already baked in).
const IMAGE_EXT: &str = ".png";

/// Canonical filename for the image owned by `id`.
///
/// Pure and deterministic: equal ids always produce equal filenames,
/// distinct ids always produce distinct filenames.
///
/// ```
/// # use waymark::naming::image_filename;
/// # use waymark::types::EntityId;
/// assert_eq!(image_filename(EntityId::new(42)), "image-42.png");
/// assert_eq!(image_filename(EntityId::new(0)), "image-0.png");
/// ```
pub fn image_filename(id: EntityId) -> String {
    format!("{IMAGE_PREFIX}{id}{IMAGE_EXT}")
}

/// Parse a canonical stored-image filename back to its owning id.
///
/// Accepts only the exact canonical form: `image-<id>.png` with a plain
/// decimal id and no leading zeros (`image-0.png` is the one zero form).
/// Anything else — foreign files, the legacy `bookmark<id>.png` form,
/// zero-padded ids — returns `None`.
pub fn parse_image_filename(name: &str) -> Option<EntityId> {
    let digits = name.strip_prefix(IMAGE_PREFIX)?.strip_suffix(IMAGE_EXT)?;
    if digits.is_empty() || (digits.len() > 1 && digits.starts_with('0')) {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok().map(EntityId::new)
}
