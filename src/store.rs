//! Per-bookmark image persistence.
//!
//! The store maps an [`EntityId`] to exactly one file on disk, named by the
//! [`naming`](crate::naming) convention, under a root directory it owns.
//! `save` is fully overwriting (never appending, never versioning), so the
//! filesystem itself enforces "at most one stored image per bookmark".
//!
//! Writes are atomic: the PNG is encoded into a named temp file in the store
//! root, then renamed over the canonical path. A crash or encode failure
//! mid-save can never leave a corrupt file visible under the canonical name.
//!
//! The store performs no garbage collection. A stored file is deleted only
//! through [`ImageStore::delete`], which the repository layer calls when the
//! owning bookmark is removed.

use crate::imaging::{Codec, CodecError, RustCodec};
use crate::naming::image_filename;
use crate::types::EntityId;
use image::DynamicImage;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Disk store for bookmark images, keyed by [`EntityId`].
///
/// Concurrent operations on *different* ids share nothing and may run in
/// parallel. Concurrent `save`/`delete` for the *same* id are not ordered
/// here — last writer wins; callers needing stronger ordering serialize at
/// the repository layer.
pub struct ImageStore<C = RustCodec> {
    root: PathBuf,
    codec: C,
}

impl ImageStore<RustCodec> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_codec(root, RustCodec::new())
    }
}

impl<C: Codec> ImageStore<C> {
    pub fn with_codec(root: impl Into<PathBuf>, codec: C) -> Self {
        Self {
            root: root.into(),
            codec,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Canonical on-disk path for the image owned by `id`.
    pub fn image_path(&self, id: EntityId) -> PathBuf {
        self.root.join(image_filename(id))
    }

    /// Whether a stored image exists for `id`.
    pub fn contains(&self, id: EntityId) -> bool {
        self.image_path(id).is_file()
    }

    /// Persist `image` as the one stored image for `id`, replacing any
    /// previous one.
    pub fn save(&self, id: EntityId, image: &DynamicImage) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root)?;
        let staged = NamedTempFile::new_in(&self.root)?;
        self.codec.encode_png(image, staged.path())?;
        let path = self.image_path(id);
        staged.persist(&path).map_err(|e| e.error)?;
        info!(%id, path = %path.display(), "stored image");
        Ok(())
    }

    /// Load the stored image for `id`.
    ///
    /// `Ok(None)` when no file exists — a bookmark without an image is a
    /// normal state. A file that exists but cannot be decoded is an error.
    pub fn load(&self, id: EntityId) -> Result<Option<DynamicImage>, StoreError> {
        let path = self.image_path(id);
        if !path.is_file() {
            debug!(%id, "no stored image");
            return Ok(None);
        }
        let image = self.codec.decode_scaled(&path, 1)?;
        Ok(Some(image))
    }

    /// Remove the stored image for `id`. Absence is success.
    pub fn delete(&self, id: EntityId) -> Result<(), StoreError> {
        match std::fs::remove_file(self.image_path(id)) {
            Ok(()) => {
                info!(%id, "deleted stored image");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_image;
    use tempfile::TempDir;

    fn store(tmp: &TempDir) -> ImageStore {
        ImageStore::new(tmp.path())
    }

    // =========================================================================
    // save / load
    // =========================================================================

    #[test]
    fn save_writes_canonical_filename() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);

        store.save(EntityId::new(42), &test_image(32, 24)).unwrap();

        assert!(tmp.path().join("image-42.png").is_file());
        assert!(store.contains(EntityId::new(42)));
    }

    #[test]
    fn save_load_roundtrip_is_pixel_equal() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);
        let original = test_image(48, 36);

        store.save(EntityId::new(7), &original).unwrap();
        let loaded = store.load(EntityId::new(7)).unwrap().unwrap();

        assert_eq!(loaded.to_rgba8(), original.to_rgba8());
    }

    #[test]
    fn save_overwrites_previous_image() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);
        let id = EntityId::new(3);

        store.save(id, &test_image(10, 10)).unwrap();
        store.save(id, &test_image(20, 30)).unwrap();

        let loaded = store.load(id).unwrap().unwrap();
        assert_eq!(loaded.to_rgba8(), test_image(20, 30).to_rgba8());

        // Still exactly one file for the id
        let count = std::fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(count, 1);
    }

    #[test]
    fn save_creates_missing_root() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("images/bookmarks");
        let store = ImageStore::new(&nested);

        store.save(EntityId::new(1), &test_image(8, 8)).unwrap();
        assert!(nested.join("image-1.png").is_file());
    }

    #[test]
    fn save_leaves_no_staging_files_behind() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);

        store.save(EntityId::new(5), &test_image(16, 16)).unwrap();

        let names: Vec<String> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["image-5.png".to_string()]);
    }

    #[test]
    fn load_missing_is_none_not_error() {
        let tmp = TempDir::new().unwrap();
        assert!(store(&tmp).load(EntityId::new(99)).unwrap().is_none());
    }

    #[test]
    fn load_corrupt_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);
        std::fs::write(tmp.path().join("image-4.png"), b"not a png").unwrap();

        let result = store.load(EntityId::new(4));
        assert!(matches!(result, Err(StoreError::Codec(_))));
    }

    #[test]
    fn distinct_ids_do_not_interfere() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);

        store.save(EntityId::new(1), &test_image(10, 10)).unwrap();
        store.save(EntityId::new(2), &test_image(20, 20)).unwrap();
        store.delete(EntityId::new(1)).unwrap();

        assert!(store.load(EntityId::new(1)).unwrap().is_none());
        assert!(store.load(EntityId::new(2)).unwrap().is_some());
    }

    // =========================================================================
    // delete
    // =========================================================================

    #[test]
    fn delete_then_load_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);
        let id = EntityId::new(11);

        store.save(id, &test_image(12, 12)).unwrap();
        store.delete(id).unwrap();

        assert!(!store.contains(id));
        assert!(store.load(id).unwrap().is_none());
    }

    #[test]
    fn delete_never_saved_id_succeeds() {
        let tmp = TempDir::new().unwrap();
        store(&tmp).delete(EntityId::new(12345)).unwrap();
    }

    #[test]
    fn delete_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let store = store(&tmp);
        let id = EntityId::new(6);

        store.save(id, &test_image(8, 8)).unwrap();
        store.delete(id).unwrap();
        store.delete(id).unwrap();
    }
}
