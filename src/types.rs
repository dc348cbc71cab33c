//! Shared types used across the pipeline.
//!
//! The bookmark record itself lives in the application's repository layer;
//! the pipeline only ever sees its identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the bookmark that owns a stored image.
///
/// The repository layer hands out ids once a bookmark has been persisted.
/// Store operations take an `EntityId` by value, so there is no way to save
/// or load an image for a bookmark that was never saved; the "unset id"
/// state simply does not exist at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for EntityId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntityId {
    /// Decimal, no leading zeros — the form embedded in stored filenames.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
