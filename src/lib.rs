//! # Waymark
//!
//! Image ingestion and storage pipeline for the Waymark location-bookmarking
//! app. Users drop markers on a map and attach photographs to them; this
//! crate is the piece that turns an arbitrary source image (camera capture,
//! gallery pick, downloaded place photo) into a memory-bounded, upright
//! bitmap and persists it under a filename derived from the owning
//! bookmark's id.
//!
//! # Architecture: One Pipeline, Four Stages
//!
//! ```text
//! source (path or stream)
//!   → Decoder      probe dims, compute factor, decode bounded   [imaging]
//!   → Corrector    rotate per EXIF orientation, idempotent      [imaging]
//!   → caller       display and/or...
//!   → ImageStore   atomic PNG write keyed by bookmark id        [store]
//! ```
//!
//! Each stage is a blocking, self-contained unit of work on one image;
//! scheduling (and staying off any UI thread) belongs to the caller.
//! Operations on different bookmark ids share no mutable state.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Sub-sample math, codec seam, two-pass decode, orientation |
//! | [`store`] | One stored PNG per bookmark id: save / load / delete |
//! | [`capture`] | Capture & import flows, unique temp-file allocation |
//! | [`naming`] | `image-<id>.png` persisted filename contract |
//! | [`config`] | TOML-backed bounding-box defaults |
//! | [`types`] | [`EntityId`](types::EntityId), the bookmark identifier |
//!
//! # Design Decisions
//!
//! ## Two-Pass Decode
//!
//! A camera source can be 4000×3000; a details pane needs 200×200. Decoding
//! the full image just to shrink it wastes tens of megabytes per photo, so
//! the decoder probes dimensions first, computes a power-of-two sub-sample
//! factor, and only then materializes pixels. See
//! [`imaging::compute_sample_factor`] for the factor math.
//!
//! ## Codec Behind a Trait
//!
//! All pixel work goes through the narrow [`imaging::Codec`] trait (probe,
//! decode-with-scale, encode-PNG). Pipeline logic never names a concrete
//! codec, so every decode decision is unit-testable against a recording
//! mock, and a smarter scaled-decode backend can slot in without touching
//! the callers.
//!
//! ## Streams Are Buffered Once
//!
//! The two-pass contract needs two reads of the same content, but picker
//! streams are one-shot. The decoder buffers the stream into memory exactly
//! once and runs both passes, plus the EXIF orientation read, against that
//! buffer. No reopening, no partial results, and a network body behaves
//! exactly like a file.
//!
//! ## PNG, Atomically
//!
//! Stored images are lossless PNG with orientation already baked into the
//! pixels, written to a temp file and renamed over the canonical
//! `image-<id>.png` path. A crash mid-save never corrupts the previously
//! stored image, and `load` after `save` returns pixel-identical data.

pub mod capture;
pub mod config;
pub mod imaging;
pub mod naming;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
