//! Shared test fixtures for the waymark test suite.
//!
//! Synthetic images with a deterministic pixel gradient (so pixel-equality
//! assertions catch any corruption), and JPEG builders with a hand-rolled
//! EXIF APP1 segment for orientation tests.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbImage};
use std::path::Path;

/// Deterministic gradient image. Asymmetric in x and y, so every rotation
/// and every resize produces distinguishable pixels.
pub fn test_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x / 7 + y / 3) % 256) as u8])
    }))
}

/// Encode a synthetic image as JPEG bytes.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    test_image(width, height)
        .write_with_encoder(JpegEncoder::new(&mut bytes))
        .unwrap();
    bytes
}

/// Write a synthetic JPEG file.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    std::fs::write(path, jpeg_bytes(width, height)).unwrap();
}

/// Write a synthetic PNG file.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    test_image(width, height)
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

/// JPEG bytes carrying an EXIF orientation tag.
///
/// Splices a minimal APP1 segment (little-endian TIFF, one IFD0 entry:
/// tag 0x0112) directly after the SOI marker of a real encoded JPEG. The
/// result decodes normally and reads back the given orientation value.
pub fn jpeg_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
    let plain = jpeg_bytes(width, height);
    let mut out = plain[..2].to_vec();
    out.extend_from_slice(&exif_app1_segment(orientation));
    out.extend_from_slice(&plain[2..]);
    out
}

fn exif_app1_segment(orientation: u16) -> Vec<u8> {
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II"); // little-endian byte order
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes()); // offset of IFD0
    tiff.extend_from_slice(&1u16.to_le_bytes()); // one entry
    tiff.extend_from_slice(&0x0112u16.to_le_bytes()); // Orientation
    tiff.extend_from_slice(&3u16.to_le_bytes()); // type SHORT
    tiff.extend_from_slice(&1u32.to_le_bytes()); // count
    tiff.extend_from_slice(&orientation.to_le_bytes());
    tiff.extend_from_slice(&[0, 0]); // pad value to 4 bytes
    tiff.extend_from_slice(&0u32.to_le_bytes()); // no next IFD

    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(&tiff);

    let mut segment = vec![0xFF, 0xE1];
    segment.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    segment.extend_from_slice(&payload);
    segment
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn jpeg_bytes_decode_to_requested_size() {
        let bytes = jpeg_bytes(40, 30);
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!(img.dimensions(), (40, 30));
    }

    #[test]
    fn tagged_jpeg_still_decodes() {
        let bytes = jpeg_with_orientation(40, 30, 6);
        let img = image::load_from_memory(&bytes).unwrap();
        // The tag is metadata only; physical pixels are untouched.
        assert_eq!(img.dimensions(), (40, 30));
    }
}
