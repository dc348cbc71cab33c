//! Pure calculation functions for bounded decoding.
//!
//! Everything here is testable without any I/O or images. The codec consumes
//! the computed factor; nothing in this module touches pixels.

use crate::imaging::codec::Dimensions;

/// Largest sample factor the loop will ever produce (2^30). A u32 dimension
/// can be halved at most 31 times, so the bound is unreachable in practice
/// and exists only to pin the loop's worst case.
const MAX_SAMPLE_FACTOR: u32 = 1 << 30;

/// Maximum output dimensions for a decode.
///
/// Both sides are clamped to at least 1 on construction, so a zero bound
/// can never divide-by-zero its way into the sampling math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub max_width: u32,
    pub max_height: u32,
}

impl BoundingBox {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width: max_width.max(1),
            max_height: max_height.max(1),
        }
    }
}

/// Calculate the power-of-two sub-sample factor for decoding `source` into
/// `bound`.
///
/// Starts at 1 (full resolution). While half the source, divided by the
/// factor, still meets or exceeds the bound in *both* dimensions, the factor
/// doubles. A source that already fits the bound keeps factor 1.
///
/// The result is deliberately conservative: the sub-sampled image is the
/// smallest power-of-two reduction that is still at least as large as the
/// bound, never a precise fit. Callers that need an exact fit resize once
/// after the sub-sampled decode (see
/// [`decoder`](crate::imaging::decoder)).
///
/// # Examples
/// ```
/// # use waymark::imaging::{BoundingBox, Dimensions, compute_sample_factor};
/// // 4000x3000 into 200x200: halves are 2000x1500, so 8 is the last
/// // factor keeping both >= 200.
/// let source = Dimensions { width: 4000, height: 3000 };
/// assert_eq!(compute_sample_factor(source, BoundingBox::new(200, 200)), 8);
///
/// // Already fits: no reduction.
/// let small = Dimensions { width: 120, height: 90 };
/// assert_eq!(compute_sample_factor(small, BoundingBox::new(200, 200)), 1);
/// ```
pub fn compute_sample_factor(source: Dimensions, bound: BoundingBox) -> u32 {
    let mut factor: u32 = 1;
    if source.height > bound.max_height || source.width > bound.max_width {
        let half_width = source.width / 2;
        let half_height = source.height / 2;
        while factor < MAX_SAMPLE_FACTOR
            && half_height / factor >= bound.max_height
            && half_width / factor >= bound.max_width
        {
            factor *= 2;
        }
    }
    factor
}
