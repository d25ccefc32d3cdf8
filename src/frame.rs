//! Pixel buffer helpers
//!
//! The ring is addressed as a plain slice; its length is the ring size.

use crate::color::Rgbw;

/// Number of pixels in the ring
#[inline]
pub const fn ring_size(frame: &[Rgbw]) -> usize {
    frame.len()
}

/// Fill the whole frame with one color
pub fn clear_to(frame: &mut [Rgbw], color: Rgbw) {
    frame.fill(color);
}

/// Set a single pixel
///
/// Indices outside of the ring are ignored.
pub fn set_pixel(frame: &mut [Rgbw], index: usize, color: Rgbw) {
    if let Some(pixel) = frame.get_mut(index) {
        *pixel = color;
    }
}

/// Index of the next pixel clockwise, wrapping at the end of the ring
#[inline]
pub const fn next_pixel(index: usize, count: usize) -> usize {
    (index + 1) % count
}

/// Index of the previous pixel, wrapping at the start of the ring
#[inline]
pub const fn prev_pixel(index: usize, count: usize) -> usize {
    (index + count - 1) % count
}
