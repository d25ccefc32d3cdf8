use crate::{color::Rgbw, math8::lerp8};

/// Blend two RGBW colors channel by channel
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `progress` - Blend factor, clamped to `0.0..=1.0` (0 = all a, 1 = all b)
#[inline]
pub fn linear_blend(a: Rgbw, b: Rgbw, progress: f32) -> Rgbw {
    Rgbw {
        r: lerp8(a.r, b.r, progress),
        g: lerp8(a.g, b.g, progress),
        b: lerp8(a.b, b.b, progress),
        w: lerp8(a.w, b.w, progress),
    }
}
