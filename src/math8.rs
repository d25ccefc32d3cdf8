use embassy_time::Duration;

/// Linear interpolation between two 8-bit values
///
/// `t` is clamped to `0.0..=1.0` and the fractional part of the result is
/// dropped, so the endpoints are exact.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn lerp8(a: u8, b: u8, t: f32) -> u8 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let delta = f32::from(b) - f32::from(a);
    (f32::from(a) + delta * t) as u8
}

/// Calculate progress (0.0-1.0) based on elapsed time and duration
///
/// A zero duration is always complete.
#[allow(clippy::cast_precision_loss)]
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    let duration_us = duration.as_micros();
    if duration_us == 0 || elapsed.as_micros() >= duration_us {
        return 1.0;
    }

    elapsed.as_micros() as f32 / duration_us as f32
}
