//! HSL color generation
//!
//! Hue, saturation and lightness are all normalized to `0.0..=1.0`.

use crate::color::{Rgb, Rgbw};

const ONE_SIXTH: f32 = 1.0 / 6.0;
const ONE_THIRD: f32 = 1.0 / 3.0;
const TWO_THIRDS: f32 = 2.0 / 3.0;

/// Convert an HSL color to RGB
///
/// Hue wraps around, so `1.25` is the same as `0.25`.
#[allow(clippy::many_single_char_names)]
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb {
    let saturation = saturation.clamp(0.0, 1.0);
    let lightness = lightness.clamp(0.0, 1.0);

    if saturation <= 0.0 {
        let level = unit_to_u8(lightness);
        return Rgb {
            r: level,
            g: level,
            b: level,
        };
    }

    let hue = hue - libm::floorf(hue);
    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Rgb {
        r: unit_to_u8(hue_to_channel(p, q, hue + ONE_THIRD)),
        g: unit_to_u8(hue_to_channel(p, q, hue)),
        b: unit_to_u8(hue_to_channel(p, q, hue - ONE_THIRD)),
    }
}

/// Convert an HSL color to RGBW
///
/// Generated colors never use the white channel.
pub fn hsl_to_rgbw(hue: f32, saturation: f32, lightness: f32) -> Rgbw {
    hsl_to_rgb(hue, saturation, lightness).into()
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < ONE_SIXTH {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < TWO_THIRDS {
        p + (q - p) * (TWO_THIRDS - t) * 6.0
    } else {
        p
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}
