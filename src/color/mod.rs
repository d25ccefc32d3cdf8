mod hsl;
mod utils;

use smart_leds::{RGB8, RGBW, White};

pub use hsl::{hsl_to_rgb, hsl_to_rgbw};
pub use utils::linear_blend;

pub type Rgb = RGB8;

/// Color of a single RGBW pixel
///
/// The white channel is driven by a separate LED on the pixel, so it is
/// never derived from the RGB part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl Rgbw {
    /// All channels off
    pub const BLACK: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// White channel only
    pub const fn white(level: u8) -> Self {
        Self::new(0, 0, 0, level)
    }

    /// Check if every channel is off
    pub const fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0 && self.w == 0
    }
}

impl From<Rgb> for Rgbw {
    fn from(color: Rgb) -> Self {
        Self::new(color.r, color.g, color.b, 0)
    }
}

impl From<Rgbw> for RGBW<u8> {
    fn from(color: Rgbw) -> Self {
        RGBW {
            r: color.r,
            g: color.g,
            b: color.b,
            a: White(color.w),
        }
    }
}
