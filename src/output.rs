//! Output drivers for `smart-leds` writers

use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{OutputDriver, color::Rgbw};

/// Output driver for any [`SmartLedsWrite`] implementation
///
/// Works with RGBW writers such as the RMT adapters for SK6812 rings.
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get back the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgbw>,
{
    fn write(&mut self, colors: &[Rgbw]) {
        // A dropped frame is replaced by the next one
        if self.writer.write(colors.iter().copied()).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.write] failed to write {} pixels", colors.len());
        }
    }
}
