//! Lamp configuration profiles
//!
//! All ring pixels fully lit pull about 2.5A, which is more than a USB port
//! can supply. [`RingConfig::DEBUG`] lowers the output so the lamp can run
//! while connected for programming.

use core::fmt;

use embassy_time::Duration;

use crate::debounce::SwitchPolarity;

/// Configuration error detected before the lamp starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The ring has no pixels
    EmptyRing,
    /// The rotator splits the ring in two halves, so the size must be even
    OddRing(usize),
    /// HSL lightness is outside of `0.0..=1.0`
    LuminanceOutOfRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRing => write!(f, "ring has no pixels"),
            Self::OddRing(count) => write!(f, "ring size {} is not even", count),
            Self::LuminanceOutOfRange => write!(f, "luminance must be within 0.0..=1.0"),
        }
    }
}

/// Lamp configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingConfig {
    /// GPIO the mode switch is connected to
    pub switch_pin: u8,
    /// GPIO driving the pixel bus
    pub pixel_pin: u8,
    /// Peak channel value used for the white light
    pub saturation: u8,
    /// HSL lightness of generated colors
    pub luminance: f32,
    /// Duration of one fader cross-fade
    pub fade_delay: Duration,
    /// Time the rotator spends on each step
    pub rotate_delay: Duration,
    /// How long static modes let the host idle between runs
    pub idle_delay: Duration,
    /// Pause between stopping the old mode and setting up the new one
    pub switch_pause: Duration,
    /// Minimum time between two accepted switch transitions
    pub debounce: Duration,
    /// Minimum time between two loop ticks
    pub tick_interval: Duration,
    /// How the switch is wired
    pub polarity: SwitchPolarity,
    /// Apply gamma correction to the output
    pub gamma: bool,
}

impl RingConfig {
    /// Full brightness profile
    pub const RELEASE: Self = Self {
        switch_pin: 12,
        pixel_pin: 13,
        saturation: 220,
        luminance: 0.5,
        fade_delay: Duration::from_millis(15_000),
        rotate_delay: Duration::from_millis(200),
        idle_delay: Duration::from_millis(20),
        switch_pause: Duration::from_millis(20),
        debounce: Duration::from_millis(5),
        tick_interval: Duration::from_millis(1),
        polarity: SwitchPolarity::PressedHigh,
        gamma: false,
    };

    /// Low power profile for running from USB
    pub const DEBUG: Self = Self {
        saturation: 80,
        luminance: 0.05,
        ..Self::RELEASE
    };

    /// Profile selected by the `low-power` feature
    #[cfg(not(feature = "low-power"))]
    pub const DEFAULT: Self = Self::RELEASE;

    /// Profile selected by the `low-power` feature
    #[cfg(feature = "low-power")]
    pub const DEFAULT: Self = Self::DEBUG;

    /// Check that the configuration can drive a ring of `N` pixels
    pub fn validate<const N: usize>(&self) -> Result<(), ConfigError> {
        if N == 0 {
            return Err(ConfigError::EmptyRing);
        }
        if !N.is_multiple_of(2) {
            return Err(ConfigError::OddRing(N));
        }
        if !(0.0..=1.0).contains(&self.luminance) {
            return Err(ConfigError::LuminanceOutOfRange);
        }
        Ok(())
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
