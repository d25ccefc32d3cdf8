//! Mode system with compile-time known mode variants
//!
//! All modes are stored in an enum to avoid heap allocations.
//! Each mode implements the `Mode` trait.

mod fader;
mod light;
mod off;
mod rotator;

use embassy_time::{Duration, Instant};
pub use fader::FaderMode;
pub use light::LightMode;
pub use off::OffMode;
pub use rotator::RotatorMode;

use crate::{
    color::{Rgbw, hsl_to_rgbw},
    config::RingConfig,
    random::RandomSource,
};

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_FADER: &str = "fader";
const MODE_NAME_ROTATOR: &str = "rotator";
const MODE_NAME_LIGHT: &str = "light";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_FADER: u8 = 1;
const MODE_ID_ROTATOR: u8 = 2;
const MODE_ID_LIGHT: u8 = 3;

/// Number of modes the switch cycles through
pub const MODE_COUNT: usize = 4;

/// What a mode wants after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeStep {
    /// The frame was redrawn and should be pushed to the pixels
    pub frame_changed: bool,
    /// Time the host may idle before the next tick
    pub idle: Duration,
}

impl ModeStep {
    /// Frame redrawn, run again as soon as possible
    pub const RENDERED: Self = Self {
        frame_changed: true,
        idle: Duration::from_ticks(0),
    };

    /// Nothing to show, run again as soon as possible
    pub const UNCHANGED: Self = Self {
        frame_changed: false,
        idle: Duration::from_ticks(0),
    };

    /// Nothing to show for a while
    pub const fn idle(duration: Duration) -> Self {
        Self {
            frame_changed: false,
            idle: duration,
        }
    }
}

pub trait Mode {
    /// Clear the frame and draw the initial look
    fn setup<R: RandomSource>(&mut self, now: Instant, random: &mut R, frame: &mut [Rgbw]);

    /// Advance the mode by one tick
    fn run<R: RandomSource>(
        &mut self,
        now: Instant,
        random: &mut R,
        frame: &mut [Rgbw],
    ) -> ModeStep;

    /// Cancel in-flight animations, leaving the frame untouched
    fn stop(&mut self) {}
}

/// Mode slot - enum containing all possible modes
///
/// `N` is the number of pixels in the ring.
#[derive(Debug, Clone)]
pub enum ModeSlot<const N: usize> {
    /// All pixels off
    Off(OffMode),
    /// Slow cross-fade between random colors
    Fader(FaderMode),
    /// Two comets chasing each other around the ring
    Rotator(RotatorMode<N>),
    /// Plain white light
    Light(LightMode),
}

/// Known mode ids, in switch order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ModeId {
    #[default]
    Off = MODE_ID_OFF,
    Fader = MODE_ID_FADER,
    Rotator = MODE_ID_ROTATOR,
    Light = MODE_ID_LIGHT,
}

impl ModeId {
    /// Position in the switch cycle
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Mode selected by the next switch release
    pub const fn next(self) -> Self {
        match self {
            Self::Off => Self::Fader,
            Self::Fader => Self::Rotator,
            Self::Rotator => Self::Light,
            Self::Light => Self::Off,
        }
    }

    pub fn to_slot<const N: usize>(self, config: &RingConfig) -> ModeSlot<N> {
        match self {
            Self::Off => ModeSlot::Off(OffMode::new(config.idle_delay)),
            Self::Fader => ModeSlot::Fader(FaderMode::new(config.fade_delay, config.luminance)),
            Self::Rotator => {
                ModeSlot::Rotator(RotatorMode::new(config.rotate_delay, config.luminance))
            }
            Self::Light => {
                ModeSlot::Light(LightMode::new(Rgbw::white(config.saturation), config.idle_delay))
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::Fader => MODE_NAME_FADER,
            Self::Rotator => MODE_NAME_ROTATOR,
            Self::Light => MODE_NAME_LIGHT,
        }
    }
}

impl<const N: usize> ModeSlot<N> {
    pub fn setup<R: RandomSource>(&mut self, now: Instant, random: &mut R, frame: &mut [Rgbw]) {
        match self {
            Self::Off(mode) => mode.setup(now, random, frame),
            Self::Fader(mode) => mode.setup(now, random, frame),
            Self::Rotator(mode) => mode.setup(now, random, frame),
            Self::Light(mode) => mode.setup(now, random, frame),
        }
    }

    pub fn run<R: RandomSource>(
        &mut self,
        now: Instant,
        random: &mut R,
        frame: &mut [Rgbw],
    ) -> ModeStep {
        match self {
            Self::Off(mode) => mode.run(now, random, frame),
            Self::Fader(mode) => mode.run(now, random, frame),
            Self::Rotator(mode) => mode.run(now, random, frame),
            Self::Light(mode) => mode.run(now, random, frame),
        }
    }

    pub fn stop(&mut self) {
        match self {
            Self::Off(mode) => Mode::stop(mode),
            Self::Fader(mode) => Mode::stop(mode),
            Self::Rotator(mode) => Mode::stop(mode),
            Self::Light(mode) => Mode::stop(mode),
        }
    }

    /// Get the mode ID for external observation
    pub fn id(&self) -> ModeId {
        match self {
            Self::Off(_) => ModeId::Off,
            Self::Fader(_) => ModeId::Fader,
            Self::Rotator(_) => ModeId::Rotator,
            Self::Light(_) => ModeId::Light,
        }
    }
}

/// Fully saturated color with a random whole-degree hue
pub(crate) fn random_color<R: RandomSource>(random: &mut R, luminance: f32) -> Rgbw {
    let hue = libm::floorf(random.next_unit() * 360.0) / 360.0;
    hsl_to_rgbw(hue, 1.0, luminance)
}
