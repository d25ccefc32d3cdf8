//! Slow cross-fade between random colors
//!
//! The whole ring shows one color. When a fade completes, a new fully
//! saturated target is picked and the ring fades towards it from the
//! previous target, so it never passes through black.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{Mode, ModeStep, random_color};
use crate::{
    animation::{AnimationParam, Animator, PixelAnimation},
    color::Rgbw,
    frame::clear_to,
    random::RandomSource,
};

/// Cross-fade effect shared by all pixels
#[derive(Debug, Clone)]
pub struct FaderMode {
    fade_delay: Duration,
    luminance: f32,
    state: PixelAnimation,
    animations: Animator<PixelAnimation, 1>,
}

impl FaderMode {
    pub const fn new(fade_delay: Duration, luminance: f32) -> Self {
        Self {
            fade_delay,
            luminance,
            state: PixelAnimation::new(0),
            animations: Animator::new(),
        }
    }

    /// Current fade
    pub const fn state(&self) -> PixelAnimation {
        self.state
    }

    pub fn is_fading(&self) -> bool {
        self.animations.is_animating()
    }

    fn fade_to_next<R: RandomSource>(&mut self, now: Instant, random: &mut R) {
        let color = random_color(random, self.luminance);
        self.state.retarget(color);
        #[cfg(feature = "esp32-log")]
        println!("[FaderMode] fading to {:?}", color);

        self.animations.start(0, self.fade_delay, Self::fill_ring, now);
    }

    fn fill_ring(state: &mut PixelAnimation, param: AnimationParam, frame: &mut [Rgbw]) {
        clear_to(frame, state.color_at(param.progress));
    }
}

impl Mode for FaderMode {
    fn setup<R: RandomSource>(&mut self, _now: Instant, _random: &mut R, frame: &mut [Rgbw]) {
        self.animations.stop_all();
        self.state = PixelAnimation::new(0);
        clear_to(frame, Rgbw::BLACK);
    }

    fn run<R: RandomSource>(
        &mut self,
        now: Instant,
        random: &mut R,
        frame: &mut [Rgbw],
    ) -> ModeStep {
        if self.animations.is_animating() {
            self.animations.update_all(now, &mut self.state, frame);
            ModeStep::RENDERED
        } else {
            self.fade_to_next(now, random);
            ModeStep::UNCHANGED
        }
    }

    fn stop(&mut self) {
        self.animations.stop_all();
    }
}
