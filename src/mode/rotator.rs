//! Two comets chasing each other around the ring
//!
//! Each comet is a dot of a random color followed by a tail of half the
//! ring, fading towards black. The dots start on opposite sides and step
//! forward together, so they never meet. Every pixel cross-fades to its new
//! color during a step.

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{Mode, ModeStep, random_color};
use crate::{
    animation::{AnimationParam, Animator, PixelAnimation},
    color::{Rgbw, linear_blend},
    frame::{clear_to, next_pixel, prev_pixel, set_pixel},
    random::RandomSource,
};

/// Comet chase over a ring of `N` pixels
#[derive(Debug, Clone)]
pub struct RotatorMode<const N: usize> {
    rotate_delay: Duration,
    luminance: f32,
    dot1: usize,
    dot2: usize,
    tail1: Vec<Rgbw, N>,
    tail2: Vec<Rgbw, N>,
    pixels: [PixelAnimation; N],
    animations: Animator<[PixelAnimation; N], N>,
}

impl<const N: usize> RotatorMode<N> {
    pub fn new(rotate_delay: Duration, luminance: f32) -> Self {
        Self {
            rotate_delay,
            luminance,
            dot1: 0,
            dot2: N / 2,
            tail1: Vec::new(),
            tail2: Vec::new(),
            pixels: core::array::from_fn(PixelAnimation::new),
            animations: Animator::new(),
        }
    }

    /// Head positions of both comets
    pub const fn dots(&self) -> (usize, usize) {
        (self.dot1, self.dot2)
    }

    /// Tail colors of both comets, head first
    pub fn tails(&self) -> (&[Rgbw], &[Rgbw]) {
        (self.tail1.as_slice(), self.tail2.as_slice())
    }

    /// Per-pixel fades of the current step
    pub fn pixels(&self) -> &[PixelAnimation] {
        &self.pixels
    }

    pub fn is_stepping(&self) -> bool {
        self.animations.is_animating()
    }

    /// Move both comets one pixel forward and start fading towards them
    fn spin(&mut self, now: Instant) {
        self.dot1 = next_pixel(self.dot1, N);
        self.dot2 = next_pixel(self.dot2, N);

        Self::retarget_tail(&mut self.pixels, self.dot1, &self.tail1);
        Self::retarget_tail(&mut self.pixels, self.dot2, &self.tail2);

        for index in 0..N {
            self.animations.start(index, self.rotate_delay, Self::blend_pixel, now);
        }
    }

    /// Lay a tail out backwards from its head
    fn retarget_tail(pixels: &mut [PixelAnimation; N], head: usize, tail: &[Rgbw]) {
        let mut pixel = head;
        for &color in tail {
            pixels[pixel].retarget(color);
            pixel = prev_pixel(pixel, N);
        }
    }

    fn blend_pixel(pixels: &mut [PixelAnimation; N], param: AnimationParam, frame: &mut [Rgbw]) {
        if let Some(state) = pixels.get(param.index) {
            set_pixel(frame, state.pixel, state.color_at(param.progress));
        }
    }
}

/// Colors of a comet: the head at full color, fading linearly to black
#[allow(clippy::cast_precision_loss)]
fn comet_tail<const N: usize>(color: Rgbw, length: usize) -> Vec<Rgbw, N> {
    (0..length)
        .map(|position| linear_blend(color, Rgbw::BLACK, position as f32 / length as f32))
        .collect()
}

impl<const N: usize> Mode for RotatorMode<N> {
    fn setup<R: RandomSource>(&mut self, _now: Instant, random: &mut R, frame: &mut [Rgbw]) {
        self.animations.stop_all();
        clear_to(frame, Rgbw::BLACK);

        self.dot1 = 0;
        self.dot2 = N / 2;

        let color1 = random_color(random, self.luminance);
        let color2 = random_color(random, self.luminance);
        #[cfg(feature = "esp32-log")]
        println!("[RotatorMode] comets {:?} and {:?}", color1, color2);

        self.tail1 = comet_tail(color1, N / 2);
        self.tail2 = comet_tail(color2, N / 2);

        self.pixels = core::array::from_fn(PixelAnimation::new);
        self.pixels[self.dot1].end_color = color1;
        self.pixels[self.dot2].end_color = color2;
    }

    fn run<R: RandomSource>(
        &mut self,
        now: Instant,
        _random: &mut R,
        frame: &mut [Rgbw],
    ) -> ModeStep {
        if self.animations.is_animating() {
            self.animations.update_all(now, &mut self.pixels, frame);
            ModeStep::RENDERED
        } else {
            self.spin(now);
            ModeStep::UNCHANGED
        }
    }

    fn stop(&mut self) {
        self.animations.stop_all();
    }
}
