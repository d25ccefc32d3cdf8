//! Static white light
//!
//! Uses the dedicated white LED of each pixel only.

use embassy_time::{Duration, Instant};

use super::{Mode, ModeStep};
use crate::{color::Rgbw, frame::clear_to, random::RandomSource};

#[derive(Debug, Clone)]
pub struct LightMode {
    color: Rgbw,
    idle: Duration,
}

impl LightMode {
    pub const fn new(color: Rgbw, idle: Duration) -> Self {
        Self { color, idle }
    }

    pub const fn color(&self) -> Rgbw {
        self.color
    }
}

impl Mode for LightMode {
    fn setup<R: RandomSource>(&mut self, _now: Instant, _random: &mut R, frame: &mut [Rgbw]) {
        clear_to(frame, self.color);
    }

    fn run<R: RandomSource>(
        &mut self,
        _now: Instant,
        _random: &mut R,
        _frame: &mut [Rgbw],
    ) -> ModeStep {
        ModeStep::idle(self.idle)
    }
}
