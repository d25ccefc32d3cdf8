//! All pixels off

use embassy_time::{Duration, Instant};

use super::{Mode, ModeStep};
use crate::{color::Rgbw, frame::clear_to, random::RandomSource};

#[derive(Debug, Clone)]
pub struct OffMode {
    idle: Duration,
}

impl OffMode {
    pub const fn new(idle: Duration) -> Self {
        Self { idle }
    }
}

impl Mode for OffMode {
    fn setup<R: RandomSource>(&mut self, _now: Instant, _random: &mut R, frame: &mut [Rgbw]) {
        clear_to(frame, Rgbw::BLACK);
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
