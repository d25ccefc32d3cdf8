use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgbw;
use crate::config::{ConfigError, RingConfig};
use crate::filter::FilterProcessor;
use crate::mode::{ModeId, ModeSlot, ModeStep};
use crate::random::RandomSource;

/// Mode switching progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// The active mode runs on every tick
    Running,
    /// The old mode is stopped; the new one is set up at `resume_at`
    Switching { target: ModeId, resume_at: Instant },
}

/// Mode engine - owns the active mode and the pixel buffer
///
/// `N` is the number of pixels in the ring.
pub struct ModeEngine<const N: usize> {
    // Configuration
    config: RingConfig,

    // Internal state
    active: ModeSlot<N>,
    active_id: Option<ModeId>,
    phase: Phase,
    frame_buffer: [Rgbw; N],
    output_buffer: [Rgbw; N],

    // Internal dependencies
    filters: FilterProcessor,
}

impl<const N: usize> ModeEngine<N> {
    /// Create a new engine
    ///
    /// No mode is set up until the first tick.
    pub fn new(config: &RingConfig) -> Result<Self, ConfigError> {
        if let Err(error) = config.validate::<N>() {
            #[cfg(feature = "esp32-log")]
            println!("[ModeEngine.new] rejected config: {}", error);
            return Err(error);
        }

        Ok(Self {
            config: *config,
            active: ModeId::Off.to_slot(config),
            active_id: None,
            phase: Phase::Running,
            frame_buffer: [Rgbw::BLACK; N],
            output_buffer: [Rgbw::BLACK; N],
            filters: FilterProcessor::new(config.gamma),
        })
    }

    /// Process one tick
    ///
    /// When `target` differs from the active mode, the active mode is
    /// stopped and the engine pauses for `switch_pause` before setting up
    /// the new one. Otherwise the active mode runs once.
    pub fn tick<R: RandomSource>(
        &mut self,
        now: Instant,
        target: ModeId,
        random: &mut R,
    ) -> ModeStep {
        match self.phase {
            Phase::Running if self.active_id == Some(target) => {
                let step = self.active.run(now, random, &mut self.frame_buffer);
                if step.frame_changed {
                    self.apply_filters();
                }
                step
            }
            Phase::Running => {
                self.begin_switch(target, now);
                ModeStep::idle(self.config.switch_pause)
            }
            Phase::Switching { resume_at, .. } if now < resume_at => {
                // A release during the pause only changes where we land
                self.phase = Phase::Switching { target, resume_at };
                ModeStep::idle(resume_at - now)
            }
            Phase::Switching { .. } => {
                self.finish_switch(target, now, random);
                let step = self.active.run(now, random, &mut self.frame_buffer);
                self.apply_filters();
                ModeStep {
                    frame_changed: true,
                    idle: step.idle,
                }
            }
        }
    }

    /// Mode currently set up, `None` before the first switch completes
    pub const fn active_mode(&self) -> Option<ModeId> {
        self.active_id
    }

    /// Get a reference to the active mode
    pub const fn active_slot(&self) -> &ModeSlot<N> {
        &self.active
    }

    /// Check if a mode switch is pausing
    pub const fn is_switching(&self) -> bool {
        matches!(self.phase, Phase::Switching { .. })
    }

    /// Pixels as drawn by the active mode
    pub const fn frame(&self) -> &[Rgbw; N] {
        &self.frame_buffer
    }

    /// Pixels to send to the ring, with output filters applied
    pub const fn output(&self) -> &[Rgbw; N] {
        &self.output_buffer
    }

    pub const fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Time left until a pending switch completes
    pub fn pause_remaining(&self, now: Instant) -> Duration {
        match self.phase {
            Phase::Switching { resume_at, .. } => resume_at.saturating_duration_since(now),
            Phase::Running => Duration::from_ticks(0),
        }
    }

    fn begin_switch(&mut self, target: ModeId, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[ModeEngine] switching {:?} -> {} at {}ms",
            self.active_id.map(ModeId::as_str),
            target.as_str(),
            now.as_millis()
        );
        self.active.stop();
        self.phase = Phase::Switching {
            target,
            resume_at: now + self.config.switch_pause,
        };
    }

    fn finish_switch<R: RandomSource>(&mut self, target: ModeId, now: Instant, random: &mut R) {
        self.active = target.to_slot(&self.config);
        self.active.setup(now, random, &mut self.frame_buffer);
        self.active_id = Some(target);
        self.phase = Phase::Running;
        #[cfg(feature = "esp32-log")]
        println!("[ModeEngine] {} ready", target.as_str());
    }

    fn apply_filters(&mut self) {
        self.filters.process(&self.frame_buffer, &mut self.output_buffer);
    }
}
