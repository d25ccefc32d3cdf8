//! Control loop pacing
//!
//! Provides the lamp's main loop step without async/await or
//! platform-specific timers. The caller is responsible for sleeping between
//! ticks, which also gives the host scheduler (and its watchdog) a chance to
//! run.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::{ConfigError, RingConfig};
use crate::debounce::Debouncer;
use crate::engine::ModeEngine;
use crate::mode::ModeId;
use crate::random::RandomSource;
use crate::OutputDriver;

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The earliest time for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick.
    pub sleep_duration: Duration,
    /// Mode selected by the switch
    pub mode: ModeId,
    /// Whether a frame was written to the output
    pub committed: bool,
}

/// Portable loop driver that ties the switch, the engine and the pixels
/// together.
///
/// Every tick:
/// - Reads and debounces the switch
/// - Advances the engine towards the selected mode
/// - Writes the frame to the output driver if it changed
/// - Returns how long the caller should sleep
///
/// # Usage
///
/// ```ignore
/// let mut scheduler =
///     FrameScheduler::<_, _, _, 24>::new(&RingConfig::DEFAULT, driver, switch, rng)?;
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<O, S, R, const N: usize>
where
    O: OutputDriver,
    S: InputPin,
    R: RandomSource,
{
    output: O,
    switch: S,
    random: R,
    debouncer: Debouncer,
    engine: ModeEngine<N>,
    target: ModeId,
    tick_interval: Duration,
}

impl<O, S, R, const N: usize> FrameScheduler<O, S, R, N>
where
    O: OutputDriver,
    S: InputPin,
    R: RandomSource,
{
    /// Create a new scheduler, starting in [`ModeId::Off`].
    pub fn new(config: &RingConfig, output: O, switch: S, random: R) -> Result<Self, ConfigError> {
        Ok(Self {
            output,
            switch,
            random,
            debouncer: Debouncer::new(config.polarity, config.debounce),
            engine: ModeEngine::new(config)?,
            target: ModeId::Off,
            tick_interval: config.tick_interval,
        })
    }

    /// Process one tick and return timing information.
    ///
    /// A failed switch read keeps the current mode; the switch is sampled
    /// again on the next tick.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        match self.switch.is_high() {
            Ok(level) => {
                self.target = self.debouncer.advance(self.target, level, now);
            }
            Err(_error) => {
                #[cfg(feature = "esp32-log")]
                println!("[FrameScheduler.tick] switch read failed");
            }
        }

        let step = self.engine.tick(now, self.target, &mut self.random);
        if step.frame_changed {
            self.output.write(self.engine.output());
        }

        let sleep_duration = step.idle.max(self.tick_interval);
        FrameResult {
            next_deadline: now + sleep_duration,
            sleep_duration,
            mode: self.target,
            committed: step.frame_changed,
        }
    }

    /// Mode selected by the switch
    pub const fn target_mode(&self) -> ModeId {
        self.target
    }

    /// Get a reference to the engine.
    pub const fn engine(&self) -> &ModeEngine<N> {
        &self.engine
    }

    pub const fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// Get a reference to the output driver.
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the switch input.
    pub fn switch_mut(&mut self) -> &mut S {
        &mut self.switch
    }
}
