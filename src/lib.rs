#![no_std]

pub mod animation;
pub mod color;
pub mod config;
pub mod debounce;
pub mod engine;
mod filter;
pub mod frame;
pub mod frame_scheduler;
pub mod gamma;
pub mod math8;
pub mod mode;
pub mod output;
pub mod random;

pub use animation::{AnimationParam, AnimationState, Animator, PixelAnimation};
pub use config::{ConfigError, RingConfig};
pub use debounce::{Debouncer, SwitchEdge, SwitchPolarity};
pub use engine::ModeEngine;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use gamma::gamma_correct;
pub use mode::{MODE_COUNT, ModeId, ModeSlot, ModeStep};
pub use output::SmartLedsOutput;
pub use random::{RandomSource, Xorshift32};

pub use color::{Rgb, Rgbw, hsl_to_rgbw, linear_blend};
pub use embassy_time::{Duration, Instant};

/// Abstract pixel driver trait
///
/// Implement this trait to support different hardware platforms.
/// Writing the colors pushes them to the ring.
pub trait OutputDriver {
    /// Write colors to the LED ring
    fn write(&mut self, colors: &[Rgbw]);
}
