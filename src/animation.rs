//! Timed animation slots
//!
//! An [`Animator`] owns a fixed number of slots. Each slot paces one
//! animation: it remembers when it was started, how long it runs and which
//! callback renders it. Progress is derived from the clock on every update,
//! so a late update never stretches an animation.

use core::fmt;

use embassy_time::{Duration, Instant};

use crate::color::{Rgbw, linear_blend};
use crate::math8::progress;

/// Interpolation task bound to a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelAnimation {
    /// Pixel index in the ring
    pub pixel: usize,
    pub start_color: Rgbw,
    pub end_color: Rgbw,
}

impl PixelAnimation {
    pub const fn new(pixel: usize) -> Self {
        Self {
            pixel,
            start_color: Rgbw::BLACK,
            end_color: Rgbw::BLACK,
        }
    }

    /// Start the next cycle from the current target
    pub fn retarget(&mut self, color: Rgbw) {
        self.start_color = self.end_color;
        self.end_color = color;
    }

    /// Interpolated color at the given progress
    pub fn color_at(&self, progress: f32) -> Rgbw {
        linear_blend(self.start_color, self.end_color, progress)
    }
}

/// Renders one animation step
///
/// Receives the owner's animation state, the slot parameters and the frame
/// to draw into.
pub type AnimationCallback<C> = fn(&mut C, AnimationParam, &mut [Rgbw]);

/// Phase of an animation at the time of the callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// First update after the slot was (re)started
    Started,
    /// Any update between start and completion
    Progress,
    /// Last update; progress is exactly 1.0
    Completed,
}

/// Parameters passed to an [`AnimationCallback`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParam {
    /// Slot index
    pub index: usize,
    /// Normalized progress, `0.0..=1.0`
    pub progress: f32,
    pub state: AnimationState,
}

impl AnimationParam {
    pub fn is_completed(&self) -> bool {
        self.state == AnimationState::Completed
    }
}

struct AnimationSlot<C> {
    callback: AnimationCallback<C>,
    duration: Duration,
    start_time: Instant,
    active: bool,
    started: bool,
}

impl<C> Clone for AnimationSlot<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for AnimationSlot<C> {}

/// Fixed set of independently timed animation slots
///
/// `C` is the state the callbacks render from, `SLOTS` the number of slots.
pub struct Animator<C, const SLOTS: usize> {
    slots: [Option<AnimationSlot<C>>; SLOTS],
}

impl<C, const SLOTS: usize> Animator<C, SLOTS> {
    pub const fn new() -> Self {
        Self {
            slots: [const { None }; SLOTS],
        }
    }

    /// Start an animation on a slot
    ///
    /// Replaces whatever the slot was running. Out of range slots are ignored.
    pub fn start(
        &mut self,
        index: usize,
        duration: Duration,
        callback: AnimationCallback<C>,
        now: Instant,
    ) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(AnimationSlot {
                callback,
                duration,
                start_time: now,
                active: true,
                started: false,
            });
        }
    }

    /// Re-arm a slot with its previous duration and callback
    ///
    /// Does nothing if the slot was never started.
    pub fn restart(&mut self, index: usize, now: Instant) {
        if let Some(Some(slot)) = self.slots.get_mut(index) {
            slot.start_time = now;
            slot.active = true;
            slot.started = false;
        }
    }

    /// Update every active slot
    ///
    /// A slot reports [`AnimationState::Completed`] exactly once and is
    /// inactive afterwards.
    pub fn update_all(&mut self, now: Instant, context: &mut C, frame: &mut [Rgbw]) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(slot) = slot else {
                continue;
            };
            if !slot.active {
                continue;
            }

            let elapsed = now.saturating_duration_since(slot.start_time);
            let progress = progress(elapsed, slot.duration);
            let state = if progress >= 1.0 {
                slot.active = false;
                AnimationState::Completed
            } else if slot.started {
                AnimationState::Progress
            } else {
                AnimationState::Started
            };
            slot.started = true;

            let param = AnimationParam {
                index,
                progress,
                state,
            };
            (slot.callback)(context, param, frame);
        }
    }

    /// Stop a single slot without invoking its callback
    pub fn stop(&mut self, index: usize) {
        if let Some(Some(slot)) = self.slots.get_mut(index) {
            slot.active = false;
        }
    }

    /// Stop all slots without invoking their callbacks
    pub fn stop_all(&mut self) {
        for slot in self.slots.iter_mut().flatten() {
            slot.active = false;
        }
    }

    /// Check if any slot has yet to report completion
    pub fn is_animating(&self) -> bool {
        self.active_count() > 0
    }

    /// Check if a single slot has yet to report completion
    pub fn is_animation_active(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(slot)) if slot.active)
    }

    /// Number of slots that have yet to report completion
    pub fn active_count(&self) -> usize {
        self.slots.iter().flatten().filter(|slot| slot.active).count()
    }
}

impl<C, const SLOTS: usize> Default for Animator<C, SLOTS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, const SLOTS: usize> Clone for Animator<C, SLOTS> {
    fn clone(&self) -> Self {
        Self { slots: self.slots }
    }
}

impl<C, const SLOTS: usize> fmt::Debug for Animator<C, SLOTS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("slots", &SLOTS)
            .field("active", &self.active_count())
            .finish()
    }
}
