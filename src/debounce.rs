//! Mode switch debouncing
//!
//! A mechanical switch bounces for a few milliseconds on every transition.
//! [`Debouncer`] turns the raw level into clean, edge-triggered events and
//! advances the lamp mode on every release.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::mode::ModeId;

/// Default minimum time between two accepted transitions
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(5);

/// Describes how the switch is physically wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchPolarity {
    /// Switch connects the pin to voltage when pressed. Pin reads HIGH when
    /// pressed, so a release drives it to 0.
    #[default]
    PressedHigh,
    /// Switch connects the pin to ground when pressed (pull-up wiring).
    PressedLow,
}

impl SwitchPolarity {
    /// Check if a raw level means the switch is held down
    pub const fn is_pressed(self, level: bool) -> bool {
        match self {
            Self::PressedHigh => level,
            Self::PressedLow => !level,
        }
    }

    /// Raw level of a released switch
    pub const fn released_level(self) -> bool {
        !self.is_pressed(true)
    }
}

/// Debouncer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebouncePhase {
    /// No transition accepted within the debounce window
    Stable,
    /// A transition was accepted recently; further changes are bounce
    Settling,
}

/// Accepted switch transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchEdge {
    Pressed,
    Released,
}

/// Last accepted switch state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchEdgeState {
    /// Last accepted raw level
    pub level: bool,
    pub phase: DebouncePhase,
    /// Time of the last accepted transition
    pub last_change: Option<Instant>,
}

/// Edge-triggered switch debouncer
#[derive(Debug, Clone)]
pub struct Debouncer {
    state: SwitchEdgeState,
    polarity: SwitchPolarity,
    window: Duration,
}

impl Debouncer {
    /// Create a debouncer for a released switch
    pub const fn new(polarity: SwitchPolarity, window: Duration) -> Self {
        Self {
            state: SwitchEdgeState {
                level: polarity.released_level(),
                phase: DebouncePhase::Stable,
                last_change: None,
            },
            polarity,
            window,
        }
    }

    /// Feed a raw level sample
    ///
    /// Returns the accepted edge, if any. Changes within the debounce window
    /// of the last accepted transition are ignored.
    pub fn poll(&mut self, level: bool, now: Instant) -> Option<SwitchEdge> {
        if level == self.state.level {
            if self.state.phase == DebouncePhase::Settling && !self.is_within_window(now) {
                self.state.phase = DebouncePhase::Stable;
            }
            return None;
        }

        if self.is_within_window(now) {
            return None;
        }

        self.state.level = level;
        self.state.last_change = Some(now);
        self.state.phase = DebouncePhase::Settling;

        let edge = if self.polarity.is_pressed(level) {
            SwitchEdge::Pressed
        } else {
            SwitchEdge::Released
        };
        #[cfg(feature = "esp32-log")]
        println!("[Debouncer.poll] accepted {:?} at {}ms", edge, now.as_millis());

        Some(edge)
    }

    /// Feed a raw level sample and return the mode to show
    ///
    /// Every accepted release advances to the next mode.
    pub fn advance(&mut self, mode: ModeId, level: bool, now: Instant) -> ModeId {
        match self.poll(level, now) {
            Some(SwitchEdge::Released) => mode.next(),
            _ => mode,
        }
    }

    /// Last accepted raw level
    pub const fn level(&self) -> bool {
        self.state.level
    }

    /// Check if the switch is held down
    pub const fn is_pressed(&self) -> bool {
        self.polarity.is_pressed(self.state.level)
    }

    pub const fn phase(&self) -> DebouncePhase {
        self.state.phase
    }

    pub const fn state(&self) -> SwitchEdgeState {
        self.state
    }

    fn is_within_window(&self, now: Instant) -> bool {
        self.state
            .last_change
            .is_some_and(|last| now.saturating_duration_since(last) < self.window)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SwitchPolarity::default(), DEFAULT_DEBOUNCE)
    }
}
