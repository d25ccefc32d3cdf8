//! Desktop preview app for the ring lamp
//!
//! Simulates the pixel ring in a window. A momentary button stands in for
//! the mode switch and drives the same scheduler the firmware runs.

use std::convert::Infallible;
use std::time::{Instant as StdInstant, SystemTime, UNIX_EPOCH};

use eframe::egui::{self};
use embedded_hal::digital::{ErrorType, InputPin};
use ring_lamp::{FrameScheduler, Instant, OutputDriver, RingConfig, Rgbw, Xorshift32};

/// Number of pixels in the simulated ring
const RING_SIZE: usize = 24;

/// Radius of each pixel in points
const PIXEL_RADIUS: f32 = 14.0;

/// Upper bound of scheduler ticks per UI frame
const MAX_TICKS_PER_FRAME: usize = 2_000;

/// Switch state shared with the scheduler
#[derive(Debug, Default)]
struct SimulatedSwitch {
    pressed: bool,
}

impl ErrorType for SimulatedSwitch {
    type Error = Infallible;
}

impl InputPin for SimulatedSwitch {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pressed)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.pressed)
    }
}

/// Keeps the last frame written by the scheduler
#[derive(Debug)]
struct PreviewOutput {
    pixels: [Rgbw; RING_SIZE],
    writes: u64,
}

impl OutputDriver for PreviewOutput {
    fn write(&mut self, colors: &[Rgbw]) {
        for (pixel, color) in self.pixels.iter_mut().zip(colors) {
            *pixel = *color;
        }
        self.writes += 1;
    }
}

type Scheduler = FrameScheduler<PreviewOutput, SimulatedSwitch, Xorshift32, RING_SIZE>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Profile {
    Release,
    Debug,
}

impl Profile {
    fn config(self, gamma: bool) -> RingConfig {
        let base = match self {
            Self::Release => RingConfig::RELEASE,
            Self::Debug => RingConfig::DEBUG,
        };
        RingConfig { gamma, ..base }
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_title("Ring Lamp Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "ring-lamp-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    scheduler: Scheduler,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Time of the next scheduler tick
    next_tick_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether time is running
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    profile: Profile,
    /// Whether the scheduler applies gamma correction
    apply_gamma: bool,
}

impl PreviewApp {
    fn new() -> Self {
        let profile = Profile::Release;
        Self {
            scheduler: build_scheduler(profile.config(false)),
            t_ms: 0,
            next_tick_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            profile,
            apply_gamma: false,
        }
    }

    /// Start over with a fresh scheduler
    fn reset(&mut self) {
        self.scheduler = build_scheduler(self.profile.config(self.apply_gamma));
        self.t_ms = 0;
        self.next_tick_ms = 0;
        self.last_frame = StdInstant::now();
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                delta_ms_f64.max(0.0)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.saturating_add(delta_ms);
        }
    }

    /// Run every tick that is due by the current synthetic time
    fn run_scheduler(&mut self) {
        for _ in 0..MAX_TICKS_PER_FRAME {
            if self.next_tick_ms > self.t_ms {
                return;
            }
            let result = self.scheduler.tick(Instant::from_millis(self.next_tick_ms));
            self.next_tick_ms = result.next_deadline.as_millis();
        }
        // Too far behind; skip ahead instead of catching up
        self.next_tick_ms = self.t_ms;
    }
}

fn build_scheduler(config: RingConfig) -> Scheduler {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |elapsed| elapsed.subsec_nanos());

    let output = PreviewOutput {
        pixels: [Rgbw::BLACK; RING_SIZE],
        writes: 0,
    };
    match FrameScheduler::new(
        &config,
        output,
        SimulatedSwitch::default(),
        Xorshift32::new(seed),
    ) {
        Ok(scheduler) => scheduler,
        Err(error) => panic!("invalid preview config: {error}"),
    }
}

/// Approximate the look of an RGBW pixel on screen
fn display_color(pixel: Rgbw) -> egui::Color32 {
    egui::Color32::from_rgb(
        pixel.r.saturating_add(pixel.w),
        pixel.g.saturating_add(pixel.w),
        pixel.b.saturating_add(pixel.w),
    )
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.run_scheduler();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⏮ Reset").clicked() {
                    self.reset();
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }

                ui.add_space(8.0);

                let secs = self.t_ms / 1000;
                let ms = self.t_ms % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=20.0).logarithmic(true));
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Profile:");
                let old_profile = self.profile;
                ui.selectable_value(&mut self.profile, Profile::Release, "release");
                ui.selectable_value(&mut self.profile, Profile::Debug, "debug");

                ui.add_space(8.0);

                let old_apply_gamma = self.apply_gamma;
                ui.checkbox(&mut self.apply_gamma, "Gamma");

                if self.profile != old_profile || self.apply_gamma != old_apply_gamma {
                    self.reset();
                }
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let button = ui.add_sized([120.0, 32.0], egui::Button::new("Switch"));
                self.scheduler.switch_mut().pressed = button.is_pointer_button_down_on();

                ui.add_space(8.0);

                let config = self.scheduler.engine().config();
                let active = self
                    .scheduler
                    .engine()
                    .active_mode()
                    .map_or("-", |mode| mode.as_str());
                ui.label(format!(
                    "Mode: {} (active: {})  switch GPIO{}  pixels GPIO{}  writes: {}",
                    self.scheduler.target_mode().as_str(),
                    active,
                    config.switch_pin,
                    config.pixel_pin,
                    self.scheduler.output().writes,
                ));
            });

            ui.add_space(16.0);

            // === Ring Display ===
            let size = ui.available_width().min(ui.available_height());
            let (response, painter) =
                ui.allocate_painter(egui::vec2(size, size), egui::Sense::hover());
            let center = response.rect.center();
            let radius = size / 2.0 - PIXEL_RADIUS * 2.0;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in self.scheduler.output().pixels.iter().enumerate() {
                let angle = i as f32 / RING_SIZE as f32 * std::f32::consts::TAU;
                let position = center + radius * egui::vec2(angle.sin(), -angle.cos());
                painter.circle_filled(position, PIXEL_RADIUS, display_color(*pixel));
                painter.circle_stroke(
                    position,
                    PIXEL_RADIUS,
                    egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                );
            }
        });
    }
}
