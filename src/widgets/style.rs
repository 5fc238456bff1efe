//! Construction-time styling for [`AnimatedButton`](super::AnimatedButton).
//!
//! A style is read-only while a ripple runs; changing it through the button
//! only affects the next paint and the next ripple.
//!
//! # Example
//! ```
//! use ripple_button::prelude::*;
//!
//! let style = ButtonStyle::new()
//!     .background(Color::from_hex(0x1E88E5))
//!     .size(120.0, 36.0)
//!     .ripple(RippleConfig::new().step_count(20).frames_per_second(30));
//! assert_eq!(style.ripple.step_count, 20);
//! ```

use std::time::Duration;

use crate::widgets::font::Font;
use crate::widgets::{Color, Size};

/// Configuration for the ripple animation.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleConfig {
    /// Number of increments taken to grow from 0 to the target diameter
    pub step_count: u32,
    /// Animation ticks per second
    pub frames_per_second: u32,
    /// Fill color of the ripple circle
    pub color: Color,
}

impl RippleConfig {
    pub const DEFAULT_STEP_COUNT: u32 = 15;
    pub const DEFAULT_FPS: u32 = 60;

    /// Create a new ripple config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of increments per run. Zero is clamped to one.
    pub fn step_count(mut self, step_count: u32) -> Self {
        if step_count == 0 {
            log::warn!("ripple step count must be positive, using 1");
        }
        self.step_count = step_count.max(1);
        self
    }

    /// Set the tick rate. Zero is clamped to one.
    pub fn frames_per_second(mut self, fps: u32) -> Self {
        if fps == 0 {
            log::warn!("ripple frame rate must be positive, using 1 fps");
        }
        self.frames_per_second = fps.max(1);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Time between two ticks, `1000 / fps` milliseconds.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frames_per_second.max(1)))
    }
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            step_count: Self::DEFAULT_STEP_COUNT,
            frames_per_second: Self::DEFAULT_FPS,
            color: Color::BLACK.with_alpha8(30),
        }
    }
}

/// Colors, size, font and ripple settings of a button.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStyle {
    /// Base fill color
    pub background: Color,
    /// Label color
    pub foreground: Color,
    /// Widget size in logical pixels
    pub size: Size,
    /// Label font
    pub font: Font,
    /// Drawn over the background while hovered
    pub hover_overlay: Color,
    /// Drawn over the background while pressed
    pub pressed_overlay: Color,
    pub ripple: RippleConfig,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background: Color::GREEN,
            foreground: Color::WHITE,
            size: Size::new(100.0, 30.0),
            font: Font::default(),
            hover_overlay: Color::WHITE.with_alpha8(60),
            pressed_overlay: Color::BLACK.with_alpha8(30),
            ripple: RippleConfig::default(),
        }
    }
}

impl ButtonStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn hover_overlay(mut self, color: Color) -> Self {
        self.hover_overlay = color;
        self
    }

    pub fn pressed_overlay(mut self, color: Color) -> Self {
        self.pressed_overlay = color;
        self
    }

    pub fn ripple(mut self, ripple: RippleConfig) -> Self {
        self.ripple = ripple;
        self
    }
}
