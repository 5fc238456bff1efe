//! Draw command definitions produced by widget painting.

use crate::widgets::font::Font;
use crate::widgets::{Color, Rect};

/// A single draw operation in local widget coordinates.
///
/// Commands are listed back to front; later commands are blended over
/// earlier ones using their color's alpha.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface, discarding anything drawn before.
    Clear {
        /// Fill color
        color: Color,
    },

    /// Fill a rectangle.
    Rect {
        /// Rectangle bounds in local coordinates
        rect: Rect,
        /// Fill color
        color: Color,
    },

    /// Fill a circle (used for ripple effects).
    Circle {
        /// Center point in local coordinates
        center: (f32, f32),
        /// Radius in logical pixels
        radius: f32,
        /// Fill color
        color: Color,
        /// Only the part inside this rectangle is visible
        clip: Option<Rect>,
    },

    /// Draw text centered both horizontally and vertically in `rect`.
    Text {
        /// The text string to render
        text: String,
        /// The bounding rectangle for the text in local coordinates
        rect: Rect,
        /// The text color
        color: Color,
        /// Family, weight and size
        font: Font,
    },
}

impl DrawCommand {
    /// Create a rectangle fill.
    pub fn rect(rect: Rect, color: Color) -> Self {
        Self::Rect { rect, color }
    }

    /// Create an unclipped circle.
    pub fn circle(center: (f32, f32), radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            color,
            clip: None,
        }
    }
}
