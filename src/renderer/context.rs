//! Recording paint surface handed to widgets.

use crate::widgets::font::Font;
use crate::widgets::{Color, Rect};

use super::commands::DrawCommand;

/// Painting context for a single widget.
///
/// Widgets draw in LOCAL coordinates (0,0 is the widget's top-left). The
/// context records the commands in order; the host replays them onto its
/// real surface.
///
/// # Example
///
/// ```
/// use ripple_button::prelude::*;
///
/// let mut ctx = PaintContext::new(Color::BLACK);
/// ctx.clear(ctx.parent_background());
/// ctx.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
/// assert_eq!(ctx.commands().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PaintContext {
    parent_background: Color,
    commands: Vec<DrawCommand>,
}

impl PaintContext {
    pub fn new(parent_background: Color) -> Self {
        Self {
            parent_background,
            commands: Vec::new(),
        }
    }

    /// Background color of the widget's parent, as reported by the host.
    pub fn parent_background(&self) -> Color {
        self.parent_background
    }

    pub fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear { color });
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::rect(rect, color));
    }

    pub fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        self.commands.push(DrawCommand::circle(center, radius, color));
    }

    /// Fill a circle, showing only the part inside `clip`.
    pub fn fill_circle_clipped(
        &mut self,
        center: (f32, f32),
        radius: f32,
        color: Color,
        clip: Rect,
    ) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            clip: Some(clip),
        });
    }

    pub fn draw_text(&mut self, text: &str, rect: Rect, color: Color, font: &Font) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            rect,
            color,
            font: font.clone(),
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Iterate over the circles drawn so far
    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Circle { .. }))
    }
}
