use std::time::Duration;

use crate::invalidation::WidgetId;
use crate::renderer::PaintContext;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels, as found in most desktop palettes.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Same color with an 8-bit alpha (0 = transparent, 255 = opaque).
    pub const fn with_alpha8(self, alpha: u8) -> Self {
        Self {
            a: alpha as f32 / 255.0,
            ..self
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GREEN: Color = Color::from_rgb8(0, 128, 0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer input delivered by the host. Coordinates are local to the widget.
#[derive(Debug, Clone)]
pub enum Event {
    /// Pointer moved inside the widget
    MouseMove { x: f32, y: f32 },
    /// Mouse button pressed
    MouseDown { x: f32, y: f32, button: MouseButton },
    /// Mouse button released
    MouseUp { x: f32, y: f32, button: MouseButton },
    /// Pointer entered the widget (with entry coordinates)
    MouseEnter { x: f32, y: f32 },
    /// Pointer left the widget
    MouseLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

pub trait Widget {
    fn id(&self) -> WidgetId;

    fn size(&self) -> Size;

    /// Delay between two animation frames while the widget is animating.
    fn frame_interval(&self) -> Duration {
        Duration::from_millis(16)
    }

    /// Advance animations by one frame.
    /// Returns true if animations are still active and need another frame.
    fn advance_animations(&mut self) -> bool {
        false
    }

    fn paint(&self, ctx: &mut PaintContext);

    fn event(&mut self, event: &Event) -> EventResponse {
        let _ = event;
        EventResponse::Ignored
    }
}

impl Widget for Box<dyn Widget> {
    fn id(&self) -> WidgetId {
        (**self).id()
    }
    fn size(&self) -> Size {
        (**self).size()
    }
    fn frame_interval(&self) -> Duration {
        (**self).frame_interval()
    }
    fn advance_animations(&mut self) -> bool {
        (**self).advance_animations()
    }
    fn paint(&self, ctx: &mut PaintContext) {
        (**self).paint(ctx)
    }
    fn event(&mut self, event: &Event) -> EventResponse {
        (**self).event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_rgb8() {
        let color = Color::from_rgb8(255, 0, 51);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.2);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn test_color_with_alpha8() {
        let color = Color::WHITE.with_alpha8(51);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.a, 0.2);

        assert_eq!(Color::BLACK.with_alpha8(0).a, 0.0);
        assert_eq!(Color::BLACK.with_alpha8(255).a, 1.0);
    }

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex(0x008000);
        assert_eq!(color, Color::GREEN);
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }

    #[test]
    fn test_rect_from_size() {
        let rect = Rect::from_size(Size::new(50.0, 75.0));
        assert_eq!(rect, Rect::new(0.0, 0.0, 50.0, 75.0));
    }
}
