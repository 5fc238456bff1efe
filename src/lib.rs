//! An animated push button for embedding in a host UI loop.
//!
//! [`AnimatedButton`](widgets::AnimatedButton) draws a filled rectangle with a
//! centered label, tints itself while hovered or pressed, and plays a ripple
//! (an expanding translucent circle) from the point where it was clicked.
//! Painting produces [`DrawCommand`](renderer::DrawCommand)s for the host to
//! replay; [`App`] drives the ripple frames as `calloop` timers on the UI
//! thread.

pub mod animation;
pub mod app;
pub mod error;
pub mod invalidation;
pub mod jobs;
pub mod renderer;
pub mod widgets;

pub use app::{App, AppConfig, Redraw};
pub use error::{Error, Result};

pub mod prelude {
    pub use crate::animation::{Ripple, RipplePhase};
    pub use crate::invalidation::{take_frame_request, WidgetId};
    pub use crate::renderer::{DrawCommand, PaintContext};
    pub use crate::widgets::{
        animated_button, AnimatedButton, ButtonStyle, Color, Event, EventResponse, Font,
        FontFamily, FontWeight, MouseButton, Rect, RippleConfig, Size, Widget,
    };
    pub use crate::{App, AppConfig, Redraw};
}
