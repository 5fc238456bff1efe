pub mod animated_button;
pub mod font;
pub mod style;
pub mod widget;

pub use animated_button::{animated_button, AnimatedButton};
pub use font::{Font, FontFamily, FontWeight};
pub use style::{ButtonStyle, RippleConfig};
pub use widget::{Color, Event, EventResponse, MouseButton, Rect, Size, Widget};
