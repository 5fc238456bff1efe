//! A push button with hover highlighting and a click ripple.
//!
//! The button keeps all of its visual state itself. Input handlers flip the
//! hover/pressed flags and request a repaint; releasing the left button
//! restarts the ripple, takes its first step right away and queues a
//! [`JobType::StartAnimation`] job so the loop owner arms a frame timer. Each
//! timer tick calls [`Widget::advance_animations`], which grows the ripple by
//! one more step.
//!
//! # Example
//! ```
//! use ripple_button::prelude::*;
//!
//! let mut button = animated_button("Save").ripple_step_count(10);
//! button.on_pointer_down();
//! button.on_pointer_up(40.0, 10.0);
//! assert!(button.ripple().is_running());
//! assert_eq!(button.ripple().target(), 200.0);
//! ```

use std::time::Duration;

use crate::animation::{Ripple, RipplePhase};
use crate::invalidation::WidgetId;
use crate::jobs::{push_job, JobType};
use crate::renderer::PaintContext;
use crate::widgets::font::Font;
use crate::widgets::style::{ButtonStyle, RippleConfig};
use crate::widgets::{Color, Event, EventResponse, MouseButton, Rect, Size, Widget};

pub struct AnimatedButton {
    id: WidgetId,
    label: String,
    style: ButtonStyle,
    hovered: bool,
    pressed: bool,
    ripple: Ripple,
}

impl AnimatedButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: WidgetId::next(),
            label: label.into(),
            style: ButtonStyle::default(),
            hovered: false,
            pressed: false,
            ripple: Ripple::new(),
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.style.background = color;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.style.foreground = color;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.style.size.width = width;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.style.size.height = height;
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.style.font = font;
        self
    }

    pub fn ripple_step_count(mut self, step_count: u32) -> Self {
        self.style.ripple = self.style.ripple.step_count(step_count);
        self
    }

    pub fn ripple_fps(mut self, fps: u32) -> Self {
        self.style.ripple = self.style.ripple.frames_per_second(fps);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn button_style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn ripple_config(&self) -> &RippleConfig {
        &self.style.ripple
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn ripple(&self) -> &Ripple {
        &self.ripple
    }

    /// Where the last click was released, in local coordinates
    pub fn click_position(&self) -> (f32, f32) {
        self.ripple.center()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.id.request_paint();
    }

    /// Resize the button. A running ripple keeps its target; the next one
    /// uses the new width.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.style.size = Size::new(width, height);
        self.id.request_resize();
    }

    pub fn set_style(&mut self, style: ButtonStyle) {
        self.style = style;
        self.id.request_resize();
    }

    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
        self.id.request_paint();
    }

    pub fn on_pointer_leave(&mut self) {
        self.hovered = false;
        self.id.request_paint();
    }

    pub fn on_pointer_down(&mut self) {
        self.pressed = true;
        self.id.request_paint();
    }

    /// Release at `(x, y)` in local coordinates; the ripple starts there.
    pub fn on_pointer_up(&mut self, x: f32, y: f32) {
        self.pressed = false;
        self.start_ripple_at(x, y);
    }

    /// Restart the ripple from the last click position.
    pub fn start_ripple(&mut self) {
        let center = self.ripple.center();
        self.start_ripple_at(center.0, center.1);
    }

    fn start_ripple_at(&mut self, x: f32, y: f32) {
        if self.ripple.is_running() {
            log::debug!(
                "ripple on {:?} superseded at step {}",
                self.id,
                self.ripple.steps_taken()
            );
        }

        let width = self.style.size.width;
        let needs_ticks = self.ripple.start((x, y), width, self.style.ripple.step_count);
        log::debug!(
            "ripple on {:?} started at ({x}, {y}), target {}, step {}",
            self.id,
            self.ripple.target(),
            self.ripple.step()
        );

        // Restart even when already animating so the loop owner drops the old timer
        if needs_ticks {
            // The redraw for this release already shows the first step
            self.ripple.advance();
            push_job(self.id, JobType::StartAnimation);
        } else {
            push_job(self.id, JobType::StopAnimation);
        }
        self.id.request_paint();
    }

    /// Stop any running ripple and hide it.
    pub fn cancel_ripple(&mut self) {
        if self.ripple.phase() == RipplePhase::Running {
            log::debug!("ripple on {:?} cancelled", self.id);
            push_job(self.id, JobType::StopAnimation);
        }
        self.ripple.cancel();
        self.id.request_paint();
    }

    /// Advance the ripple by one tick and request a repaint.
    /// Returns true while more ticks are needed.
    pub fn step_ripple(&mut self) -> bool {
        if !self.ripple.is_running() {
            return false;
        }

        let running = self.ripple.advance();
        log::trace!("ripple on {:?}: diameter {}", self.id, self.ripple.diameter());
        if !running {
            log::debug!("ripple on {:?} finished", self.id);
        }
        self.id.request_paint();
        running
    }
}

/// Create a new animated button with the given label.
pub fn animated_button(label: impl Into<String>) -> AnimatedButton {
    AnimatedButton::new(label)
}

impl Widget for AnimatedButton {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn size(&self) -> Size {
        self.style.size
    }

    fn frame_interval(&self) -> Duration {
        self.style.ripple.frame_interval()
    }

    fn advance_animations(&mut self) -> bool {
        self.step_ripple()
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let bounds = Rect::from_size(self.style.size);

        ctx.clear(ctx.parent_background());
        ctx.fill_rect(bounds, self.style.background);

        if self.hovered {
            ctx.fill_rect(bounds, self.style.hover_overlay);
        }

        // Pressing hides the ripple until release
        if self.pressed {
            ctx.fill_rect(bounds, self.style.pressed_overlay);
        } else {
            let diameter = self.ripple.diameter();
            if diameter > 0.0 {
                ctx.fill_circle_clipped(
                    self.ripple.center(),
                    diameter / 2.0,
                    self.style.ripple.color,
                    bounds,
                );
            }
        }

        ctx.draw_text(&self.label, bounds, self.style.foreground, &self.style.font);
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        match event {
            Event::MouseEnter { .. } => {
                self.on_pointer_enter();
                EventResponse::Handled
            }
            Event::MouseLeave => {
                self.on_pointer_leave();
                EventResponse::Handled
            }
            Event::MouseDown {
                button: MouseButton::Left,
                ..
            } => {
                self.on_pointer_down();
                EventResponse::Handled
            }
            Event::MouseUp {
                x,
                y,
                button: MouseButton::Left,
            } => {
                self.on_pointer_up(*x, *y);
                EventResponse::Handled
            }
            _ => EventResponse::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invalidation::{take_changes as take_dirty, ChangeFlags};
    use crate::jobs::{drain_pending_jobs, Job};
    use crate::renderer::DrawCommand;

    fn paint(button: &AnimatedButton) -> PaintContext {
        let mut ctx = PaintContext::new(Color::from_rgb8(240, 240, 240));
        button.paint(&mut ctx);
        ctx
    }

    fn left(x: f32, y: f32, down: bool) -> Event {
        if down {
            Event::MouseDown {
                x,
                y,
                button: MouseButton::Left,
            }
        } else {
            Event::MouseUp {
                x,
                y,
                button: MouseButton::Left,
            }
        }
    }

    #[test]
    fn test_defaults() {
        let button = animated_button("OK");
        assert_eq!(button.size(), Size::new(100.0, 30.0));
        assert_eq!(button.label(), "OK");
        assert!(!button.is_hovered());
        assert!(!button.is_pressed());
        assert_eq!(button.ripple().phase(), RipplePhase::Idle);
    }

    #[test]
    fn test_builders() {
        let button = animated_button("OK")
            .width(160.0)
            .height(40.0)
            .background(Color::BLACK)
            .ripple_step_count(4);
        assert_eq!(button.size(), Size::new(160.0, 40.0));
        assert_eq!(button.button_style().background, Color::BLACK);
        assert_eq!(button.ripple_config().step_count, 4);
    }

    #[test]
    fn test_hover_is_idempotent() {
        let mut button = animated_button("OK");

        button.on_pointer_enter();
        button.on_pointer_enter();
        assert!(button.is_hovered());

        button.on_pointer_leave();
        assert!(!button.is_hovered());
        button.on_pointer_leave();
        assert!(!button.is_hovered());
    }

    #[test]
    fn test_input_requests_paint() {
        let mut button = animated_button("OK");
        take_dirty();

        button.on_pointer_enter();
        assert!(take_dirty().contains(button.id()));

        button.on_pointer_down();
        assert!(take_dirty().contains(button.id()));
    }

    #[test]
    fn test_press_and_release_records_origin() {
        let mut button = animated_button("OK");
        drain_pending_jobs();

        button.on_pointer_down();
        assert!(button.is_pressed());

        button.on_pointer_up(40.0, 10.0);
        assert!(!button.is_pressed());
        assert_eq!(button.click_position(), (40.0, 10.0));
        assert!(button.ripple().is_running());
        assert_eq!(button.ripple().target(), 200.0);

        assert_eq!(
            drain_pending_jobs(),
            vec![Job {
                widget_id: button.id(),
                job_type: JobType::StartAnimation,
            }]
        );
    }

    #[test]
    fn test_event_dispatch() {
        let mut button = animated_button("OK");

        assert_eq!(
            button.event(&Event::MouseEnter { x: 0.0, y: 0.0 }),
            EventResponse::Handled
        );
        assert!(button.is_hovered());

        assert_eq!(button.event(&left(3.0, 4.0, true)), EventResponse::Handled);
        assert!(button.is_pressed());

        assert_eq!(button.event(&left(3.0, 4.0, false)), EventResponse::Handled);
        assert!(!button.is_pressed());
        assert_eq!(button.click_position(), (3.0, 4.0));

        assert_eq!(button.event(&Event::MouseLeave), EventResponse::Handled);
        assert!(!button.is_hovered());

        assert_eq!(
            button.event(&Event::MouseMove { x: 1.0, y: 1.0 }),
            EventResponse::Ignored
        );
        drain_pending_jobs();
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let mut button = animated_button("OK");
        let down = Event::MouseDown {
            x: 1.0,
            y: 1.0,
            button: MouseButton::Right,
        };
        assert_eq!(button.event(&down), EventResponse::Ignored);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_default_ripple_scenario() {
        let mut button = animated_button("OK");
        button.on_pointer_up(40.0, 10.0);

        let step = button.ripple().step();
        assert!((step - 13.333).abs() < 1e-3);
        assert_eq!(button.ripple().steps_taken(), 1);

        // Release took the first increment, the timer takes the other 14
        for _ in 0..14 {
            assert!(button.advance_animations());
        }
        assert_eq!(button.ripple().steps_taken(), 15);
        assert!(button.ripple().diameter() >= 200.0);

        assert!(!button.advance_animations());
        assert_eq!(button.ripple().diameter(), 0.0);
        assert_eq!(button.ripple().phase(), RipplePhase::Finished);
        drain_pending_jobs();
    }

    #[test]
    fn test_first_paint_after_release_draws_circle_at_click() {
        let mut button = animated_button("OK");
        take_dirty();
        button.on_pointer_up(40.0, 10.0);
        assert!(take_dirty().contains(button.id()));

        let ctx = paint(&button);
        let circles: Vec<_> = ctx.circles().collect();
        assert_eq!(circles.len(), 1);
        match circles[0] {
            DrawCommand::Circle { center, radius, clip, .. } => {
                assert_eq!(*center, (40.0, 10.0));
                assert!((radius * 2.0 - button.ripple().step()).abs() < 1e-4);
                assert_eq!(*clip, Some(Rect::new(0.0, 0.0, 100.0, 30.0)));
            }
            other => panic!("unexpected command {other:?}"),
        }
        drain_pending_jobs();
    }

    #[test]
    fn test_pressed_suppresses_ripple() {
        let mut button = animated_button("OK");
        button.on_pointer_up(40.0, 10.0);
        button.advance_animations();
        button.on_pointer_down();

        let ctx = paint(&button);
        assert_eq!(ctx.circles().count(), 0);
        assert!(ctx.commands().contains(&DrawCommand::rect(
            Rect::new(0.0, 0.0, 100.0, 30.0),
            Color::BLACK.with_alpha8(30)
        )));
        drain_pending_jobs();
    }

    #[test]
    fn test_paint_order() {
        let mut button = animated_button("Go");
        button.on_pointer_enter();

        let bounds = Rect::new(0.0, 0.0, 100.0, 30.0);
        let commands = paint(&button).into_commands();
        assert_eq!(
            commands,
            vec![
                DrawCommand::Clear {
                    color: Color::from_rgb8(240, 240, 240)
                },
                DrawCommand::rect(bounds, Color::GREEN),
                DrawCommand::rect(bounds, Color::WHITE.with_alpha8(60)),
                DrawCommand::Text {
                    text: "Go".into(),
                    rect: bounds,
                    color: Color::WHITE,
                    font: Font::default(),
                },
            ]
        );
    }

    #[test]
    fn test_restart_supersedes_running_ripple() {
        let mut button = animated_button("OK");
        drain_pending_jobs();

        button.on_pointer_up(10.0, 10.0);
        for _ in 0..5 {
            button.advance_animations();
        }
        button.on_pointer_up(80.0, 20.0);

        assert_eq!(button.ripple().diameter(), button.ripple().step());
        assert_eq!(button.ripple().steps_taken(), 1);
        assert_eq!(button.click_position(), (80.0, 20.0));
        // Deduplicated: one restart request for the loop owner
        assert_eq!(drain_pending_jobs().len(), 1);
    }

    #[test]
    fn test_cancel_ripple() {
        let mut button = animated_button("OK");
        drain_pending_jobs();

        button.on_pointer_up(10.0, 10.0);
        button.cancel_ripple();

        assert_eq!(button.ripple().phase(), RipplePhase::Idle);
        let kinds: Vec<_> = drain_pending_jobs().iter().map(|j| j.job_type).collect();
        // The stop replaces the queued start
        assert_eq!(kinds, vec![JobType::StopAnimation]);
        assert!(!button.advance_animations());
    }

    #[test]
    fn test_set_size_applies_to_next_ripple() {
        let mut button = animated_button("OK");
        button.on_pointer_up(1.0, 1.0);
        take_dirty();
        button.set_size(50.0, 20.0);
        assert_eq!(button.ripple().target(), 200.0);
        assert!(take_dirty().flags.contains(ChangeFlags::RESIZED));

        button.on_pointer_up(1.0, 1.0);
        assert_eq!(button.ripple().target(), 100.0);
        drain_pending_jobs();
    }

    #[test]
    fn test_frame_interval_follows_fps() {
        let button = animated_button("OK").ripple_fps(50);
        assert_eq!(button.frame_interval(), Duration::from_millis(20));
    }
}
