//! Single-threaded host loop for one widget.
//!
//! [`App`] owns a `calloop` event loop and the widget it hosts. Pointer events
//! from the embedding framework go through [`App::dispatch_event`]; animation
//! frames are `calloop` timers on the same loop, so the widget is only ever
//! touched from this thread. Each widget has at most one frame timer: starting
//! a new animation removes the previous timer before registering a new one.
//!
//! Redraw requests and animation jobs are queued per thread, so a thread hosts
//! at most one [`App`] at a time.
//!
//! # Example
//! ```no_run
//! use std::time::Duration;
//! use ripple_button::prelude::*;
//!
//! let mut app = App::new(animated_button("Save")).unwrap();
//! app.dispatch_event(&Event::MouseUp { x: 40.0, y: 10.0, button: MouseButton::Left })
//!     .unwrap();
//! while app.is_animating() {
//!     app.pump(Some(Duration::from_millis(100))).unwrap();
//!     if let Some(redraw) = app.take_redraw() {
//!         // replay `redraw.frame.commands()` onto the real surface
//!         let _ = redraw;
//!     }
//! }
//! ```

use std::time::{Duration, Instant};

use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, RegistrationToken};

use crate::error::{Error, Result};
use crate::invalidation::{clear_wakeup, init_wakeup, take_changes, take_frame_request, ChangeFlags};
use crate::jobs::{drain_pending_jobs, JobType};
use crate::renderer::PaintContext;
use crate::widgets::{Color, Event, EventResponse, Widget};

pub struct AppConfig {
    /// Background of the parent the widget sits on
    pub background_color: Color,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            background_color: Color::from_rgb8(240, 240, 240),
        }
    }
}

/// A frame painted in response to widget changes.
#[derive(Debug)]
pub struct Redraw {
    pub frame: PaintContext,
    /// The widget changed size; the host must reallocate its area first
    pub resized: bool,
}

/// Loop data handed to every `calloop` callback.
struct Stage<W> {
    widget: W,
    /// Frame timer of the running animation, if any
    animation: Option<RegistrationToken>,
}

/// Hosts one widget on a `calloop` loop.
///
/// Only one `App` may live on a thread at a time.
pub struct App<W: Widget + 'static> {
    config: AppConfig,
    event_loop: EventLoop<'static, Stage<W>>,
    stage: Stage<W>,
}

impl<W: Widget + 'static> App<W> {
    pub fn new(widget: W) -> Result<Self> {
        Self::with_config(AppConfig::default(), widget)
    }

    pub fn with_config(config: AppConfig, widget: W) -> Result<Self> {
        let event_loop = EventLoop::try_new()?;

        let (ping, ping_source) = calloop::ping::make_ping()?;
        event_loop
            .handle()
            .insert_source(ping_source, |_, _, _| {
                log::trace!("loop woken for a new frame");
            })
            .map_err(|e| Error::RegisterWakeup(e.error))?;
        let replaced = init_wakeup(ping);
        debug_assert!(!replaced, "only one App can be hosted per thread");

        let size = widget.size();
        log::info!(
            "hosting widget {:?} ({}x{})",
            widget.id(),
            size.width,
            size.height
        );

        // First frame
        widget.id().request_paint();

        Ok(Self {
            config,
            event_loop,
            stage: Stage {
                widget,
                animation: None,
            },
        })
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.config.background_color = color;
        self
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.config.background_color = color;
        self.stage.widget.id().request_paint();
    }

    pub fn widget(&self) -> &W {
        &self.stage.widget
    }

    /// Direct access to the widget. Jobs it queues are handled on the next
    /// [`pump`](Self::pump) or [`dispatch_event`](Self::dispatch_event).
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.stage.widget
    }

    /// Run `f` on the widget and handle the jobs it queued right away.
    pub fn update<F, R>(&mut self, f: F) -> Result<R>
    where
        F: FnOnce(&mut W) -> R,
    {
        let result = f(&mut self.stage.widget);
        self.process_jobs()?;
        Ok(result)
    }

    /// Forward a pointer event to the widget.
    pub fn dispatch_event(&mut self, event: &Event) -> Result<EventResponse> {
        let response = self.stage.widget.event(event);
        self.process_jobs()?;
        Ok(response)
    }

    /// Whether a frame timer is currently registered
    pub fn is_animating(&self) -> bool {
        self.stage.animation.is_some()
    }

    /// Paint the widget onto a fresh recording surface.
    pub fn paint(&self) -> PaintContext {
        let mut ctx = PaintContext::new(self.config.background_color);
        self.stage.widget.paint(&mut ctx);
        ctx
    }

    /// Paint the widget if it requested a redraw since the last call.
    pub fn take_redraw(&mut self) -> Option<Redraw> {
        if !take_frame_request() {
            return None;
        }
        let changes = take_changes();
        if !changes.contains(self.stage.widget.id()) {
            return None;
        }
        Some(Redraw {
            frame: self.paint(),
            resized: changes.flags.contains(ChangeFlags::RESIZED),
        })
    }

    /// Wait up to `timeout` for loop events (timers, wakeups) and run them.
    pub fn pump(&mut self, timeout: Option<Duration>) -> Result<()> {
        self.process_jobs()?;
        self.event_loop.dispatch(timeout, &mut self.stage)?;
        self.process_jobs()
    }

    /// Pump until the running animation finishes.
    ///
    /// Returns false if it was still running when `max_wait` elapsed.
    pub fn run_until_idle(&mut self, max_wait: Duration) -> Result<bool> {
        let deadline = Instant::now() + max_wait;
        self.process_jobs()?;

        while self.is_animating() {
            let now = Instant::now();
            if now >= deadline {
                log::warn!(
                    "animation of {:?} still running after {:?}",
                    self.stage.widget.id(),
                    max_wait
                );
                return Ok(false);
            }
            self.pump(Some(deadline - now))?;
        }
        Ok(true)
    }

    fn process_jobs(&mut self) -> Result<()> {
        let id = self.stage.widget.id();
        for job in drain_pending_jobs() {
            if job.widget_id != id {
                log::warn!(
                    "dropping {:?} job for unknown widget {:?}",
                    job.job_type,
                    job.widget_id
                );
                continue;
            }
            match job.job_type {
                JobType::StartAnimation => self.start_animation()?,
                JobType::StopAnimation => self.stop_animation(),
            }
        }
        Ok(())
    }

    fn start_animation(&mut self) -> Result<()> {
        // Never two timers for one widget
        self.stop_animation();

        let widget = self.stage.widget.id();
        let interval = self.stage.widget.frame_interval();
        let token = self
            .event_loop
            .handle()
            .insert_source(
                Timer::from_duration(interval),
                move |_deadline, _, stage: &mut Stage<W>| {
                    if stage.widget.advance_animations() {
                        TimeoutAction::ToDuration(interval)
                    } else {
                        stage.animation = None;
                        TimeoutAction::Drop
                    }
                },
            )
            .map_err(|e| Error::ScheduleAnimation {
                widget,
                source: e.error,
            })?;

        log::debug!("frame timer for {widget:?} every {interval:?}");
        self.stage.animation = Some(token);
        Ok(())
    }

    fn stop_animation(&mut self) {
        if let Some(token) = self.stage.animation.take() {
            log::debug!("frame timer for {:?} removed", self.stage.widget.id());
            self.event_loop.handle().remove(token);
        }
    }
}

impl<W: Widget + 'static> Drop for App<W> {
    fn drop(&mut self) {
        self.stop_animation();
        clear_wakeup();
    }
}
