use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use bitflags::bitflags;
use calloop::ping::Ping;

bitflags! {
    /// What changed since the host last redrew
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Widget size changed; the host must reallocate its area
        const RESIZED = 0b01;
        /// Widget appearance changed
        const NEEDS_PAINT = 0b10;
    }
}

/// Unique identifier for a widget
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WidgetId(u64);

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

impl WidgetId {
    /// Generate a new unique widget ID
    pub fn next() -> Self {
        WidgetId(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Request a repaint after the widget changed size
    pub fn request_resize(&self) {
        self.mark(ChangeFlags::RESIZED | ChangeFlags::NEEDS_PAINT);
    }

    /// Request that this widget be repainted
    pub fn request_paint(&self) {
        self.mark(ChangeFlags::NEEDS_PAINT);
    }

    fn mark(&self, flags: ChangeFlags) {
        let was_requested = PENDING.with(|pending| {
            let mut pending = pending.borrow_mut();
            pending.flags |= flags;
            pending.widgets.insert(*self);
            std::mem::replace(&mut pending.frame_requested, true)
        });
        // Only ping on first request - avoids redundant syscalls when several widgets change
        if !was_requested {
            WAKEUP_PING.with(|slot| {
                if let Some(ping) = slot.borrow().as_ref() {
                    ping.ping();
                }
            });
        }
    }
}

/// Widgets changed since the last [`take_changes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changes {
    pub flags: ChangeFlags,
    pub widgets: HashSet<WidgetId>,
}

impl Changes {
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains(&id)
    }
}

struct Pending {
    flags: ChangeFlags,
    widgets: HashSet<WidgetId>,
    frame_requested: bool,
}

// Widgets, events and animation ticks all live on the UI thread.
thread_local! {
    static PENDING: RefCell<Pending> = RefCell::new(Pending {
        flags: ChangeFlags::empty(),
        widgets: HashSet::new(),
        frame_requested: false,
    });
    static WAKEUP_PING: RefCell<Option<Ping>> = const { RefCell::new(None) };
}

/// Install the wakeup handle of the event loop driving this thread.
///
/// Returns true if another loop's handle was replaced.
pub fn init_wakeup(ping: Ping) -> bool {
    WAKEUP_PING.with(|slot| slot.borrow_mut().replace(ping).is_some())
}

pub fn clear_wakeup() {
    WAKEUP_PING.with(|slot| slot.borrow_mut().take());
}

/// Check if a frame has been requested and clear the flag
pub fn take_frame_request() -> bool {
    PENDING.with(|pending| std::mem::replace(&mut pending.borrow_mut().frame_requested, false))
}

/// Take the accumulated changes, leaving none pending.
pub fn take_changes() -> Changes {
    PENDING.with(|pending| {
        let mut pending = pending.borrow_mut();
        Changes {
            flags: std::mem::replace(&mut pending.flags, ChangeFlags::empty()),
            widgets: std::mem::take(&mut pending.widgets),
        }
    })
}

impl Default for Changes {
    fn default() -> Self {
        Self {
            flags: ChangeFlags::empty(),
            widgets: HashSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_ids_are_unique() {
        let a = WidgetId::next();
        let b = WidgetId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_request_paint_marks_dirty() {
        take_changes();
        take_frame_request();

        let id = WidgetId::next();
        id.request_paint();

        assert!(take_frame_request());
        assert!(!take_frame_request());

        let changes = take_changes();
        assert!(changes.contains(id));
        assert_eq!(changes.flags, ChangeFlags::NEEDS_PAINT);
        assert_eq!(take_changes(), Changes::default());
    }

    #[test]
    fn test_request_resize_implies_paint() {
        take_changes();

        WidgetId::next().request_resize();
        let changes = take_changes();
        assert!(changes.flags.contains(ChangeFlags::RESIZED | ChangeFlags::NEEDS_PAINT));
    }
}
