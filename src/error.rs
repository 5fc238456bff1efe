use crate::invalidation::WidgetId;

/// Failures of the event loop plumbing. Widget operations never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("event loop error: {0}")]
    EventLoop(#[from] calloop::Error),

    #[error("failed to create loop wakeup: {0}")]
    Wakeup(#[from] std::io::Error),

    #[error("failed to register the wakeup source: {0}")]
    RegisterWakeup(#[source] calloop::Error),

    #[error("failed to schedule animation for {widget:?}: {source}")]
    ScheduleAnimation {
        widget: WidgetId,
        #[source]
        source: calloop::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
