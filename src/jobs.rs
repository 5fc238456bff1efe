// ============================================================================
// Main-Thread Job Queue
// ============================================================================
//
// Widgets cannot reach the event loop from their event handlers, so they push
// jobs here and the loop owner drains them after every dispatch.

use std::cell::RefCell;

use crate::invalidation::WidgetId;

thread_local! {
    /// Pending jobs in submission order, at most one per widget.
    static PENDING_JOBS: RefCell<Vec<Job>> = const { RefCell::new(Vec::new()) };
}

/// Job types handled by the loop owner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JobType {
    /// (Re)start the widget's animation timer, cancelling any running one
    StartAnimation,
    /// Cancel the widget's animation timer
    StopAnimation,
}

/// A job queued by a widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Job {
    pub widget_id: WidgetId,
    pub job_type: JobType,
}

/// Push a job to the queue.
///
/// A widget has at most one queued job: a later request replaces an earlier
/// one, so start/stop/start collapses to the final start.
pub fn push_job(widget_id: WidgetId, job_type: JobType) {
    PENDING_JOBS.with(|jobs| {
        let mut jobs = jobs.borrow_mut();
        jobs.retain(|job| job.widget_id != widget_id);
        jobs.push(Job {
            widget_id,
            job_type,
        });
    });
}

/// Drain all pending jobs
pub fn drain_pending_jobs() -> Vec<Job> {
    PENDING_JOBS.with(|jobs| std::mem::take(&mut *jobs.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_are_deduplicated() {
        drain_pending_jobs();
        let id = WidgetId::next();

        push_job(id, JobType::StartAnimation);
        push_job(id, JobType::StartAnimation);

        assert_eq!(drain_pending_jobs().len(), 1);
        assert!(drain_pending_jobs().is_empty());
    }

    #[test]
    fn test_later_job_replaces_earlier() {
        drain_pending_jobs();
        let id = WidgetId::next();

        push_job(id, JobType::StartAnimation);
        push_job(id, JobType::StopAnimation);
        push_job(id, JobType::StartAnimation);

        assert_eq!(
            drain_pending_jobs(),
            vec![Job {
                widget_id: id,
                job_type: JobType::StartAnimation,
            }]
        );
    }

    #[test]
    fn test_jobs_keep_order_across_widgets() {
        drain_pending_jobs();
        let a = WidgetId::next();
        let b = WidgetId::next();

        push_job(a, JobType::StopAnimation);
        push_job(b, JobType::StartAnimation);

        let ids: Vec<_> = drain_pending_jobs().iter().map(|j| j.widget_id).collect();
        assert_eq!(ids, vec![a, b]);
    }
}
