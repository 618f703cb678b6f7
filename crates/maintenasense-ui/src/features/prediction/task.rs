//! Deferred prediction completion.

use crate::features::prediction::state::{PendingPrediction, SubmissionTicket};
use gloo_timers::callback::Timeout;

/// Timer that delivers a pending prediction after the configured delay.
///
/// Dropping the task (or calling [`DeferredPrediction::cancel`]) clears the
/// timer, so the completion never fires.
pub(crate) struct DeferredPrediction {
    ticket: SubmissionTicket,
    timer: Option<Timeout>,
}

impl DeferredPrediction {
    /// Schedule `on_complete` to receive `pending` after `delay_ms`.
    pub(crate) fn schedule<F>(pending: PendingPrediction, delay_ms: u32, on_complete: F) -> Self
    where
        F: FnOnce(PendingPrediction) + 'static,
    {
        Self {
            ticket: pending.ticket,
            timer: Some(Timeout::new(delay_ms, move || on_complete(pending))),
        }
    }

    /// Ticket this task will deliver.
    pub(crate) const fn ticket(&self) -> SubmissionTicket {
        self.ticket
    }

    /// Stop the timer. Returns false if it was already cancelled.
    pub(crate) fn cancel(&mut self) -> bool {
        // Dropping a gloo Timeout clears it.
        self.timer.take().is_some()
    }
}
