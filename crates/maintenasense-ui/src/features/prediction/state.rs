//! Prediction slice: loading flag, last result and the pending submission.
//!
//! # Design
//! - Each submission gets a fresh [`SubmissionTicket`]; a completion is applied
//!   only while its ticket is still the pending one.
//! - Only one submission may be pending at a time.
//! - Cancelling clears the pending ticket, so a late completion is dropped.

use crate::features::prediction::rule::PredictionResult;
use std::fmt;

/// Identifies one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

impl fmt::Display for SubmissionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A computed result waiting out the artificial delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingPrediction {
    /// Ticket to present on completion.
    pub ticket: SubmissionTicket,
    /// Result to publish once the delay elapses.
    pub result: PredictionResult,
}

/// What happened to a completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The result was published.
    Applied,
    /// The ticket was not pending (cancelled or superseded); nothing changed.
    Stale,
}

/// Prediction state shared by the form and the result card.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionState {
    /// True while a submission is waiting out the delay.
    pub loading: bool,
    /// Most recent published result.
    pub result: Option<PredictionResult>,
    pending: Option<SubmissionTicket>,
    issued: u64,
}

impl PredictionState {
    /// Start a submission: clear the previous result and mark loading.
    ///
    /// Returns `None` when a submission is already pending.
    pub fn begin(&mut self) -> Option<SubmissionTicket> {
        if self.pending.is_some() {
            return None;
        }
        self.issued += 1;
        let ticket = SubmissionTicket(self.issued);
        self.pending = Some(ticket);
        self.loading = true;
        self.result = None;
        Some(ticket)
    }

    /// Publish `result` if `ticket` is still pending.
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        result: PredictionResult,
    ) -> CompletionOutcome {
        if self.pending != Some(ticket) {
            return CompletionOutcome::Stale;
        }
        self.pending = None;
        self.loading = false;
        self.result = Some(result);
        CompletionOutcome::Applied
    }

    /// Drop the pending submission, if any. Returns the cancelled ticket.
    pub fn cancel(&mut self) -> Option<SubmissionTicket> {
        let cancelled = self.pending.take();
        if cancelled.is_some() {
            self.loading = false;
        }
        cancelled
    }

    /// Ticket currently pending.
    #[must_use]
    pub const fn pending(&self) -> Option<SubmissionTicket> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::prediction::rule::PredictionLabel;

    const FAILURE: PredictionResult = PredictionResult {
        label: PredictionLabel::Failure,
        probability: 0.95,
    };

    #[test]
    fn begin_clears_previous_result() {
        let mut state = PredictionState::default();
        let ticket = state.begin().expect("first submission");
        assert!(state.loading);
        assert_eq!(state.complete(ticket, FAILURE), CompletionOutcome::Applied);
        assert_eq!(state.result, Some(FAILURE));
        assert!(!state.loading);

        state.begin().expect("second submission");
        assert!(state.result.is_none());
        assert!(state.loading);
    }

    #[test]
    fn double_submission_is_rejected() {
        let mut state = PredictionState::default();
        let ticket = state.begin().expect("first submission");
        assert_eq!(state.begin(), None);
        assert_eq!(state.pending(), Some(ticket));
    }

    #[test]
    fn cancelled_completion_is_stale() {
        let mut state = PredictionState::default();
        let ticket = state.begin().expect("submission");
        assert_eq!(state.cancel(), Some(ticket));
        assert!(!state.loading);
        assert_eq!(state.complete(ticket, FAILURE), CompletionOutcome::Stale);
        assert!(state.result.is_none());
        assert_eq!(state.cancel(), None);
    }

    #[test]
    fn superseded_ticket_cannot_publish() {
        let mut state = PredictionState::default();
        let old = state.begin().expect("first");
        state.cancel();
        let new = state.begin().expect("second");
        assert_ne!(old, new);
        assert_eq!(old.to_string(), "#1");
        assert_eq!(new.to_string(), "#2");
        assert_eq!(state.complete(old, FAILURE), CompletionOutcome::Stale);
        assert!(state.loading);
        assert_eq!(state.complete(new, FAILURE), CompletionOutcome::Applied);
    }
}
