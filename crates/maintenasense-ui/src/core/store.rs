//! Deck-wide yewdux store and its reducers.
//!
//! # Design
//! - One store holds navigation, the sensor form, the prediction slice and the error banner.
//! - Reducers are plain functions over `&mut DeckStore` so they run and test off the browser.
//! - Timers and chart handles stay out of the store; it only holds comparable state.

use crate::features::prediction::form::{FormError, SensorField, SensorReadings};
use crate::features::prediction::rule::FailurePredictor;
use crate::features::prediction::state::{
    CompletionOutcome, PendingPrediction, PredictionState, SubmissionTicket,
};
use crate::features::slides::catalog::{SlideDescriptor, descriptor_at};
use crate::features::slides::navigation::{NavAction, NavigationError, NavigationState};
#[cfg(target_arch = "wasm32")]
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global deck store.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DeckStore {
    /// Active slide.
    pub navigation: NavigationState,
    /// Raw sensor form input.
    pub form: SensorReadings,
    /// Loading flag, last result and pending ticket.
    pub prediction: PredictionState,
    /// Message shown in the error banner.
    pub error_message: Option<String>,
}

/// Dispatch handle for the deck store.
#[cfg(target_arch = "wasm32")]
pub(crate) fn deck_dispatch() -> Dispatch<DeckStore> {
    Dispatch::<DeckStore>::new()
}

/// Descriptor of the active slide.
#[must_use]
pub fn active_slide(store: &DeckStore) -> Option<&'static SlideDescriptor> {
    descriptor_at(store.navigation.active())
}

/// Advance one slide; no-op on the last slide.
pub fn go_next(store: &mut DeckStore) {
    store.navigation = store.navigation.next();
}

/// Go back one slide; no-op on the first slide.
pub fn go_previous(store: &mut DeckStore) {
    store.navigation = store.navigation.previous();
}

/// Return to the first slide.
///
/// # Errors
///
/// Returns [`NavigationError::RestartUnavailable`] off the last slide; the
/// store is left unchanged.
pub fn restart(store: &mut DeckStore) -> Result<(), NavigationError> {
    store.navigation = store.navigation.restart()?;
    Ok(())
}

/// Apply a control action from the deck header.
///
/// # Errors
///
/// Returns [`NavigationError::RestartUnavailable`] for a restart off the last
/// slide; the store is left unchanged.
pub fn navigate(store: &mut DeckStore, action: NavAction) -> Result<(), NavigationError> {
    store.navigation = store.navigation.apply(action)?;
    Ok(())
}

/// Record an edit to one form field.
pub fn set_field(store: &mut DeckStore, field: SensorField, value: impl Into<String>) {
    store.form.set(field, value);
}

/// Validate the form and start a submission.
///
/// On success the previous result and error banner are cleared, the loading
/// flag is set and the computed result is returned for delayed delivery.
/// Returns `Ok(None)` when a submission is already pending.
///
/// # Errors
///
/// Returns [`FormError`] for blank or non-numeric fields; the message is also
/// placed in the error banner and nothing is scheduled.
pub fn begin_submission(
    store: &mut DeckStore,
    predictor: &impl FailurePredictor,
) -> Result<Option<PendingPrediction>, FormError> {
    if store.prediction.pending().is_some() {
        return Ok(None);
    }
    let measurements = match store.form.parse() {
        Ok(measurements) => measurements,
        Err(err) => {
            store.error_message = Some(err.to_string());
            return Err(err);
        }
    };
    store.error_message = None;
    let Some(ticket) = store.prediction.begin() else {
        return Ok(None);
    };
    Ok(Some(PendingPrediction {
        ticket,
        result: predictor.predict(&measurements),
    }))
}

/// Publish a delayed result if its ticket is still pending.
pub fn complete_submission(store: &mut DeckStore, pending: PendingPrediction) -> CompletionOutcome {
    store.prediction.complete(pending.ticket, pending.result)
}

/// Abandon the pending submission, if any.
pub fn cancel_submission(store: &mut DeckStore) -> Option<SubmissionTicket> {
    store.prediction.cancel()
}

/// Hide the error banner.
pub fn dismiss_error(store: &mut DeckStore) {
    store.error_message = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::prediction::rule::{PredictionLabel, ThresholdRule};
    use crate::features::slides::catalog::{SLIDES, SlideId};

    fn filled(temperature: &str, vibration: &str, pressure: &str) -> DeckStore {
        let mut store = DeckStore::default();
        set_field(&mut store, SensorField::Temperature, temperature);
        set_field(&mut store, SensorField::Vibration, vibration);
        set_field(&mut store, SensorField::Pressure, pressure);
        store
    }

    #[test]
    fn navigation_reducers_walk_the_deck() {
        let mut store = DeckStore::default();
        assert_eq!(active_slide(&store).map(|s| s.id), Some(SlideId::Overview));
        go_previous(&mut store);
        assert_eq!(store.navigation.active(), 0);
        for _ in 0..20 {
            go_next(&mut store);
        }
        assert_eq!(store.navigation.active(), SLIDES.len() - 1);
        assert!(restart(&mut store).is_ok());
        assert_eq!(active_slide(&store).map(|s| s.title), Some("Project Overview"));
    }

    #[test]
    fn restart_off_last_slide_leaves_state() {
        let mut store = DeckStore::default();
        go_next(&mut store);
        let before = store.clone();
        assert!(restart(&mut store).is_err());
        assert_eq!(store, before);
        assert!(navigate(&mut store, NavAction::Restart).is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn header_actions_move_the_deck() {
        let mut store = DeckStore::default();
        assert_eq!(navigate(&mut store, NavAction::Next), Ok(()));
        assert_eq!(navigate(&mut store, NavAction::Next), Ok(()));
        assert_eq!(navigate(&mut store, NavAction::Previous), Ok(()));
        assert_eq!(active_slide(&store).map(|s| s.id), Some(SlideId::Problem));
    }

    #[test]
    fn valid_submission_round_trip() {
        let mut store = filled("95.2", "18.5", "720");
        store.error_message = Some("stale".to_string());
        let pending = begin_submission(&mut store, &ThresholdRule::default())
            .expect("valid form")
            .expect("nothing pending");
        assert!(store.prediction.loading);
        assert!(store.error_message.is_none());
        assert_eq!(pending.result.label, PredictionLabel::Failure);

        assert_eq!(
            complete_submission(&mut store, pending),
            CompletionOutcome::Applied
        );
        assert!(!store.prediction.loading);
        assert_eq!(store.prediction.result, Some(pending.result));
    }

    #[test]
    fn invalid_form_sets_banner_without_scheduling() {
        let mut store = filled("95.2", "", "720");
        let err = begin_submission(&mut store, &ThresholdRule::default())
            .expect_err("blank vibration");
        assert_eq!(store.error_message, Some(err.to_string()));
        assert!(!store.prediction.loading);
        assert!(store.prediction.pending().is_none());
        dismiss_error(&mut store);
        assert!(store.error_message.is_none());
    }

    #[test]
    fn second_submission_while_pending_is_ignored() {
        let mut store = filled("50", "5", "500");
        let rule = ThresholdRule::default();
        let first = begin_submission(&mut store, &rule)
            .expect("valid form")
            .expect("nothing pending");
        assert_eq!(begin_submission(&mut store, &rule), Ok(None));
        assert_eq!(store.prediction.pending(), Some(first.ticket));
    }

    #[test]
    fn cancelled_submission_ignores_late_completion() {
        let mut store = filled("50", "5", "500");
        let pending = begin_submission(&mut store, &ThresholdRule::default())
            .expect("valid form")
            .expect("nothing pending");
        assert_eq!(cancel_submission(&mut store), Some(pending.ticket));
        assert_eq!(
            complete_submission(&mut store, pending),
            CompletionOutcome::Stale
        );
        assert!(store.prediction.result.is_none());
    }

    #[test]
    fn result_survives_slide_changes() {
        let mut store = filled("50", "5", "500");
        let pending = begin_submission(&mut store, &ThresholdRule::default())
            .expect("valid form")
            .expect("nothing pending");
        complete_submission(&mut store, pending);
        go_next(&mut store);
        go_previous(&mut store);
        assert_eq!(
            store.prediction.result.map(|result| result.label),
            Some(PredictionLabel::NoFailure)
        );
    }
}
