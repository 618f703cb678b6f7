//! Slide navigation state machine.
//!
//! # Design
//! - States are slide indices; transitions move by one or jump back to zero.
//! - Transitions are pure: they take the state by value and return the next one.
//! - The index can never leave `0..len`, so lookups by index always succeed.

use crate::features::slides::catalog::SLIDES;
use thiserror::Error;

/// Navigation requests issued by the deck controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Advance one slide.
    Next,
    /// Go back one slide.
    Previous,
    /// Jump from the last slide to the first.
    Restart,
}

impl NavAction {
    /// Button label for the action.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::Previous => "Previous",
            Self::Restart => "Restart",
        }
    }
}

/// Rejected navigation requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Restart was requested before reaching the last slide.
    #[error("restart is only available on the last slide (at {active}, last is {last})")]
    RestartUnavailable {
        /// Current index.
        active: usize,
        /// Last valid index.
        last: usize,
    },
}

/// Active slide index clamped to the deck bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    active: usize,
    len: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: 0,
            len: SLIDES.len(),
        }
    }
}

impl NavigationState {
    /// Current slide index.
    #[must_use]
    pub const fn active(self) -> usize {
        self.active
    }

    /// Index of the final slide.
    #[must_use]
    pub const fn last_index(self) -> usize {
        self.len - 1
    }

    /// True on the first slide, where "Previous" is hidden.
    #[must_use]
    pub const fn is_first(self) -> bool {
        self.active == 0
    }

    /// True on the final slide, where "Next" becomes "Restart".
    #[must_use]
    pub const fn is_last(self) -> bool {
        self.active == self.last_index()
    }

    /// Advance one slide; no-op on the last slide.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.active < self.last_index() {
            Self {
                active: self.active + 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Go back one slide; no-op on the first slide.
    #[must_use]
    pub const fn previous(self) -> Self {
        if self.active > 0 {
            Self {
                active: self.active - 1,
                ..self
            }
        } else {
            self
        }
    }

    /// Return to the first slide.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::RestartUnavailable`] unless the deck is on
    /// its last slide.
    pub const fn restart(self) -> Result<Self, NavigationError> {
        if !self.is_last() {
            return Err(NavigationError::RestartUnavailable {
                active: self.active,
                last: self.last_index(),
            });
        }
        Ok(Self { active: 0, ..self })
    }

    /// Apply a navigation action from the deck controls.
    ///
    /// # Errors
    ///
    /// Propagates [`NavigationState::restart`] failures.
    pub const fn apply(self, action: NavAction) -> Result<Self, NavigationError> {
        match action {
            NavAction::Next => Ok(self.next()),
            NavAction::Previous => Ok(self.previous()),
            NavAction::Restart => self.restart(),
        }
    }

    /// Forward control shown in the header: "Next", or "Restart" on the last slide.
    #[must_use]
    pub const fn forward_action(self) -> NavAction {
        if self.is_last() {
            NavAction::Restart
        } else {
            NavAction::Next
        }
    }

    /// Actions currently exposed as buttons.
    #[must_use]
    pub fn available_actions(self) -> Vec<NavAction> {
        let mut actions = Vec::with_capacity(2);
        if !self.is_first() {
            actions.push(NavAction::Previous);
        }
        actions.push(self.forward_action());
        actions
    }

    /// Footer position label, e.g. `Slide 1 of 8: Project Overview`.
    #[must_use]
    pub fn position_label(self, title: &str) -> String {
        format!("Slide {} of {}: {title}", self.active + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: usize) -> NavigationState {
        (0..index).fold(NavigationState::default(), |state, _| state.next())
    }

    #[test]
    fn next_and_previous_stay_in_bounds_from_every_index() {
        let len = SLIDES.len();
        for start in 0..len {
            let state = at(start);
            assert_eq!(state.active(), start);
            assert!(state.next().active() <= len - 1);
            assert_eq!(state.next().active(), (start + 1).min(len - 1));
            assert_eq!(state.previous().active(), start.saturating_sub(1));
        }
    }

    #[test]
    fn boundaries_are_no_ops() {
        let first = NavigationState::default();
        assert_eq!(first.previous(), first);
        let last = at(SLIDES.len() - 1);
        assert!(last.is_last());
        assert_eq!(last.next(), last);
    }

    #[test]
    fn restart_only_from_last_slide() {
        for start in 0..SLIDES.len() - 1 {
            assert!(matches!(
                at(start).restart(),
                Err(NavigationError::RestartUnavailable { active, .. }) if active == start
            ));
        }
        let restarted = at(SLIDES.len() - 1).restart().expect("restart on last slide");
        assert_eq!(restarted.active(), 0);
    }

    #[test]
    fn controls_follow_position() {
        assert_eq!(
            NavigationState::default().available_actions(),
            vec![NavAction::Next]
        );
        assert_eq!(at(3).available_actions(), vec![NavAction::Previous, NavAction::Next]);
        assert_eq!(
            at(SLIDES.len() - 1).available_actions(),
            vec![NavAction::Previous, NavAction::Restart]
        );
        assert_eq!(NavAction::Restart.label(), "Restart");
    }

    #[test]
    fn actions_dispatch_to_transitions() {
        assert_eq!(at(2).apply(NavAction::Next), Ok(at(3)));
        assert_eq!(at(2).apply(NavAction::Previous), Ok(at(1)));
        assert!(at(2).apply(NavAction::Restart).is_err());
        let last = at(SLIDES.len() - 1);
        assert_eq!(last.apply(NavAction::Restart), Ok(NavigationState::default()));
    }

    #[test]
    fn position_label_is_one_based() {
        assert_eq!(
            at(1).position_label("Problem Statement"),
            "Slide 2 of 8: Problem Statement"
        );
    }
}
