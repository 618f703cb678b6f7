//! Prediction demo: form parsing, the threshold rule and the deferred result.
//!
//! # Design
//! - The rule and form parsing are pure and unit tested.
//! - Submission state lives in the deck store; the timer lives with the view.
//! - A completion is checked against its ticket before it is published.

pub mod form;
pub mod rule;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod task;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
