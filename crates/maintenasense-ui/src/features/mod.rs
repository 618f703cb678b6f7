//! Deck features.
pub mod charts;
pub mod prediction;
pub mod slides;
