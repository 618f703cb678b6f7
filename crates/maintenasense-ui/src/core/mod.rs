//! Core, DOM-free primitives shared across the deck.
pub mod config;
pub mod store;
pub mod theme;
