//! Slide catalog, navigation and slide bodies.
//!
//! # Design
//! - The catalog is a const table; order is navigation order.
//! - Navigation is a pure state machine over indices into that table.
//! - Slide bodies are static markup and only exist on wasm.

pub mod catalog;
#[cfg(target_arch = "wasm32")]
pub(crate) mod content;
pub mod navigation;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
