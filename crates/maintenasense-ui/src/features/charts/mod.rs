//! Chart feature: datasets, geometry and the chart lifecycle.
//!
//! # Design
//! - Datasets, label wrapping and geometry are DOM-free and tested on the host.
//! - The lifecycle manager owns every chart handle behind a backend trait.
//! - Only the canvas backend and mount-point view touch the DOM.

#[cfg(target_arch = "wasm32")]
pub(crate) mod canvas;
pub mod datasets;
pub mod labels;
pub mod layout;
pub mod lifecycle;
pub mod spec;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
