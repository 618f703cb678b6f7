#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::cast_precision_loss)]
//! MaintenaSense pitch deck.
//!
//! Slide navigation, chart datasets and geometry, the chart lifecycle and the
//! prediction demo live in DOM-free modules tested on the host. The Yew views,
//! canvas backend and timers are compiled for wasm32 only.

pub mod core;
pub mod features;
pub mod models;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
