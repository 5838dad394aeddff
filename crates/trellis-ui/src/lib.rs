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
    rustdoc::bare_urls
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::needless_pass_by_value)]
//! Trellis Yew component library.
//!
//! Components follow Atomic Design layers (`atoms`, `molecules`, `organisms`,
//! `templates`, `pages`). Behaviour that does not need the DOM lives in
//! `trellis-core`; this crate only wires it to Yew hooks and markup. The
//! gallery app (`run_app`) renders every component with fixture data.

pub mod fixtures;
pub mod store;

#[cfg(target_arch = "wasm32")]
pub mod components;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

pub use trellis_core::{LibraryConfig, OverlayConfig, ThemeMode};
