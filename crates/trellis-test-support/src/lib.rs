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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (tracing init, option fixtures), mocks.rs (manual
//! scheduler, recording page effects, callback recorder).

pub mod fixtures;
pub mod mocks;

pub use fixtures::{init_tracing, letter_options};
pub use mocks::{CallRecorder, ManualScheduler, RecordingPage};
