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
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! DOM-free building blocks for the Trellis component library.
//!
//! Layout: `resolver` (controlled/uncontrolled values), `overlay` (pure
//! open/close state machine), `schedule` + `driver` (executes overlay commands
//! against a scheduler and page effects), `style` (enum props to class tokens),
//! `items` (descriptors and formatting), `config`, `error`, `theme`.

pub mod config;
pub mod driver;
pub mod error;
pub mod items;
pub mod overlay;
pub mod resolver;
pub mod schedule;
pub mod style;
pub mod theme;

pub use config::{ConfigError, LibraryConfig, OverlayConfig};
pub use driver::OverlayDriver;
pub use error::{ContextError, require_parent};
pub use overlay::{OverlayCommand, OverlayPhase, OverlayTransition, OverlayVisual};
pub use resolver::{Ownership, SelectEffect, Selection, ValueResolver};
pub use schedule::{KeyHandler, PageEffects, Release, Scheduler, ScrollLock, Task, TaskId};
pub use style::StyleTokens;
pub use theme::ThemeMode;
