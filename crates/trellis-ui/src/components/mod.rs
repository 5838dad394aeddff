//! Trellis component wrappers organised with Atomic Design layers.

pub mod foundations;
pub mod hooks;
pub mod platform;

pub mod atoms;
pub mod molecules;
pub mod organisms;
pub mod pages;
pub mod templates;

pub use atoms::*;
pub use foundations::*;
pub use molecules::*;
pub use organisms::*;
pub use pages::*;
pub use templates::*;
