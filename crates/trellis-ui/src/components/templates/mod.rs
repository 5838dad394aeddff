//! Layout wrappers; none of them hold state.

pub mod container;
pub mod grid;
pub mod page_layout;
pub mod section;
pub mod stack;

pub use container::Container;
pub use grid::Grid;
pub use page_layout::PageLayout;
pub use section::Section;
pub use stack::Stack;
