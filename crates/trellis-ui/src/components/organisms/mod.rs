pub mod cta_section;
pub mod drawer;
pub mod footer;
pub mod header;
pub mod hero;
pub mod modal;
pub mod stats_section;

pub use cta_section::CtaSection;
pub use drawer::{Drawer, DrawerBody, DrawerClose, DrawerFooter, DrawerHeader};
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use modal::{Modal, ModalBody, ModalClose, ModalFooter, ModalHeader};
pub use stats_section::StatsSection;
