//! Routing definitions for the gallery.
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/atoms")]
    Atoms,
    #[at("/molecules")]
    Molecules,
    #[at("/organisms")]
    Organisms,
    #[at("/layouts")]
    Layouts,
    #[at("/pages/landing")]
    Landing,
    #[at("/pages/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Sidebar entries in display order.
    pub(crate) const NAV: [(Self, &'static str); 7] = [
        (Self::Home, "Overview"),
        (Self::Atoms, "Atoms"),
        (Self::Molecules, "Molecules"),
        (Self::Organisms, "Organisms"),
        (Self::Layouts, "Layouts"),
        (Self::Landing, "Landing page"),
        (Self::Dashboard, "Dashboard page"),
    ];
}
