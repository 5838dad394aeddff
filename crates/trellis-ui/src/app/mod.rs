//! Gallery application: a hash-routed shell that renders every component
//! with fixture data and records callback invocations.

mod preferences;
mod routes;
mod stories;

use crate::store::GalleryStore;
use preferences::{apply_theme, load_library_config, load_theme, persist_theme};
use routes::Route;
use stories::{
    ActionsPanel, AtomsStory, DashboardStory, LandingStory, LayoutsStory, MoleculesStory,
    OrganismsStory, Overview,
};
use trellis_core::config::LibraryConfig;
use trellis_core::theme::ThemeMode;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
struct GalleryAppProps {
    config: LibraryConfig,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Overview /> },
        Route::Atoms => html! { <AtomsStory /> },
        Route::Molecules => html! { <MoleculesStory /> },
        Route::Organisms => html! { <OrganismsStory /> },
        Route::Layouts => html! { <LayoutsStory /> },
        Route::Landing => html! { <LandingStory /> },
        Route::Dashboard => html! { <DashboardStory /> },
        Route::NotFound => html! {
            <div class="p-10">
                <h1 class="text-2xl font-bold">{"Not found"}</h1>
                <p class="opacity-70">{"Use the navigation to pick a story."}</p>
            </div>
        },
    }
}

#[function_component(GalleryNav)]
fn gallery_nav() -> Html {
    let current = use_route::<Route>();
    html! {
        <ul class="menu w-full">
            {for Route::NAV.iter().map(|(route, label)| {
                let active = current == Some(*route);
                html! {
                    <li key={*label}>
                        <Link<Route> to={*route} classes={classes!(active.then_some("menu-active"))}>
                            {*label}
                        </Link<Route>>
                    </li>
                }
            })}
        </ul>
    }
}

#[function_component(GalleryApp)]
fn gallery_app(props: &GalleryAppProps) -> Html {
    let (store, dispatch) = use_store::<GalleryStore>();
    let stored_theme = {
        let fallback = props.config.theme;
        use_memo((), move |_| load_theme(fallback))
    };
    let theme = store.theme.unwrap_or(*stored_theme);
    let chosen = store.theme.is_some();

    use_effect_with((theme, chosen), |(theme, chosen)| {
        apply_theme(*theme);
        if *chosen {
            persist_theme(*theme);
        }
        || ()
    });

    let toggle_theme = Callback::from(move |_: MouseEvent| {
        dispatch.reduce_mut(|store| store.theme = Some(theme.toggled()));
    });

    html! {
        <ContextProvider<LibraryConfig> context={props.config}>
            <HashRouter>
                <div class="flex min-h-screen">
                    <aside class="w-60 shrink-0 border-r border-base-300 bg-base-200 flex flex-col">
                        <div class="flex items-center justify-between px-4 py-5">
                            <span class="text-lg font-bold">{"Trellis"}</span>
                            <button
                                type="button"
                                class="btn btn-ghost btn-sm btn-circle"
                                aria-label="Toggle theme"
                                onclick={toggle_theme}
                            >
                                <span class={classes!(
                                    "iconify",
                                    "size-4",
                                    if theme == ThemeMode::Dark { "lucide--sun" } else { "lucide--moon" }
                                )}></span>
                            </button>
                        </div>
                        <GalleryNav />
                    </aside>
                    <div class="flex flex-1 min-w-0 flex-col">
                        <main class="flex-1 overflow-y-auto">
                            <Switch<Route> render={switch} />
                        </main>
                        <ActionsPanel />
                    </div>
                </div>
            </HashRouter>
        </ContextProvider<LibraryConfig>>
    }
}

/// Mount the gallery on `#root`, or on `<body>` when the page has no root element.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let props = GalleryAppProps {
        config: load_library_config(),
    };
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<GalleryApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<GalleryApp>::with_props(props).render();
    }
}
