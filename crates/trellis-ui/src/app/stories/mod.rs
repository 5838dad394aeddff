//! Story pages and the helpers they share.
//!
//! # Design
//! - Stories record every callback they receive in the store's action log,
//!   rendered by [`ActionsPanel`].
//! - Fixtures are parsed once per story mount; a broken document logs an
//!   error and renders empty collections.

mod atoms;
mod layouts;
mod molecules;
mod organisms;
mod pages;

pub(crate) use atoms::AtomsStory;
pub(crate) use layouts::LayoutsStory;
pub(crate) use molecules::MoleculesStory;
pub(crate) use organisms::OrganismsStory;
pub(crate) use pages::{DashboardStory, LandingStory};

use crate::app::routes::Route;
use crate::fixtures::{self, GalleryFixtures};
use crate::store::GalleryStore;
use gloo::console;
use std::fmt::Debug;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_dispatch, use_selector};

/// Records callback payloads into the gallery action log.
#[derive(Clone)]
pub(crate) struct ActionRecorder {
    dispatch: Dispatch<GalleryStore>,
}

impl ActionRecorder {
    /// Callback that logs each payload under `source`.
    pub(crate) fn callback<T: Debug + 'static>(&self, source: &'static str) -> Callback<T> {
        let dispatch = self.dispatch.clone();
        Callback::from(move |payload: T| {
            let payload = format!("{payload:?}");
            dispatch.reduce_mut(|store| store.actions.record(source, payload));
        })
    }
}

#[hook]
pub(crate) fn use_actions() -> ActionRecorder {
    ActionRecorder {
        dispatch: use_dispatch::<GalleryStore>(),
    }
}

#[hook]
pub(crate) fn use_fixtures() -> Rc<GalleryFixtures> {
    use_memo((), |_| {
        fixtures::load().unwrap_or_else(|err| {
            console::error!(format!("gallery fixtures failed to parse: {err}"));
            GalleryFixtures::default()
        })
    })
}

#[derive(Properties, PartialEq)]
pub(crate) struct StoryPageProps {
    pub(crate) title: AttrValue,
    #[prop_or_default]
    pub(crate) description: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(StoryPage)]
pub(crate) fn story_page(props: &StoryPageProps) -> Html {
    html! {
        <div class="flex flex-col gap-10 p-8">
            <header class="flex flex-col gap-1">
                <h1 class="text-3xl font-bold">{props.title.clone()}</h1>
                {props.description.clone().map(|text| html! { <p class="opacity-70">{text}</p> }).unwrap_or_default()}
            </header>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StoryProps {
    pub(crate) name: AttrValue,
    #[prop_or_default]
    pub(crate) note: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) children: Children,
}

/// One labelled demo with a bordered preview area.
#[function_component(Story)]
pub(crate) fn story(props: &StoryProps) -> Html {
    html! {
        <section class="flex flex-col gap-3">
            <div>
                <h2 class="text-lg font-semibold">{props.name.clone()}</h2>
                {props.note.clone().map(|text| html! { <p class="text-sm opacity-70">{text}</p> }).unwrap_or_default()}
            </div>
            <div class="rounded-box border border-base-300 bg-base-100 p-6">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[function_component(Overview)]
pub(crate) fn overview() -> Html {
    html! {
        <StoryPage
            title="Trellis gallery"
            description="Every component rendered with fixture data. Callback invocations appear in the actions panel."
        >
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3">
                {for Route::NAV.iter().skip(1).map(|(route, label)| html! {
                    <Link<Route> to={*route} classes="card card-border bg-base-100 hover:shadow">
                        <div class="card-body">
                            <h2 class="card-title">{*label}</h2>
                        </div>
                    </Link<Route>>
                })}
            </div>
        </StoryPage>
    }
}

#[function_component(ActionsPanel)]
pub(crate) fn actions_panel() -> Html {
    let log = use_selector(|store: &GalleryStore| store.actions.clone());
    let dispatch = use_dispatch::<GalleryStore>();
    let clear = Callback::from(move |_: MouseEvent| dispatch.reduce_mut(|store| store.actions.clear()));

    html! {
        <section class="h-48 shrink-0 border-t border-base-300 bg-base-200 flex flex-col" aria-label="Actions">
            <div class="flex items-center justify-between px-4 py-2">
                <h2 class="text-sm font-semibold uppercase tracking-wide opacity-70">{"Actions"}</h2>
                <button type="button" class="btn btn-ghost btn-xs" onclick={clear} disabled={log.is_empty()}>
                    {"Clear"}
                </button>
            </div>
            <ol class="flex-1 overflow-y-auto px-4 pb-2 font-mono text-xs">
                {if log.is_empty() {
                    html! { <li class="opacity-60">{"No actions recorded yet."}</li> }
                } else {
                    log.entries().iter().map(|entry| html! {
                        <li key={entry.seq} class="flex gap-3 py-0.5">
                            <span class="opacity-50">{format!("#{}", entry.seq)}</span>
                            <span class="text-primary">{entry.source.clone()}</span>
                            <span class="truncate">{entry.payload.clone()}</span>
                        </li>
                    }).collect::<Html>()
                }}
            </ol>
        </section>
    }
}
