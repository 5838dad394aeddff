use super::{use_actions, use_fixtures};
use crate::components::pages::{DashboardPage, LandingPage};
use yew::prelude::*;

#[function_component(LandingStory)]
pub(crate) fn landing_story() -> Html {
    let actions = use_actions();
    let fixtures = use_fixtures();
    html! {
        <LandingPage
            nav={fixtures.nav.clone()}
            stats={fixtures.stats.clone()}
            footer_columns={fixtures.footer_columns.clone()}
            on_get_started={actions.callback::<()>("LandingPage.on_get_started")}
            on_learn_more={actions.callback::<()>("LandingPage.on_learn_more")}
        />
    }
}

#[function_component(DashboardStory)]
pub(crate) fn dashboard_story() -> Html {
    let actions = use_actions();
    let fixtures = use_fixtures();
    let files = use_state(|| fixtures.files.clone());

    let on_remove = {
        let files = files.clone();
        let log = actions.callback::<AttrValue>("DashboardPage.on_remove_file");
        Callback::from(move |id: AttrValue| {
            log.emit(id.clone());
            let remaining = files
                .iter()
                .filter(|file| file.id != id.as_str())
                .cloned()
                .collect();
            files.set(remaining);
        })
    };

    html! {
        <DashboardPage
            nav={fixtures.nav.clone()}
            breadcrumbs={fixtures.breadcrumbs.clone()}
            stats={fixtures.stats.clone()}
            files={(*files).clone()}
            activity={fixtures.timeline.clone()}
            on_select_file={actions.callback::<(AttrValue, bool)>("DashboardPage.on_select_file")}
            on_remove_file={on_remove}
        />
    }
}
