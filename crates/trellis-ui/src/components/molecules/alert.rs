use crate::components::foundations::tokens_with;
use trellis_core::style::{AlertKind, alert_icon, alert_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    #[prop_or_default]
    pub kind: AlertKind,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Adds a close button that hides the alert.
    #[prop_or_default]
    pub dismissible: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_dismiss: Callback<()>,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let visible = use_state_eq(|| true);
    if !*visible {
        return Html::default();
    }

    let dismiss = {
        let visible = visible.clone();
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| {
            visible.set(false);
            on_dismiss.emit(());
        })
    };

    html! {
        <div class={tokens_with(alert_tokens(props.kind), &props.class)} role="alert">
            <span class={classes!("iconify", alert_icon(props.kind), "size-5")} aria-hidden="true"></span>
            <div class="flex-1">
                {props.title.clone().map(|title| html! { <h3 class="font-bold">{title}</h3> }).unwrap_or_default()}
                {props.description.clone().map(|desc| html! { <div class="text-sm">{desc}</div> }).unwrap_or_default()}
                { for props.children.iter() }
            </div>
            {props.dismissible.then(|| html! {
                <button
                    type="button"
                    class="btn btn-ghost btn-sm btn-circle"
                    aria-label="Dismiss"
                    onclick={dismiss}
                >
                    <span class="iconify lucide--x size-4"></span>
                </button>
            }).unwrap_or_default()}
        </div>
    }
}
