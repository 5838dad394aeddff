use crate::components::foundations::tokens_with;
use crate::components::hooks::use_controllable;
use trellis_core::style::{CardVariant, Padding, card_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    /// Element id, also reported by `on_select`.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub padding: Padding,
    /// Makes the whole card a toggle button.
    #[prop_or_default]
    pub selectable: bool,
    #[prop_or_default]
    pub selected: Option<bool>,
    #[prop_or_default]
    pub default_selected: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    /// Emits `(id, selected)` after each toggle.
    #[prop_or_default]
    pub on_select: Callback<(AttrValue, bool)>,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let (current, select) = {
        let id = props.id.clone().unwrap_or_default();
        use_controllable(
            props.selected,
            Some(props.default_selected),
            props.on_select.reform(move |selected: bool| (id.clone(), selected)),
        )
    };
    let selected = props.selectable && current.unwrap_or(false);
    let classes = tokens_with(card_tokens(props.variant, props.padding, selected), &props.class);

    let header = (props.title.is_some() || props.subtitle.is_some())
        .then(|| {
            html! {
                <div>
                    {props.title.clone().map(|title| html! { <h3 class="card-title">{title}</h3> }).unwrap_or_default()}
                    {props.subtitle.clone().map(|subtitle| html! { <p class="text-sm opacity-70">{subtitle}</p> }).unwrap_or_default()}
                </div>
            }
        })
        .unwrap_or_default();
    let body = html! {
        <>
            {props.image.clone().map(|src| html! {
                <figure><img src={src} alt="" /></figure>
            }).unwrap_or_default()}
            <div class="card-body">
                {header}
                { for props.children.iter() }
                {props.actions.clone().map(|actions| html! {
                    <div class="card-actions justify-end">{actions}</div>
                }).unwrap_or_default()}
            </div>
        </>
    };

    if !props.selectable {
        return html! { <div id={props.id.clone()} class={classes}>{body}</div> };
    }

    let onclick = Callback::from(move |_: MouseEvent| select.emit(!selected));
    html! {
        <div
            id={props.id.clone()}
            class={classes!(classes, "cursor-pointer")}
            role="button"
            tabindex="0"
            aria-pressed={if selected { "true" } else { "false" }}
            onclick={onclick}
        >
            {body}
        </div>
    }
}
