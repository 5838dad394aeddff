use crate::components::foundations::tokens_with;
use trellis_core::style::{LoadingKind, Size, loading_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub kind: LoadingKind,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_else(|| AttrValue::from("Loading"))]
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <span
            class={tokens_with(loading_tokens(props.kind, props.size), &props.class)}
            role="status"
            aria-label={props.label.clone()}
        ></span>
    }
}
