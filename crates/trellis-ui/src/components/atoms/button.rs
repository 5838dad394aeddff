use crate::components::foundations::tokens_with;
use trellis_core::style::{ButtonVariant, Color, LoadingKind, Size, button_tokens, loading_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub tone: Option<Color>,
    /// Shows a spinner and disables the button.
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub block: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub r#type: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = tokens_with(
        button_tokens(props.variant, props.size, props.tone, props.block),
        &props.class,
    );
    let spinner = if props.loading {
        let spinner = loading_tokens(LoadingKind::Spinner, props.size).to_class_string();
        html! { <span class={spinner} aria-hidden="true"></span> }
    } else {
        Html::default()
    };

    html! {
        <button
            class={classes}
            disabled={props.disabled || props.loading}
            aria-busy={props.loading.then_some("true")}
            aria-label={props.aria_label.clone()}
            r#type={props.r#type.clone().unwrap_or_else(|| AttrValue::from("button"))}
            onclick={props.onclick.clone()}
        >
            {spinner}
            { for props.children.iter() }
        </button>
    }
}
