use crate::components::foundations::tokens_with;
use trellis_core::style::{BadgeVariant, Color, Size, badge_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: BadgeVariant,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub tone: Option<Color>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let classes = tokens_with(
        badge_tokens(props.variant, props.size, props.tone),
        &props.class,
    );

    html! {
        <span class={classes}>
            { for props.children.iter() }
        </span>
    }
}
