use crate::components::foundations::{render_container, tokens_with};
use trellis_core::style::{Orientation, Padding, stack_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StackProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub direction: Orientation,
    #[prop_or_default]
    pub gap: Padding,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Stack)]
pub fn stack(props: &StackProps) -> Html {
    render_container(
        "div",
        tokens_with(stack_tokens(props.direction, props.gap), &props.class),
        props.id.as_ref(),
        &props.children,
    )
}
