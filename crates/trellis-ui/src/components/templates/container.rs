use crate::components::foundations::{render_container, tokens_with};
use trellis_core::style::{ContainerWidth, Padding, container_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub width: ContainerWidth,
    #[prop_or_default]
    pub padding: Padding,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    render_container(
        "div",
        tokens_with(container_tokens(props.width, props.padding), &props.class),
        props.id.as_ref(),
        &props.children,
    )
}
