use crate::components::foundations::{render_container, tokens_with};
use trellis_core::style::{Columns, Padding, gap_class, grid_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GridProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub columns: Columns,
    #[prop_or_default]
    pub gap: Padding,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Grid)]
pub fn grid(props: &GridProps) -> Html {
    let classes = tokens_with(
        grid_tokens(props.columns).with(gap_class(props.gap)),
        &props.class,
    );
    render_container("div", classes, props.id.as_ref(), &props.children)
}
