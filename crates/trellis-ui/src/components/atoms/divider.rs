use trellis_core::style::Orientation;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DividerProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// Axis of the surrounding layout; `Horizontal` draws a vertical rule
    /// between side-by-side items.
    #[prop_or_default]
    pub orientation: Orientation,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Divider)]
pub fn divider(props: &DividerProps) -> Html {
    let classes = classes!(
        "divider",
        (props.orientation == Orientation::Horizontal).then_some("divider-horizontal"),
        props.class.clone()
    );
    html! {
        <div class={classes} role="separator">
            {props.label.clone().unwrap_or_default()}
        </div>
    }
}
