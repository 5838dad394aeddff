use crate::components::hooks::use_restorable;
use trellis_core::items::OptionItem;
use trellis_core::style::{Color, Size, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    #[prop_or_default]
    pub options: Vec<OptionItem>,
    /// Controlled selection; leave unset to let the select own its value.
    #[prop_or_default]
    pub value: Option<String>,
    #[prop_or_default]
    pub default_value: Option<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub tone: Option<Color>,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_change: Callback<String>,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let node = use_node_ref();
    let restore = {
        let node = node.clone();
        Callback::from(move |value: Option<String>| {
            if let Some(select) = node.cast::<web_sys::HtmlSelectElement>() {
                select.set_value(value.as_deref().unwrap_or_default());
            }
        })
    };
    let (current, select) = use_restorable(
        props.value.clone(),
        props.default_value.clone(),
        props.on_change.clone(),
        restore,
    );
    let onchange = Callback::from(move |event: Event| {
        if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
            select.emit(target.value());
        }
    });

    html! {
        <select
            ref={node}
            class={classes!(
                "select",
                props.size.with_prefix("select"),
                tone_class("select", props.tone),
                props.class.clone()
            )}
            id={props.id.clone()}
            name={props.name.clone()}
            disabled={props.disabled}
            onchange={onchange}
        >
            {props.placeholder.clone().map(|text| html! {
                <option selected={current.is_none()} disabled={true} value="">
                    {text}
                </option>
            }).unwrap_or_default()}
            {for props.options.iter().map(|option| {
                let selected = current.as_ref() == Some(&option.value);
                html! {
                    <option
                        value={option.value.clone()}
                        selected={selected}
                        disabled={option.disabled}
                    >
                        {option.label.clone()}
                    </option>
                }
            })}
        </select>
    }
}
