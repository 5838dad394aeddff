//! Single-choice group backed by the controlled/uncontrolled resolver.

use crate::components::atoms::Radio;
use crate::components::foundations::{classes_from, restore_radios};
use crate::components::hooks::use_restorable;
use trellis_core::items::OptionItem;
use trellis_core::style::{Color, Orientation, Size, option_group_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RadioGroupProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub options: Vec<OptionItem>,
    /// Controlled selection. When set at first render the parent owns the value.
    #[prop_or_default]
    pub value: Option<String>,
    /// Initial selection for the uncontrolled mode.
    #[prop_or_default]
    pub default_value: Option<String>,
    #[prop_or_default]
    pub legend: Option<AttrValue>,
    #[prop_or_default]
    pub orientation: Orientation,
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

#[function_component(RadioGroup)]
pub fn radio_group(props: &RadioGroupProps) -> Html {
    let node = use_node_ref();
    let restore = {
        let node = node.clone();
        Callback::from(move |value: Option<String>| {
            restore_radios(&node, |candidate| value.as_deref() == Some(candidate));
        })
    };
    let (current, select) = use_restorable(
        props.value.clone(),
        props.default_value.clone(),
        props.on_change.clone(),
        restore,
    );
    let onselect = select.reform(|value: AttrValue| value.to_string());

    html! {
        <fieldset class={classes!("fieldset", props.class.clone())} role="radiogroup">
            {props.legend.clone().map(|legend| html! {
                <legend class="fieldset-legend">{legend}</legend>
            }).unwrap_or_default()}
            <div ref={node} class={classes_from(option_group_tokens(props.orientation))}>
                {for props.options.iter().map(|option| html! {
                    <Radio
                        key={option.value.clone()}
                        name={props.name.clone()}
                        value={AttrValue::from(option.value.clone())}
                        label={AttrValue::from(option.label.clone())}
                        description={option.description.clone().map(AttrValue::from)}
                        checked={current.as_ref() == Some(&option.value)}
                        disabled={props.disabled || option.disabled}
                        tone={props.tone}
                        size={props.size}
                        onselect={onselect.clone()}
                    />
                })}
            </div>
        </fieldset>
    }
}
