//! Multi-choice group; the selection is an ordered list of option values.

use crate::components::atoms::Checkbox;
use crate::components::foundations::classes_from;
use crate::components::hooks::use_controllable;
use trellis_core::items::OptionItem;
use trellis_core::resolver::{is_member, toggle_member};
use trellis_core::style::{Color, Orientation, Size, option_group_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CheckboxGroupProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub options: Vec<OptionItem>,
    #[prop_or_default]
    pub value: Option<Vec<String>>,
    #[prop_or_default]
    pub default_value: Option<Vec<String>>,
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
    pub on_change: Callback<Vec<String>>,
}

#[function_component(CheckboxGroup)]
pub fn checkbox_group(props: &CheckboxGroupProps) -> Html {
    let (current, select) = use_controllable(
        props.value.clone(),
        props.default_value.clone(),
        props.on_change.clone(),
    );

    html! {
        <fieldset class={classes!("fieldset", props.class.clone())}>
            {props.legend.clone().map(|legend| html! {
                <legend class="fieldset-legend">{legend}</legend>
            }).unwrap_or_default()}
            <div class={classes_from(option_group_tokens(props.orientation))}>
                {for props.options.iter().map(|option| {
                    let onchange = {
                        let select = select.clone();
                        let selected = current.clone().unwrap_or_default();
                        let member = option.value.clone();
                        let options = props.options.clone();
                        Callback::from(move |_: bool| {
                            select.emit(toggle_member(&selected, &member, &options));
                        })
                    };
                    html! {
                        <Checkbox
                            key={option.value.clone()}
                            name={props.name.clone()}
                            value={AttrValue::from(option.value.clone())}
                            label={AttrValue::from(option.label.clone())}
                            description={option.description.clone().map(AttrValue::from)}
                            checked={is_member(current.as_ref(), &option.value)}
                            disabled={props.disabled || option.disabled}
                            tone={props.tone}
                            size={props.size}
                            onchange={onchange}
                        />
                    }
                })}
            </div>
        </fieldset>
    }
}
