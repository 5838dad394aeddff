use trellis_core::style::{Color, Size, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToggleProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub tone: Option<Color>,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<bool>,
}

#[function_component(Toggle)]
pub fn toggle(props: &ToggleProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        let rendered = props.checked;
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                let checked = input.checked();
                input.set_checked(rendered);
                onchange.emit(checked);
            }
        })
    };

    html! {
        <label class="label cursor-pointer gap-2">
            <input
                type="checkbox"
                role="switch"
                class={classes!(
                    "toggle",
                    props.size.with_prefix("toggle"),
                    tone_class("toggle", props.tone),
                    props.class.clone()
                )}
                checked={props.checked}
                disabled={props.disabled}
                onchange={onchange}
            />
            {props.label.clone().map(|text| html! { <span>{text}</span> }).unwrap_or_default()}
        </label>
    }
}
