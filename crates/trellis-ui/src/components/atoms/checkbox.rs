use trellis_core::style::{Color, Size, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
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

#[function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> Html {
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
        <label class={classes!("label", "cursor-pointer", "gap-2", props.disabled.then_some("opacity-60"))}>
            <input
                type="checkbox"
                class={classes!(
                    "checkbox",
                    props.size.with_prefix("checkbox"),
                    tone_class("checkbox", props.tone),
                    props.class.clone()
                )}
                name={props.name.clone()}
                value={props.value.clone()}
                disabled={props.disabled}
                checked={props.checked}
                onchange={onchange}
            />
            <span class="flex flex-col">
                {props.label.clone().map(|text| html! { <span>{text}</span> }).unwrap_or_default()}
                {props.description.clone().map(|text| html! {
                    <span class="text-xs text-base-content/60">{text}</span>
                }).unwrap_or_default()}
            </span>
        </label>
    }
}
