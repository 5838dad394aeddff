use trellis_core::style::{Color, Size, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RadioProps {
    pub name: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
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
    /// Emits the radio's value when it becomes checked.
    #[prop_or_default]
    pub onselect: Callback<AttrValue>,
}

#[function_component(Radio)]
pub fn radio(props: &RadioProps) -> Html {
    let onchange = {
        let onselect = props.onselect.clone();
        let value = props.value.clone();
        let rendered = props.checked;
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let checked = input.checked();
            // The DOM follows `checked` until the owner renders a new value.
            input.set_checked(rendered);
            if checked {
                onselect.emit(value.clone());
            }
        })
    };

    html! {
        <label class={classes!("label", "cursor-pointer", "gap-2", props.disabled.then_some("opacity-60"))}>
            <input
                type="radio"
                class={classes!(
                    "radio",
                    props.size.with_prefix("radio"),
                    tone_class("radio", props.tone),
                    props.class.clone()
                )}
                name={props.name.clone()}
                value={props.value.clone()}
                checked={props.checked}
                disabled={props.disabled}
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
