use trellis_core::style::{Color, Size, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextareaProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or(3)]
    pub rows: u32,
    #[prop_or_default]
    pub tone: Option<Color>,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(Textarea)]
pub fn textarea(props: &TextareaProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                oninput.emit(area.value());
            }
        })
    };

    html! {
        <textarea
            class={classes!(
                "textarea",
                props.size.with_prefix("textarea"),
                tone_class("textarea", props.tone),
                props.class.clone()
            )}
            id={props.id.clone()}
            name={props.name.clone()}
            rows={props.rows.to_string()}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            disabled={props.disabled}
            oninput={oninput}
        />
    }
}
