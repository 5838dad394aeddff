use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    /// Id of the wrapped control, used for the label's `for` attribute.
    #[prop_or_default]
    pub html_for: Option<AttrValue>,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
    /// Replaces the hint when present.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let footnote = match (&props.error, &props.hint) {
        (Some(error), _) => html! { <p class="label text-error" role="alert">{error.clone()}</p> },
        (None, Some(hint)) => html! { <p class="label">{hint.clone()}</p> },
        (None, None) => Html::default(),
    };

    html! {
        <fieldset class={classes!("fieldset", props.class.clone())}>
            <label class="fieldset-legend" for={props.html_for.clone()}>
                {props.label.clone()}
                {props.required.then(|| html! {
                    <span class="text-error" aria-hidden="true">{"*"}</span>
                }).unwrap_or_default()}
            </label>
            { for props.children.iter() }
            {footnote}
        </fieldset>
    }
}
