use crate::components::atoms::Button;
use crate::components::foundations::{optional_text, tokens_with};
use trellis_core::style::{ButtonVariant, Color, CtaVariant, Size, cta_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub variant: CtaVariant,
    #[prop_or_default]
    pub primary_label: Option<AttrValue>,
    #[prop_or_default]
    pub secondary_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_primary: Callback<()>,
    #[prop_or_default]
    pub on_secondary: Callback<()>,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
    let banner = props.variant == CtaVariant::Banner;
    let primary = props.primary_label.clone().map(|label| {
        let onclick = props.on_primary.reform(|_: MouseEvent| ());
        html! {
            <Button
                size={Size::Lg}
                tone={Some(if banner { Color::Neutral } else { Color::Primary })}
                onclick={onclick}
            >
                {label}
            </Button>
        }
    });
    let secondary = props.secondary_label.clone().map(|label| {
        let onclick = props.on_secondary.reform(|_: MouseEvent| ());
        html! {
            <Button size={Size::Lg} variant={ButtonVariant::Ghost} onclick={onclick}>
                {label}
            </Button>
        }
    });

    html! {
        <section class={tokens_with(cta_tokens(props.variant), &props.class)}>
            <div class="flex flex-col gap-2">
                <h2 class="text-3xl font-bold">{props.title.clone()}</h2>
                {optional_text(props.description.as_ref(), "text-lg opacity-80")}
            </div>
            <div class="flex flex-wrap gap-2">
                {primary.unwrap_or_default()}
                {secondary.unwrap_or_default()}
            </div>
        </section>
    }
}
