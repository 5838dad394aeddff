use crate::components::foundations::{classes_from, optional_text};
use trellis_core::style::{Padding, Surface, section_padding_class, surface_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub padding: Padding,
    #[prop_or_default]
    pub background: Surface,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let heading = props.title.as_ref().map_or_else(Html::default, |title| {
        html! {
            <header class="mb-8 flex flex-col gap-2">
                <h2 class="text-3xl font-bold">{title.clone()}</h2>
                {optional_text(props.description.as_ref(), "opacity-70")}
            </header>
        }
    });

    html! {
        <section
            id={props.id.clone()}
            class={classes!(
                classes_from(surface_tokens(props.background)),
                section_padding_class(props.padding),
                props.class.clone()
            )}
        >
            {heading}
            { for props.children.iter() }
        </section>
    }
}
