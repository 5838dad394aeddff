use crate::components::foundations::classes_from;
use trellis_core::style::{AvatarShape, Size, avatar_tokens};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    #[prop_or_default]
    pub src: Option<AttrValue>,
    #[prop_or_default]
    pub alt: Option<AttrValue>,
    /// Shown when no image source is given.
    #[prop_or_default]
    pub initials: Option<AttrValue>,
    #[prop_or_default]
    pub size: Size,
    #[prop_or_default]
    pub shape: AvatarShape,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let frame = classes_from(avatar_tokens(props.size, props.shape));
    let alt = props
        .alt
        .clone()
        .unwrap_or_else(|| AttrValue::from("avatar"));

    if let Some(src) = &props.src {
        return html! {
            <div class={classes!("avatar", props.class.clone())}>
                <div class={frame}>
                    <img src={src.clone()} alt={alt} />
                </div>
            </div>
        };
    }

    html! {
        <div class={classes!("avatar", "avatar-placeholder", props.class.clone())}>
            <div class={classes!(frame, "bg-neutral", "text-neutral-content")}>
                {props.initials.clone().map_or_else(
                    || html! { <span aria-hidden="true"></span> },
                    |initials| html! { <span aria-label={alt.clone()}>{initials}</span> },
                )}
            </div>
        </div>
    }
}
